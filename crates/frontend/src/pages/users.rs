use super::{TABLE, TD, TH, mutation_outcome, remote_status, use_title};
use crate::layout::Layout;
use vera_core::{User, UserDraft};
use vera_frontend_common::components::icons::{PencilIcon, PlusIcon, TrashIcon};
use vera_frontend_common::components::{
    IconButton, Input, PopupDialog, PopupLoading, PopupWindow, Row, TextButton,
};
use vera_frontend_common::format::Timestamp;
use vera_frontend_common::hooks::{EditorAction, Remote, use_editor};
use vera_frontend_common::{use_remote, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const DELETE_MESSAGE: &str = "Are you sure you want to delete this user? This action cannot be undone.";

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    use_title("User | Vera");
    let session = use_session();
    let identity = session.client().identity();
    let editor = use_editor::<UserDraft, i64>();

    let users = {
        let identity = identity.clone();
        use_remote((), move |()| async move { identity.list_users().await })
    };

    let on_create = {
        let editor = editor.clone();
        Callback::from(move |()| editor.dispatch(EditorAction::Edit(UserDraft::new())))
    };

    let on_email = {
        let editor = editor.clone();
        Callback::from(move |email: String| {
            if let Some(draft) = editor.draft() {
                editor.dispatch(EditorAction::Update(UserDraft {
                    email,
                    ..draft.clone()
                }));
            }
        })
    };

    let on_save = {
        let editor = editor.clone();
        let identity = identity.clone();
        let reload = users.reload.clone();
        Callback::from(move |()| {
            let Some(draft) = editor.draft().cloned() else {
                return;
            };
            editor.dispatch(EditorAction::BeginSave);
            let dispatcher = editor.dispatcher();
            let identity = identity.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let outcome = mutation_outcome(identity.save_user(&draft).await);
                dispatcher.dispatch(EditorAction::Finish(outcome));
                reload.emit(());
            });
        })
    };

    let on_delete = {
        let editor = editor.clone();
        let reload = users.reload.clone();
        Callback::from(move |()| {
            let Some(id) = editor.pending_delete().copied() else {
                return;
            };
            editor.dispatch(EditorAction::BeginDelete);
            let dispatcher = editor.dispatcher();
            let identity = identity.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let outcome = mutation_outcome(identity.delete_user(id).await);
                dispatcher.dispatch(EditorAction::Finish(outcome));
                reload.emit(());
            });
        })
    };

    let on_dismiss = {
        let editor = editor.clone();
        Callback::from(move |()| editor.dispatch(EditorAction::Dismiss))
    };

    let table = match &users.data {
        Remote::Ready(list) => html! {
            <div>
                <header class="mb-4 flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"User List"}</h1>
                    <IconButton icon={html! { <PlusIcon size={20} /> }} title="Create user" onclick={on_create} />
                </header>
                <div class="overflow-x-auto rounded-lg border border-gray-200 bg-white">
                    <table class={TABLE}>
                        <thead class="bg-gray-50">
                            <tr>
                                { for ["ROW", "NAME", "EMAIL", "PICTURE", "LAST LOGIN", "CREATED", "UPDATED", "FUNCTION"]
                                    .iter()
                                    .map(|heading| html! { <th class={TH}>{*heading}</th> }) }
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            { for list.iter().enumerate().map(|(index, user)| html! {
                                <UserRow key={user.id} row={index + 1} user={user.clone()} editor={editor.clone()} />
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        },
        _ => html! {},
    };

    html! {
        <Layout>
            <div class="p-6">
                {remote_status(&users.data, "users").unwrap_or_default()}
                {table}

                <PopupLoading open={editor.is_saving()} />
                if let Some(draft) = editor.draft() {
                    <PopupWindow
                        title={if draft.is_new() { "Create User" } else { "Edit User" }}
                        onclose={Some(on_dismiss.clone())}
                    >
                        <Row label="Email">
                            <Input value={draft.email.clone()} onchange={on_email} />
                        </Row>
                        <footer class="mt-6 flex justify-end">
                            <TextButton text="Confirm" onclick={on_save} />
                        </footer>
                    </PopupWindow>
                }
                if let Some((title, message)) = editor.failure() {
                    <PopupDialog
                        title={title.to_string()}
                        message={message.to_string()}
                        cancelable=true
                        onclose={on_dismiss.clone()}
                    />
                }
                <PopupDialog
                    open={editor.pending_delete().is_some()}
                    title="Delete User"
                    message={DELETE_MESSAGE}
                    cancelable=true
                    onconfirm={on_delete}
                    onclose={on_dismiss}
                />
            </div>
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
struct UserRowProps {
    row: usize,
    user: User,
    editor: UseReducerHandle<vera_frontend_common::hooks::Editor<UserDraft, i64>>,
}

#[function_component(UserRow)]
fn user_row(props: &UserRowProps) -> Html {
    let user = &props.user;

    let on_edit = {
        let editor = props.editor.clone();
        let draft = UserDraft::from(user);
        Callback::from(move |()| editor.dispatch(EditorAction::Edit(draft.clone())))
    };
    let on_delete = {
        let editor = props.editor.clone();
        let id = user.id;
        Callback::from(move |()| editor.dispatch(EditorAction::ConfirmDelete(id)))
    };

    let empty = || html! { <span class="text-gray-400">{"-"}</span> };

    html! {
        <tr class="hover:bg-gray-50">
            <td class={TD}>{props.row}</td>
            <td class={TD}>
                { user.name.as_ref().map_or_else(empty, |name| html! { <span>{name}</span> }) }
            </td>
            <td class={TD}>{&user.email}</td>
            <td class={TD}>
                { user.picture.as_ref().map_or_else(empty, |picture| html! {
                    <img class="h-10 w-10 rounded-full object-cover" src={picture.clone()} alt={format!("{} picture", user.email)} />
                }) }
            </td>
            <td class={TD}><Timestamp value={user.last_login_at} /></td>
            <td class={TD}><Timestamp value={Some(user.created_at)} /></td>
            <td class={TD}><Timestamp value={Some(user.updated_at)} /></td>
            <td class={TD}>
                <div class="flex gap-1">
                    <IconButton icon={html! { <PencilIcon size={20} /> }} title="Edit" onclick={on_edit} />
                    <IconButton icon={html! { <TrashIcon size={20} /> }} title="Delete" onclick={on_delete} />
                </div>
            </td>
        </tr>
    }
}
