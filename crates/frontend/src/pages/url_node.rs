//! Folder browser for the drive tree

use super::{TABLE, TD, TH, mutation_outcome, remote_status, use_title};
use crate::layout::Layout;
use crate::routes::Route;
use vera_core::{UrlDraft, UrlEntry, UrlKind, UrlNode};
use vera_frontend_common::components::icons::{
    ChevronRightIcon, ExternalLinkIcon, FolderIcon, FolderOpenIcon, LinkIcon, PencilIcon,
    PlusIcon, TrashIcon,
};
use vera_frontend_common::components::{
    IconButton, Input, PopupDialog, PopupLoading, PopupWindow, Radio, RadioOption, Row,
    TextButton,
};
use vera_frontend_common::format::Timestamp;
use vera_frontend_common::hooks::{Editor, EditorAction, Remote, use_editor};
use vera_frontend_common::{use_remote, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const DELETE_MESSAGE: &str = "Are you sure you want to delete this URL? This action cannot be undone.";

type UrlEditor = UseReducerHandle<Editor<UrlDraft, String>>;

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!(error = ?e, url, "Failed to open link");
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlNodePageProps {
    pub id: String,
}

#[function_component(UrlNodePage)]
pub fn url_node_page(props: &UrlNodePageProps) -> Html {
    use_title("URL | Vera");
    let session = use_session();
    let drive = session.client().drive();
    let editor = use_editor::<UrlDraft, String>();

    let node = {
        let drive = drive.clone();
        use_remote(props.id.clone(), move |id| async move {
            drive.get_node(&id).await
        })
    };

    let on_create = {
        let editor = editor.clone();
        let id = props.id.clone();
        Callback::from(move |()| editor.dispatch(EditorAction::Edit(UrlDraft::new_in(id.clone()))))
    };

    let on_save = {
        let editor = editor.clone();
        let drive = drive.clone();
        let reload = node.reload.clone();
        Callback::from(move |()| {
            let Some(draft) = editor.draft().cloned() else {
                return;
            };
            editor.dispatch(EditorAction::BeginSave);
            let dispatcher = editor.dispatcher();
            let drive = drive.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let outcome = mutation_outcome(drive.save_node(&draft).await);
                dispatcher.dispatch(EditorAction::Finish(outcome));
                reload.emit(());
            });
        })
    };

    let on_delete = {
        let editor = editor.clone();
        let reload = node.reload.clone();
        Callback::from(move |()| {
            let Some(id) = editor.pending_delete().cloned() else {
                return;
            };
            editor.dispatch(EditorAction::BeginDelete);
            let dispatcher = editor.dispatcher();
            let drive = drive.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let outcome = mutation_outcome(drive.delete_node(&id).await);
                dispatcher.dispatch(EditorAction::Finish(outcome));
                reload.emit(());
            });
        })
    };

    let on_dismiss = {
        let editor = editor.clone();
        Callback::from(move |()| editor.dispatch(EditorAction::Dismiss))
    };

    let content = match &node.data {
        Remote::Ready(node) => html! {
            <div>
                <Breadcrumbs node={node.as_ref().clone()} />
                <header class="mb-4 flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"URL"}</h1>
                    <IconButton icon={html! { <PlusIcon size={20} /> }} title="Create URL" onclick={on_create} />
                </header>
                <div class="overflow-x-auto rounded-lg border border-gray-200 bg-white">
                    <table class={TABLE}>
                        <thead class="bg-gray-50">
                            <tr>
                                { for ["NAME", "CREATED", "UPDATED", "FUNCTION"]
                                    .iter()
                                    .map(|heading| html! { <th class={TH}>{*heading}</th> }) }
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            if node.children.is_empty() {
                                <tr>
                                    <td class="px-4 py-10 text-center text-gray-400" colspan="4">{"Empty..."}</td>
                                </tr>
                            } else {
                                { for node.sorted_children().into_iter().map(|entry| html! {
                                    <EntryRow
                                        key={entry.id.clone()}
                                        parent_id={node.entry.id.clone()}
                                        entry={entry.clone()}
                                        editor={editor.clone()}
                                    />
                                }) }
                            }
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
                {remote_status(&node.data, "urls").unwrap_or_default()}
                {content}

                <PopupLoading open={editor.is_saving()} />
                if let Some(draft) = editor.draft() {
                    <PopupWindow
                        title={if draft.is_new() { "Create URL" } else { "Edit URL" }}
                        onclose={Some(on_dismiss.clone())}
                    >
                        <DraftForm draft={draft.clone()} editor={editor.clone()} />
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
                    title="Delete URL"
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
struct BreadcrumbsProps {
    node: UrlNode,
}

#[function_component(Breadcrumbs)]
fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    let crumbs = props.node.breadcrumbs();
    let last = crumbs.len().saturating_sub(1);

    html! {
        <nav class="mb-4 flex flex-wrap items-center gap-1 text-sm text-gray-500">
            { for crumbs.into_iter().enumerate().map(|(index, crumb)| html! {
                <>
                    <Link<Route>
                        to={Route::UrlNode { id: crumb.id }}
                        classes={if index == last { "font-medium text-gray-900" } else { "hover:text-blue-600" }}
                    >
                        {crumb.label}
                    </Link<Route>>
                    if index != last {
                        <ChevronRightIcon size={14} />
                    }
                </>
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct EntryRowProps {
    entry: UrlEntry,
    parent_id: String,
    editor: UrlEditor,
}

#[function_component(EntryRow)]
fn entry_row(props: &EntryRowProps) -> Html {
    let navigator = use_navigator();
    let entry = &props.entry;

    let on_edit = {
        let editor = props.editor.clone();
        let draft = UrlDraft::from_entry(entry, props.parent_id.clone());
        Callback::from(move |()| editor.dispatch(EditorAction::Edit(draft.clone())))
    };
    let on_delete = {
        let editor = props.editor.clone();
        let id = entry.id.clone();
        Callback::from(move |()| editor.dispatch(EditorAction::ConfirmDelete(id.clone())))
    };

    let open = match entry.kind {
        UrlKind::Folder => {
            let id = entry.id.clone();
            let onclick = Callback::from(move |()| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::UrlNode { id: id.clone() });
                }
            });
            html! { <IconButton icon={html! { <FolderOpenIcon size={20} /> }} title="Open" {onclick} /> }
        }
        UrlKind::Url => {
            let url = entry.url.clone().unwrap_or_default();
            let onclick = Callback::from(move |()| open_in_new_tab(&url));
            html! { <IconButton icon={html! { <ExternalLinkIcon size={20} /> }} title="Open link" {onclick} /> }
        }
    };

    let icon = match entry.kind {
        UrlKind::Folder => html! { <FolderIcon class="text-yellow-500" /> },
        UrlKind::Url => html! { <LinkIcon class="text-blue-500" /> },
    };

    html! {
        <tr class="hover:bg-gray-50">
            <td class={TD}>
                <span class="flex items-center gap-2">{icon}<span>{&entry.name}</span></span>
            </td>
            <td class={TD}><Timestamp value={Some(entry.created_at)} /></td>
            <td class={TD}><Timestamp value={Some(entry.updated_at)} /></td>
            <td class={TD}>
                <div class="flex gap-1">
                    <IconButton icon={html! { <PencilIcon size={20} /> }} title="Edit" onclick={on_edit} />
                    <IconButton icon={html! { <TrashIcon size={20} /> }} title="Delete" onclick={on_delete} />
                    {open}
                </div>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct DraftFormProps {
    draft: UrlDraft,
    editor: UrlEditor,
}

/// Type is fixed once a node exists; the url field only applies to links
#[function_component(DraftForm)]
fn draft_form(props: &DraftFormProps) -> Html {
    let draft = &props.draft;

    let update = |apply: fn(&mut UrlDraft, String)| {
        let editor = props.editor.clone();
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = draft.clone();
            apply(&mut next, value);
            editor.dispatch(EditorAction::Update(next));
        })
    };
    let on_name = update(|draft, name| draft.name = name);
    let on_url = update(|draft, url| draft.url = Some(url));
    let on_kind = {
        let editor = props.editor.clone();
        let draft = draft.clone();
        Callback::from(move |kind: UrlKind| {
            let mut next = draft.clone();
            next.set_kind(kind);
            editor.dispatch(EditorAction::Update(next));
        })
    };

    let kinds = [UrlKind::Url, UrlKind::Folder]
        .into_iter()
        .map(|kind| RadioOption {
            text: kind.label().into(),
            value: kind,
        })
        .collect::<Vec<_>>();

    html! {
        <div class="flex flex-col gap-4">
            if draft.is_new() {
                <Row label="Type">
                    <Radio<UrlKind> name="kind" options={kinds} value={draft.kind} onchange={on_kind} />
                </Row>
            }
            <Row label="Name">
                <Input value={draft.name.clone()} onchange={on_name} />
            </Row>
            if draft.kind == UrlKind::Url {
                <Row label="URL">
                    <Input value={draft.url.clone().unwrap_or_default()} onchange={on_url} />
                </Row>
            }
        </div>
    }
}
