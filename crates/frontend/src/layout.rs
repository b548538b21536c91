//! Signed-in shell: sidebar navigation, account menu and the session guard

use crate::routes::Route;
use vera_frontend_common::components::icons::{
    BookmarkIcon, LogOutIcon, MailIcon, PlayIcon, UserIcon,
};
use vera_frontend_common::components::{ContextMenu, ContextMenuItem, MenuPosition, Spinner};
use vera_frontend_common::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

const LINK_BASE: &str = "flex items-center gap-2 rounded-md px-3 py-2 text-sm";
const LINK_IDLE: &str = "text-gray-600 hover:bg-gray-100";
const LINK_CURRENT: &str = "bg-blue-50 text-blue-700 font-medium";

/// Whether `path` is `prefix` or below it
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    prefix: &'static str,
    label: &'static str,
    icon: Html,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let state = if is_under(&path, props.prefix) {
        LINK_CURRENT
    } else {
        LINK_IDLE
    };

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(LINK_BASE, state)}>
            {props.icon.clone()}
            <span>{props.label}</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        let settled_out = !session.is_loading() && !session.is_authenticated();
        use_effect_with(settled_out, move |settled_out| {
            if *settled_out && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    }

    if session.is_loading() {
        return html! {
            <div class="flex h-screen items-center justify-center">
                <Spinner text="Loading..." />
            </div>
        };
    }
    let Some(claims) = session.claims().cloned() else {
        return html! { <Message text="Redirecting..." /> };
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |()| session.logout())
    };

    let account = html! {
        <footer class="flex items-center gap-2 rounded-md px-2 py-2 hover:bg-gray-100">
            <img class="h-[30px] w-[30px] rounded-full" src={claims.picture.clone()} alt="avatar" />
            <span class="truncate text-sm">{&claims.name}</span>
        </footer>
    };

    html! {
        <div class="flex h-screen">
            <aside class="flex w-56 shrink-0 flex-col border-r border-gray-200 bg-white p-3">
                <header class="mb-6 px-2 pt-2">
                    <Link<Route> to={Route::Dashboard} classes="text-lg font-bold tracking-widest">
                        {"VERA"}
                    </Link<Route>>
                </header>
                <nav class="flex flex-1 flex-col gap-1">
                    <NavLink to={Route::Users} prefix="/user" label="User" icon={html! { <UserIcon /> }} />
                    <NavLink to={Route::UrlRoot} prefix="/url" label="URL" icon={html! { <BookmarkIcon /> }} />
                    <NavLink to={Route::Video} prefix="/video" label="Video" icon={html! { <PlayIcon /> }} />
                </nav>
                <ContextMenu trigger={account} position={MenuPosition::Top}>
                    <ContextMenuItem icon={html! { <MailIcon /> }} disabled=true>
                        { AttrValue::from(claims.email.clone()) }
                    </ContextMenuItem>
                    <ContextMenuItem icon={html! { <LogOutIcon /> }} onclick={logout}>
                        {"Logout"}
                    </ContextMenuItem>
                </ContextMenu>
            </aside>
            <main class="flex-1 overflow-auto">{props.children.clone()}</main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MessageProps {
    text: &'static str,
}

#[function_component(Message)]
fn message(props: &MessageProps) -> Html {
    html! {
        <div class="flex h-screen items-center justify-center text-gray-500">{props.text}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_under;

    #[test]
    fn matches_section_prefixes() {
        assert!(is_under("/url", "/url"));
        assert!(is_under("/url/abc", "/url"));
        assert!(!is_under("/urls", "/url"));
        assert!(!is_under("/user", "/url"));
    }
}
