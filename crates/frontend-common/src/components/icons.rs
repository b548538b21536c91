//! Inline stroke icons

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IconProps {
    #[prop_or(18)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

fn stroke_icon(props: &IconProps, body: Html) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {body}
        </svg>
    }
}

macro_rules! icon {
    ($(#[$doc:meta])* $name:ident, $fn_name:ident, $body:tt) => {
        $(#[$doc])*
        #[function_component($name)]
        pub fn $fn_name(props: &IconProps) -> Html {
            stroke_icon(props, html! $body)
        }
    };
}

icon!(CloseIcon, close_icon, {
    <><path d="M18 6 6 18" /><path d="m6 6 12 12" /></>
});

icon!(PencilIcon, pencil_icon, {
    <><path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z" /><path d="m15 5 4 4" /></>
});

icon!(TrashIcon, trash_icon, {
    <>
        <path d="M3 6h18" />
        <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
        <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
    </>
});

icon!(ExternalLinkIcon, external_link_icon, {
    <>
        <path d="M15 3h6v6" />
        <path d="M10 14 21 3" />
        <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
    </>
});

icon!(FolderOpenIcon, folder_open_icon, {
    <path d="m6 14 1.5-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.54 6a2 2 0 0 1-1.95 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.69.9l.81 1.2a2 2 0 0 0 1.67.9H18a2 2 0 0 1 2 2v2" />
});

icon!(FolderIcon, folder_icon, {
    <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
});

icon!(LinkIcon, link_icon, {
    <>
        <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" />
        <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" />
    </>
});

icon!(PlusIcon, plus_icon, {
    <><path d="M5 12h14" /><path d="M12 5v14" /></>
});

icon!(ChevronRightIcon, chevron_right_icon, {
    <path d="m9 18 6-6-6-6" />
});

icon!(UserIcon, user_icon, {
    <><circle cx="12" cy="8" r="5" /><path d="M20 21a8 8 0 0 0-16 0" /></>
});

icon!(BookmarkIcon, bookmark_icon, {
    <path d="m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" />
});

icon!(PlayIcon, play_icon, {
    <>
        <rect x="3" y="3" width="18" height="18" rx="2" />
        <path d="m9 8 6 4-6 4Z" />
    </>
});

icon!(MailIcon, mail_icon, {
    <>
        <rect x="2" y="4" width="20" height="16" rx="2" />
        <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
    </>
});

icon!(LogOutIcon, log_out_icon, {
    <>
        <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
        <path d="m16 17 5-5-5-5" />
        <path d="M21 12H9" />
    </>
});

icon!(
    /// Spinning circle used by [`super::Loading`]
    LoaderIcon, loader_icon, {
    <path d="M21 12a9 9 0 1 1-6.219-8.56" />
});
