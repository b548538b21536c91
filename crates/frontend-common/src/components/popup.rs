//! Modal popups

use super::button::{ButtonStyle, IconButton, TextButton};
use super::icons::CloseIcon;
use super::spinner::Loading;
use gloo::events::EventListener;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

thread_local! {
    static OPEN_POPUPS: Cell<usize> = const { Cell::new(0) };
}

/// Next open-popup count, and the body lock to apply when it changes
fn next_scroll_lock(count: usize, opening: bool) -> (usize, Option<bool>) {
    if opening {
        (count + 1, (count == 0).then_some(true))
    } else {
        (count.saturating_sub(1), (count == 1).then_some(false))
    }
}

/// Page scroll stays locked while any popup is open
fn track_open_popup(opening: bool) {
    let (count, lock) = next_scroll_lock(OPEN_POPUPS.get(), opening);
    OPEN_POPUPS.set(count);
    if let Some(locked) = lock {
        set_body_scroll_locked(locked);
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "unset" };
    if let Err(e) = body.style().set_property("overflow", value) {
        tracing::debug!(error = ?e, "Failed to toggle body scroll");
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    #[prop_or(true)]
    pub open: bool,
    /// Backdrop click and Escape; omitted means the popup cannot be dismissed
    #[prop_or_default]
    pub onclose: Option<Callback<()>>,
    pub children: Children,
}

/// Full-screen backdrop with centred content
#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    use_effect_with(props.open, |open| {
        let open = *open;
        if open {
            track_open_popup(true);
        }
        move || {
            if open {
                track_open_popup(false);
            }
        }
    });

    {
        let onclose = props.onclose.clone();
        use_effect_with((props.open, onclose), |(open, onclose)| {
            let listener = match (open, onclose) {
                (true, Some(onclose)) => {
                    let onclose = onclose.clone();
                    Some(EventListener::new(
                        &gloo::utils::document(),
                        "keydown",
                        move |event| {
                            if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                                && event.key() == "Escape"
                            {
                                onclose.emit(());
                            }
                        },
                    ))
                }
                _ => None,
            };
            move || drop(listener)
        });
    }

    if !props.open {
        return html! {};
    }

    let onclick = {
        let onclose = props.onclose.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target()
                && let Some(onclose) = &onclose
            {
                onclose.emit(());
            }
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40" {onclick}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupLoadingProps {
    #[prop_or(true)]
    pub open: bool,
}

/// Blocking overlay shown while a mutation is in flight
#[function_component(PopupLoading)]
pub fn popup_loading(props: &PopupLoadingProps) -> Html {
    html! {
        <Popup open={props.open}>
            <div class="rounded-lg bg-white p-6 shadow-xl">
                <Loading size={40} />
            </div>
        </Popup>
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupWindowProps {
    #[prop_or(true)]
    pub open: bool,
    #[prop_or_default]
    pub onclose: Option<Callback<()>>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub children: Children,
}

/// Popup with a header carrying the title and a close button
#[function_component(PopupWindow)]
pub fn popup_window(props: &PopupWindowProps) -> Html {
    let close = props.onclose.clone().unwrap_or_default();
    html! {
        <Popup open={props.open} onclose={props.onclose.clone()}>
            <div class="w-full max-w-md rounded-lg bg-white shadow-xl">
                <header class="flex items-center justify-between border-b border-gray-200 px-5 py-3">
                    if let Some(title) = &props.title {
                        <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                    }
                    <IconButton icon={html! { <CloseIcon size={20} /> }} onclick={close} />
                </header>
                <div class="px-5 py-4">{props.children.clone()}</div>
            </div>
        </Popup>
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupDialogProps {
    #[prop_or(true)]
    pub open: bool,
    #[prop_or_default]
    pub onclose: Callback<()>,
    #[prop_or_default]
    pub onconfirm: Callback<()>,
    /// Show a Cancel button next to Confirm
    #[prop_or_default]
    pub cancelable: bool,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub message: AttrValue,
}

/// Message with Confirm (and optionally Cancel). Confirm fires `onconfirm`
/// and then `onclose`.
#[function_component(PopupDialog)]
pub fn popup_dialog(props: &PopupDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let confirm = {
        let onconfirm = props.onconfirm.clone();
        let onclose = props.onclose.clone();
        Callback::from(move |()| {
            onconfirm.emit(());
            onclose.emit(());
        })
    };

    html! {
        <PopupWindow title={props.title.clone()} onclose={Some(props.onclose.clone())}>
            <p class="whitespace-pre-wrap break-words text-sm text-gray-700">{&props.message}</p>
            <footer class="mt-6 flex justify-end gap-2">
                if props.cancelable {
                    <TextButton text="Cancel" style={ButtonStyle::Outline} onclick={props.onclose.clone()} />
                }
                <TextButton text="Confirm" style={ButtonStyle::Solid} onclick={confirm} />
            </footer>
        </PopupWindow>
    }
}
