//! Dropdown menu anchored to a trigger element

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl MenuPosition {
    fn classes(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-0 mb-2",
            Self::Bottom => "top-full left-0 mt-2",
            Self::Left => "right-full top-0 mr-2",
            Self::Right => "left-full top-0 ml-2",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContextMenuProps {
    pub trigger: Html,
    #[prop_or_default]
    pub position: MenuPosition,
    pub children: Children,
}

/// Toggles on trigger click; closes on outside click or Escape
#[function_component(ContextMenu)]
pub fn context_menu(props: &ContextMenuProps) -> Html {
    let open = use_state(|| false);
    let trigger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let open = open.clone();
        let trigger_ref = trigger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with(*open, move |is_open| {
            let listeners = is_open.then(|| {
                let document = gloo::utils::document();
                let close = open.clone();
                let mousedown = EventListener::new(&document, "mousedown", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .is_some_and(|node| node.contains(target.as_ref()))
                    };
                    if !inside(&trigger_ref) && !inside(&menu_ref) {
                        close.set(false);
                    }
                });
                let keydown = EventListener::new(&document, "keydown", move |event| {
                    if event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape")
                    {
                        open.set(false);
                    }
                });
                (mousedown, keydown)
            });
            move || drop(listeners)
        });
    }

    let ontoggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="relative">
            <div ref={trigger_ref} class="cursor-pointer" onclick={ontoggle}>
                {props.trigger.clone()}
            </div>
            if *open {
                <div
                    ref={menu_ref}
                    class={classes!("absolute", "z-40", "min-w-48", "rounded-md", "border", "border-gray-200", "bg-white", "py-1", "shadow-lg", props.position.classes())}
                >
                    {props.children.clone()}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContextMenuItemProps {
    pub icon: Html,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
    pub children: Children,
}

#[function_component(ContextMenuItem)]
pub fn context_menu_item(props: &ContextMenuItemProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                onclick.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!(
                "flex", "items-center", "gap-2", "px-3", "py-2", "text-sm",
                if props.disabled { "text-gray-400 cursor-default" } else { "text-gray-700 cursor-pointer hover:bg-gray-100" },
            )}
            {onclick}
        >
            {props.icon.clone()}
            {props.children.clone()}
        </div>
    }
}
