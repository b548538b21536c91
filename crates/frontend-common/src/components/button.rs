//! Buttons

use yew::prelude::*;

const BASE: &str = "inline-flex items-center justify-center rounded-md transition-colors duration-150 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Solid,
    Outline,
}

impl ButtonStyle {
    fn classes(self) -> &'static str {
        match self {
            Self::Solid => "bg-blue-600 text-white hover:bg-blue-700",
            Self::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50",
        }
    }
}

fn disabled_classes(disabled: bool) -> Option<&'static str> {
    disabled.then_some("opacity-50 cursor-not-allowed pointer-events-none")
}

#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: Html,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let onclick = props.onclick.reform(|e: MouseEvent| e.stop_propagation());
    html! {
        <button
            type="button"
            class={classes!(BASE, "p-1.5", "text-gray-600", "hover:bg-gray-100", disabled_classes(props.disabled))}
            title={props.title.clone()}
            disabled={props.disabled}
            {onclick}
        >
            {props.icon.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub style: ButtonStyle,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextButton)]
pub fn text_button(props: &TextButtonProps) -> Html {
    let onclick = props.onclick.reform(|_: MouseEvent| ());
    html! {
        <button
            type="button"
            class={classes!(BASE, "px-4", "py-2", "text-sm", "font-medium", props.style.classes(), disabled_classes(props.disabled))}
            disabled={props.disabled}
            {onclick}
        >
            {&props.text}
        </button>
    }
}
