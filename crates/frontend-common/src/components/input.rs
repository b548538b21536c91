//! Single-line text input

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = props.onchange.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    html! {
        <input
            type="text"
            class={classes!(
                "w-full", "rounded-md", "border", "border-gray-300", "px-3", "py-2", "text-sm",
                "focus:border-blue-500", "focus:outline-none",
                props.disabled.then_some("bg-gray-100 text-gray-500 cursor-not-allowed"),
            )}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            {oninput}
        />
    }
}
