//! Loading indicators

use super::icons::LoaderIcon;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <LoaderIcon size={props.size} class={classes!("animate-spin", "text-blue-500", props.class.clone())} />
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="text-center p-10">
            <Loading size={40} class="mx-auto mb-5" />
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm m-0">{text}</p>
            }
        </div>
    }
}
