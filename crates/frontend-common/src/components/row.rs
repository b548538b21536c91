use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RowProps {
    pub label: AttrValue,
    pub children: Children,
}

/// A labelled form row
#[function_component(Row)]
pub fn row(props: &RowProps) -> Html {
    html! {
        <div class="flex items-center gap-4 py-2">
            <span class="w-16 shrink-0 text-sm font-medium text-gray-700">{&props.label}</span>
            <div class="flex-1">{props.children.clone()}</div>
        </div>
    }
}
