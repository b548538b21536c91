//! Radio group over any comparable value

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct RadioOption<T> {
    pub text: AttrValue,
    pub value: T,
}

#[derive(Properties, PartialEq)]
pub struct RadioProps<T: PartialEq> {
    pub name: AttrValue,
    pub options: Vec<RadioOption<T>>,
    pub value: T,
    #[prop_or_default]
    pub onchange: Callback<T>,
}

#[function_component(Radio)]
pub fn radio<T>(props: &RadioProps<T>) -> Html
where
    T: PartialEq + Clone + 'static,
{
    html! {
        <div class="flex gap-4">
            { for props.options.iter().map(|option| {
                let onchange = {
                    let value = option.value.clone();
                    props.onchange.reform(move |_: Event| value.clone())
                };
                html! {
                    <label class="inline-flex items-center gap-1.5 text-sm cursor-pointer">
                        <input
                            type="radio"
                            class="accent-blue-600"
                            name={props.name.clone()}
                            checked={option.value == props.value}
                            {onchange}
                        />
                        <span>{&option.text}</span>
                    </label>
                }
            }) }
        </div>
    }
}
