//! Table cell formatting

use chrono::{DateTime, Utc};
use vera_core::time::format_relative;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimestampProps {
    pub value: Option<DateTime<Utc>>,
}

/// Relative time with the absolute instant as a tooltip; `-` when absent
#[function_component(Timestamp)]
pub fn timestamp(props: &TimestampProps) -> Html {
    match props.value {
        Some(value) => html! {
            <span title={value.format("%Y-%m-%d %H:%M:%S UTC").to_string()}>
                {format_relative(value, Utc::now())}
            </span>
        },
        None => html! { <span class="text-gray-400">{"-"}</span> },
    }
}
