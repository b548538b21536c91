use super::use_title;
use crate::layout::Layout;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    use_title("Vera");
    html! {
        <Layout>
            <div class="flex h-full items-center justify-center">
                <span class="text-5xl font-bold tracking-[0.4em] text-gray-300">{"VERA"}</span>
            </div>
        </Layout>
    }
}
