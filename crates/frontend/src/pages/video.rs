use super::use_title;
use crate::layout::Layout;
use yew::prelude::*;

#[function_component(VideoPage)]
pub fn video_page() -> Html {
    use_title("Video | Vera");
    html! {
        <Layout>
            <div class="flex h-full items-center justify-center text-gray-500">
                <span>{"Not implemented"}</span>
            </div>
        </Layout>
    }
}
