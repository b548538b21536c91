use super::use_title;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_title("Not found | Vera");
    html! {
        <div class="flex h-screen flex-col items-center justify-center gap-4">
            <h1 class="text-2xl font-semibold">{"Page not found"}</h1>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                {"Back to Vera"}
            </Link<Route>>
        </div>
    }
}
