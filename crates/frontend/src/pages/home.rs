use super::use_title;
use crate::routes::Route;
use vera_frontend_common::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

/// Login screen
#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_title("Vera");
    let session = use_session();
    let navigator = use_navigator();

    {
        let authenticated = session.is_authenticated();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated && let Some(navigator) = navigator {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let login = {
        let login_url = session.client().identity().login_url();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = gloo::utils::window().location().set_href(&login_url) {
                tracing::error!(error = ?e, "Failed to start login");
            }
        })
    };

    html! {
        <div class="flex h-screen flex-col items-center justify-center gap-10">
            <div class="flex items-center gap-3">
                <h1 class="text-4xl font-bold tracking-[0.3em]">{"VERA"}</h1>
            </div>
            <button
                type="button"
                class="flex items-center gap-3 rounded-md border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-700 shadow-sm hover:bg-gray-50"
                onclick={login}
            >
                <span class="text-lg font-bold text-blue-600">{"G"}</span>
                <span>{"Sign in with Google"}</span>
            </button>
        </div>
    }
}
