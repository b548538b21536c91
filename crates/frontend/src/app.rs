use crate::routes::{Route, switch};
use vera_frontend_common::{AppConfig, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load().service_config());

    match &*config {
        Ok(config) => html! {
            <BrowserRouter>
                <SessionProvider config={config.clone()}>
                    <Switch<Route> render={switch} />
                </SessionProvider>
            </BrowserRouter>
        },
        Err(error) => {
            tracing::error!(%error, "Service URLs are not configured");
            html! {
                <div class="flex h-screen items-center justify-center p-6">
                    <div class="max-w-md rounded-lg bg-red-50 p-4 text-sm text-red-700">
                        {error.to_string()}
                    </div>
                </div>
            }
        }
    }
}
