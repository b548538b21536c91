mod app;
mod layout;
mod pages;
mod routes;

use app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    vera_frontend_common::init_logging();
    yew::Renderer::<App>::new().render();
}
