use crate::pages::{
    DashboardPage, HomePage, NotFoundPage, UrlNodePage, UrlRootPage, UsersPage, VideoPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/app")]
    Dashboard,
    #[at("/user")]
    Users,
    #[at("/url")]
    UrlRoot,
    #[at("/url/:id")]
    UrlNode { id: String },
    #[at("/video")]
    Video,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[allow(clippy::needless_pass_by_value)]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::UrlRoot => html! { <UrlRootPage /> },
        Route::UrlNode { id } => html! { <UrlNodePage {id} /> },
        Route::Video => html! { <VideoPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
