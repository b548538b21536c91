mod dashboard;
mod home;
mod not_found;
mod url_node;
mod url_root;
mod users;
mod video;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use url_node::UrlNodePage;
pub use url_root::UrlRootPage;
pub use users::UsersPage;
pub use video::VideoPage;

use vera_frontend_common::auth::describe_error;
use vera_frontend_common::components::Loading;
use vera_frontend_common::hooks::Remote;
use vera_http::ClientError;
use yew::prelude::*;

/// Set the document title while the page is mounted
#[hook]
fn use_title(title: &'static str) {
    use_effect_with(title, |title| gloo::utils::document().set_title(title));
}

/// Outcome of a mutation as the editor records it. A lost session counts as
/// settled; the redirect to login takes over.
fn mutation_outcome(result: Result<(), ClientError>) -> Result<(), String> {
    result.or_else(|error| describe_error(&error).map_or(Ok(()), Err))
}

/// Spinner or load error for a remote read; `None` once data is ready
fn remote_status<T>(remote: &Remote<T>, what: &str) -> Option<Html> {
    match remote {
        Remote::Loading => Some(html! {
            <div class="flex justify-center py-10"><Loading size={40} /></div>
        }),
        Remote::Failed(message) => Some(html! {
            <p class="mb-4 rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-700">
                {format!("Error loading {what}: {message}")}
            </p>
        }),
        Remote::Ready(_) => None,
    }
}

const TABLE: &str = "min-w-full divide-y divide-gray-200 text-sm";
const TH: &str = "px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500";
const TD: &str = "px-4 py-3 whitespace-nowrap text-gray-700";
