use super::{remote_status, use_title};
use crate::layout::Layout;
use crate::routes::Route;
use vera_frontend_common::hooks::Remote;
use vera_frontend_common::{use_remote, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

/// Resolves the root folder and moves on to it
#[function_component(UrlRootPage)]
pub fn url_root_page() -> Html {
    use_title("URL | Vera");
    let session = use_session();
    let navigator = use_navigator();

    let drive = session.client().drive();
    let root = use_remote((), move |()| async move { drive.root_id().await });

    {
        let root = root.data.clone();
        use_effect_with(root, move |root| {
            if let (Remote::Ready(id), Some(navigator)) = (root, navigator) {
                navigator.replace(&Route::UrlNode {
                    id: id.as_ref().clone(),
                });
            }
        });
    }

    html! {
        <Layout>
            <div class="p-6">
                {remote_status(&root.data, "urls").unwrap_or_default()}
            </div>
        </Layout>
    }
}
