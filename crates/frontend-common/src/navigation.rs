//! Router-backed implementation of the navigation seam

use std::cell::RefCell;
use vera_core::{LOGIN_PATH, Navigator};
use yew::Callback;
use yew_router::AnyRoute;
use yew_router::navigator::Navigator as RouterNavigator;

/// Navigates through the mounted router, or through `window.location` when
/// no router has been attached yet.
///
/// Navigation to the login screen is also reported to the session context,
/// so the UI drops its session when the gateway redirects on a 401/403.
#[derive(Default)]
pub struct BrowserNavigator {
    router: RefCell<Option<RouterNavigator>>,
    on_login: RefCell<Option<Callback<()>>>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_router(&self, router: RouterNavigator) {
        *self.router.borrow_mut() = Some(router);
    }

    pub fn detach_router(&self) {
        self.router.borrow_mut().take();
    }

    pub fn on_login_navigation(&self, callback: Callback<()>) {
        *self.on_login.borrow_mut() = Some(callback);
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let router = self.router.borrow().clone();
        match router {
            Some(router) => router.push(&AnyRoute::new(path)),
            None => {
                tracing::warn!(path, "Router not mounted, falling back to window.location");
                if let Some(window) = web_sys::window()
                    && let Err(e) = window.location().set_href(path)
                {
                    tracing::warn!(error = ?e, path, "Navigation failed");
                }
            }
        }

        if path == LOGIN_PATH {
            let callback = self.on_login.borrow().clone();
            if let Some(callback) = callback {
                callback.emit(());
            }
        }
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| LOGIN_PATH.to_string())
    }
}
