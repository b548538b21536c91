//! Navigation capability injected into the gateway and the session context

use std::cell::Cell;
use std::rc::Rc;

/// Login screen
pub const LOGIN_PATH: &str = "/";
/// Landing screen after a successful login
pub const APP_PATH: &str = "/app";

/// Moves the application to another screen
pub trait Navigator {
    fn navigate(&self, path: &str);
    fn current_path(&self) -> String;
}

/// Sends the user to the login screen when the session is lost.
///
/// Concurrent requests that all observe a 401/403 produce a single
/// navigation. The guard re-arms once a new session is established.
pub struct LoginRedirect {
    navigator: Rc<dyn Navigator>,
    fired: Cell<bool>,
}

impl LoginRedirect {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self {
            navigator,
            fired: Cell::new(false),
        }
    }

    /// Navigate to the login screen unless already done for this episode
    pub fn trigger(&self) {
        if self.fired.replace(true) {
            tracing::debug!("Login redirect already issued");
            return;
        }
        tracing::warn!("Session lost, redirecting to login");
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Allow the next session loss to redirect again
    pub fn rearm(&self) {
        self.fired.set(false);
    }

    pub fn navigator(&self) -> &Rc<dyn Navigator> {
        &self.navigator
    }
}
