//! Browser-side building blocks shared by the Vera console: the session
//! context, adapters that plug localStorage and the router into the HTTP
//! layer, and the widgets the screens are made of.

pub mod auth;
pub mod components;
pub mod config;
pub mod format;
pub mod hooks;
pub mod logging;
pub mod navigation;
pub mod storage;

pub use auth::{SessionContext, SessionProvider, use_session};
pub use config::{AppConfig, AuthConfig};
pub use hooks::{Remote, use_remote};
pub use logging::init_logging;
pub use navigation::BrowserNavigator;
pub use storage::LocalStorageTokenStore;
