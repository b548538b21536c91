//! Vera service client

pub mod config;
pub mod drive;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod session;
mod timeout;

pub use config::{DEFAULT_TIMEOUT, ServiceConfig};
pub use drive::DriveClient;
pub use error::{ClientError, RefreshError, TransportError};
pub use gateway::Gateway;
pub use identity::IdentityClient;
pub use session::{RefreshObserver, SessionManager};

use std::rc::Rc;
use tracing::debug;
use vera_core::{
    APP_PATH, Clock, LOGIN_PATH, LoginRedirect, MemoryTokenStore, Navigator, SessionState,
    SystemClock, TokenStore,
};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("vera-client/", env!("CARGO_PKG_VERSION"));

/// Session manager, gateway and service clients sharing one token store
#[derive(Clone)]
pub struct VeraClient {
    config: ServiceConfig,
    session: Rc<SessionManager>,
    gateway: Rc<Gateway>,
    redirect: Rc<LoginRedirect>,
}

impl PartialEq for VeraClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl VeraClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn identity(&self) -> IdentityClient {
        IdentityClient::new(Rc::clone(&self.gateway), self.config.clone())
    }

    pub fn drive(&self) -> DriveClient {
        DriveClient::new(Rc::clone(&self.gateway), self.config.clone())
    }

    /// Run the load state machine and move to the screen the outcome implies
    pub async fn load_session(&self) -> SessionState {
        let state = self.session.load().await;
        self.settle(state)
    }

    /// Adopt a token delivered by the login callback
    pub fn accept_token(&self, token: &str) -> SessionState {
        let state = self.session.accept_token(token);
        self.settle(state)
    }

    pub fn logout(&self) -> SessionState {
        let state = self.session.logout();
        self.leave_to_login();
        state
    }

    fn settle(&self, state: SessionState) -> SessionState {
        match &state {
            SessionState::Authenticated(_) => {
                self.redirect.rearm();
                let navigator = self.redirect.navigator();
                if navigator.current_path() == LOGIN_PATH {
                    navigator.navigate(APP_PATH);
                }
            }
            SessionState::Unauthenticated => self.leave_to_login(),
            SessionState::Uninitialized | SessionState::Loading => {}
        }
        state
    }

    fn leave_to_login(&self) {
        let navigator = self.redirect.navigator();
        if navigator.current_path() != LOGIN_PATH {
            debug!("Returning to login screen");
            navigator.navigate(LOGIN_PATH);
        }
    }
}

/// Builder for [`VeraClient`]
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ServiceConfig>,
    store: Option<Rc<dyn TokenStore>>,
    clock: Option<Rc<dyn Clock>>,
    navigator: Option<Rc<dyn Navigator>>,
    on_refresh: Option<RefreshObserver>,
}

impl ClientBuilder {
    #[must_use]
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Token storage; defaults to an in-memory store
    #[must_use]
    pub fn store(mut self, store: Rc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Expiry clock; defaults to the system clock
    #[must_use]
    pub fn clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Hear about sessions renewed while sending a request
    #[must_use]
    pub fn on_refresh(mut self, observer: RefreshObserver) -> Self {
        self.on_refresh = Some(observer);
        self
    }

    pub fn build(self) -> Result<VeraClient, ClientError> {
        let config = self
            .config
            .ok_or_else(|| ClientError::Configuration("service config is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ClientError::Configuration("navigator is required".into()))?;
        let store = self
            .store
            .unwrap_or_else(|| Rc::new(MemoryTokenStore::new()));
        let clock = self.clock.unwrap_or_else(|| Rc::new(SystemClock));

        let client_builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let client_builder = client_builder.user_agent(USER_AGENT);
        let http = client_builder.build()?;

        let mut session = SessionManager::new(http.clone(), config.clone(), store, clock);
        if let Some(observer) = self.on_refresh {
            session = session.with_refresh_observer(observer);
        }
        let session = Rc::new(session);
        let redirect = Rc::new(LoginRedirect::new(navigator));
        let gateway = Rc::new(Gateway::new(
            http,
            Rc::clone(&session),
            Rc::clone(&redirect),
            config.timeout(),
        ));

        Ok(VeraClient {
            config,
            session,
            gateway,
            redirect,
        })
    }
}
