//! Token persistence, decoding, expiry and refresh

use crate::client::timeout::with_timeout;
use crate::client::{ClientError, RefreshError, ServiceConfig, TransportError};
use serde::Deserialize;
use std::rc::Rc;
use tracing::{debug, info, warn};
use vera_core::{Claims, Clock, DecodeError, Session, SessionState, TokenStore};

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: Option<String>,
}

/// Called with the new session whenever a request refreshes the token
pub type RefreshObserver = Rc<dyn Fn(&Session)>;

/// Owns the persisted access token and decides whether it is usable
pub struct SessionManager {
    http: reqwest::Client,
    config: ServiceConfig,
    store: Rc<dyn TokenStore>,
    clock: Rc<dyn Clock>,
    on_refresh: Option<RefreshObserver>,
}

impl SessionManager {
    pub fn new(
        http: reqwest::Client,
        config: ServiceConfig,
        store: Rc<dyn TokenStore>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            http,
            config,
            store,
            clock,
            on_refresh: None,
        }
    }

    /// Report tokens refreshed on behalf of a request to `observer`
    #[must_use]
    pub fn with_refresh_observer(mut self, observer: RefreshObserver) -> Self {
        self.on_refresh = Some(observer);
        self
    }

    pub fn persisted_token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    pub fn persist_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Remove the stored token; a no-op when nothing is stored
    pub fn clear_token(&self) {
        self.store.remove();
    }

    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        Claims::decode(token)
    }

    pub fn is_expired(&self, claims: &Claims) -> bool {
        claims.is_expired_at(self.clock.now())
    }

    /// Ask the identity service for a new access token.
    ///
    /// The refresh credential travels as a cookie, so the browser must send
    /// credentials with this call.
    pub async fn refresh(&self) -> Result<String, RefreshError> {
        let url = self.config.refresh_url();
        debug!(url = %url, "Refreshing access token");

        let request = self.http.post(&url).json(&serde_json::json!({}));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let (status, body) = with_timeout(self.config.timeout(), exchange)
            .await?
            .map_err(TransportError::from)?;

        if !status.is_success() {
            return Err(RefreshError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RefreshResponse = serde_json::from_str(&body)
            .map_err(|e| RefreshError::MalformedResponse(e.to_string()))?;
        parsed
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| RefreshError::MalformedResponse(body))
    }

    /// Resolve the persisted token into a settled session state.
    ///
    /// An expired token triggers exactly one refresh attempt. Every path
    /// that ends unauthenticated leaves storage empty.
    pub async fn load(&self) -> SessionState {
        let Some(token) = self.persisted_token() else {
            debug!("No persisted access token");
            return self.drop_session();
        };

        let session = match Session::from_token(token) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Discarding undecodable access token");
                return self.drop_session();
            }
        };

        if !self.is_expired(session.claims()) {
            return SessionState::Authenticated(session);
        }

        info!(subject = %session.claims().subject, "Access token expired, refreshing");
        match self.refresh().await {
            Ok(token) => self.establish(token),
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                self.drop_session()
            }
        }
    }

    /// Adopt a token handed to the application from outside, e.g. the login
    /// callback's query parameter
    pub fn accept_token(&self, token: &str) -> SessionState {
        self.establish(token.to_string())
    }

    pub fn logout(&self) -> SessionState {
        info!("Logging out");
        self.drop_session()
    }

    /// A token that is present, decodable and unexpired, refreshing once if
    /// needed. Undecodable tokens and failed refreshes clear storage.
    pub async fn bearer_token(&self) -> Result<String, ClientError> {
        let token = self.persisted_token().ok_or(ClientError::Unauthenticated)?;

        let claims = match self.decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                self.clear_token();
                return Err(e.into());
            }
        };
        if !self.is_expired(&claims) {
            return Ok(token);
        }

        debug!(subject = %claims.subject, "Bearer token expired, refreshing before request");
        let fresh = match self.refresh().await {
            Ok(fresh) => fresh,
            Err(e) => {
                self.clear_token();
                return Err(e.into());
            }
        };
        let session = match Session::from_token(fresh) {
            Ok(session) => session,
            Err(e) => {
                self.clear_token();
                return Err(e.into());
            }
        };
        self.persist_token(session.token());
        if let Some(observer) = &self.on_refresh {
            observer(&session);
        }
        Ok(session.token().to_string())
    }

    fn establish(&self, token: String) -> SessionState {
        match Session::from_token(token) {
            Ok(session) => {
                self.persist_token(session.token());
                debug!(subject = %session.claims().subject, "Session established");
                SessionState::Authenticated(session)
            }
            Err(e) => {
                warn!(error = %e, "Rejecting undecodable access token");
                self.drop_session()
            }
        }
    }

    fn drop_session(&self) -> SessionState {
        self.clear_token();
        SessionState::Unauthenticated
    }
}
