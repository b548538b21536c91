//! Authenticated request gateway

use crate::client::timeout::with_timeout;
use crate::client::{ClientError, SessionManager, TransportError};
use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};
use vera_core::LoginRedirect;

/// Sends every API call with a valid bearer token and turns 401/403 into a
/// login redirect
pub struct Gateway {
    http: reqwest::Client,
    session: Rc<SessionManager>,
    redirect: Rc<LoginRedirect>,
    timeout: Duration,
}

impl Gateway {
    pub fn new(
        http: reqwest::Client,
        session: Rc<SessionManager>,
        redirect: Rc<LoginRedirect>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            session,
            redirect,
            timeout,
        }
    }

    /// Start a JSON request to an absolute URL
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_omit();
        request
    }

    /// Send `request` and decode the JSON response body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send `request`, discarding the response body
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(drop)
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let token = match self.session.bearer_token().await {
            Ok(token) => token,
            Err(ClientError::Unauthenticated) => return Err(ClientError::Unauthenticated),
            Err(e) => {
                warn!(error = %e, "No usable bearer token");
                self.redirect.trigger();
                return Err(e);
            }
        };

        let request = request.bearer_auth(token).build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "Sending request");

        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let (status, body) = with_timeout(self.timeout, exchange)
            .await?
            .map_err(TransportError::from)?;

        if status.is_success() {
            return Ok(body);
        }

        debug!(%method, %url, status = status.as_u16(), "Request failed");
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            self.session.clear_token();
            self.redirect.trigger();
        }
        Err(ClientError::from_status(status, body))
    }
}
