//! Remote service locations

use crate::client::ClientError;
use std::time::Duration;
use url::Url;

/// Budget for every outbound call, refresh included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const IDENTITY_URL_ENV: &str = "VERA_IDENTITY_SERVICE_URL";
pub const DRIVE_URL_ENV: &str = "VERA_DRIVE_SERVICE_URL";

/// Base URLs of the identity and drive services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    identity_url: String,
    drive_url: String,
    timeout: Duration,
}

impl ServiceConfig {
    pub fn new(
        identity_url: impl AsRef<str>,
        drive_url: impl AsRef<str>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            identity_url: normalize_base_url("identity service URL", identity_url.as_ref())?,
            drive_url: normalize_base_url("drive service URL", drive_url.as_ref())?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read both base URLs from the process environment
    pub fn from_env() -> Result<Self, ClientError> {
        let read = |key: &str| {
            std::env::var(key)
                .map_err(|_| ClientError::Configuration(format!("{key} is not set")))
        };
        Self::new(read(IDENTITY_URL_ENV)?, read(DRIVE_URL_ENV)?)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn identity_url(&self) -> &str {
        &self.identity_url
    }

    pub fn drive_url(&self) -> &str {
        &self.drive_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn identity_endpoint(&self, path: &str) -> String {
        join(&self.identity_url, path)
    }

    pub fn drive_endpoint(&self, path: &str) -> String {
        join(&self.drive_url, path)
    }

    /// Where the browser goes to start a login
    pub fn login_url(&self) -> String {
        self.identity_endpoint("/auth/login")
    }

    pub fn refresh_url(&self) -> String {
        self.identity_endpoint("/auth/refresh")
    }
}

fn normalize_base_url(name: &str, raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Configuration(format!("{name} is not configured")));
    }
    Url::parse(trimmed)
        .map_err(|e| ClientError::Configuration(format!("{name} '{trimmed}' is invalid: {e}")))?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}
