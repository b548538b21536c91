//! Client error types

use std::time::Duration;
use thiserror::Error;
use vera_core::DecodeError;

/// A request never produced a response
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or body read failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// No response within the configured budget
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// The identity service could not issue a fresh token
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh endpoint unreachable: {0}")]
    Transport(#[from] TransportError),

    #[error("refresh rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("refresh response carried no access token: {0}")]
    MalformedResponse(String),
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The stored or received token is malformed or incomplete
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An expired token could not be refreshed
    #[error("Token refresh failed: {0}")]
    Refresh(#[from] RefreshError),

    /// No token is stored; the request was not sent
    #[error("Not authenticated: no access token is stored")]
    Unauthenticated,

    /// The server rejected the bearer token (401/403)
    #[error("Not authorized ({status}): {message}")]
    Authorization { status: u16, message: String },

    /// Any other non-2xx response
    #[error("Request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// Network or timeout failure, no response received
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// A 2xx response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Configuration(error.to_string())
        } else {
            Self::Network(TransportError::Http(error))
        }
    }
}

impl ClientError {
    /// Create error from a non-success HTTP status code
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Authorization {
                status: status.as_u16(),
                message: body,
            },
            _ => Self::Request {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// True for failures that leave the client without a usable session
    pub fn is_session_lost(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::Refresh(_) | Self::Unauthenticated | Self::Authorization { .. }
        )
    }

    /// HTTP status of the response that caused the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authorization { status, .. } | Self::Request { status, .. } => Some(*status),
            Self::Refresh(RefreshError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
