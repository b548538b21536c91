//! Token decoding errors

use thiserror::Error;

/// Why a token could not be turned into [`Claims`](crate::Claims)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// The token does not have a payload segment
    #[error("expected at least two dot-separated segments, found {0}")]
    Malformed(usize),

    /// The payload segment is not valid base64url
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    /// The payload is not a JSON object with the expected shape
    #[error("invalid JSON payload: {0}")]
    Json(String),

    /// A required claim is absent or empty
    #[error("missing or empty claim `{0}`")]
    MissingClaim(&'static str),
}

/// A token failed to decode.
///
/// The offending token is carried verbatim so the failure can be diagnosed
/// from logs alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to decode token | token: {token} | {reason}")]
pub struct DecodeError {
    pub token: String,
    pub reason: DecodeFailure,
}

impl DecodeError {
    pub fn new(token: impl Into<String>, reason: DecodeFailure) -> Self {
        Self {
            token: token.into(),
            reason,
        }
    }
}
