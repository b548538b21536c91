//! Bearer token claims
//!
//! Tokens are decoded without verifying their signature. The identity
//! service issued them and every authenticated call is re-checked by the
//! backend, so the client only needs the identity attributes and expiry.

use crate::error::{DecodeError, DecodeFailure};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity attributes carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    pub subject: String,
    pub name: String,
    pub email: String,
    pub picture: String,
    /// Unix timestamp (seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

/// Payload as it appears on the wire, before required-field validation
#[derive(Deserialize)]
struct RawClaims {
    sub: Option<String>,
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
    exp: Option<Value>,
}

impl Claims {
    /// Decode the payload segment of `token`.
    ///
    /// All five claims must be present and non-empty; an `exp` of zero counts
    /// as missing.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        let fail = |reason| DecodeError::new(token, reason);

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() < 2 {
            return Err(fail(DecodeFailure::Malformed(segments.len())));
        }

        let payload = decode_segment(segments[1])
            .map_err(|e| fail(DecodeFailure::Base64(e.to_string())))?;
        let raw: RawClaims = serde_json::from_slice(&payload)
            .map_err(|e| fail(DecodeFailure::Json(e.to_string())))?;

        let subject = required(raw.sub, "sub").map_err(fail)?;
        let name = required(raw.name, "name").map_err(fail)?;
        let email = required(raw.email, "email").map_err(fail)?;
        let picture = required(raw.picture, "picture").map_err(fail)?;
        let expires_at = raw
            .exp
            .as_ref()
            .and_then(timestamp)
            .filter(|exp| *exp != 0)
            .ok_or_else(|| fail(DecodeFailure::MissingClaim("exp")))?;

        Ok(Self {
            subject,
            name,
            email,
            picture,
            expires_at,
        })
    }

    /// True once `expires_at` lies strictly before `now` (unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

fn required(value: Option<String>, claim: &'static str) -> Result<String, DecodeFailure> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DecodeFailure::MissingClaim(claim)),
    }
}

/// `exp` is a JSON number; fractional seconds are truncated
fn timestamp(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|secs| secs as i64))
}

/// Accepts both base64url and standard alphabets, padded or not
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TokenBuilder, encode_payload};
    use serde_json::json;

    #[test]
    fn decodes_complete_token() {
        let token = TokenBuilder::new().expires_at(2_000_000_000).build();
        let claims = Claims::decode(&token).unwrap();

        assert_eq!(claims.subject, "user-1");
        assert_eq!(claims.name, "Ada Lovelace");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.picture, "https://example.com/ada.png");
        assert_eq!(claims.expires_at, 2_000_000_000);
        assert!(!claims.is_expired_at(1_999_999_999));
    }

    #[test]
    fn expiry_is_strict() {
        let token = TokenBuilder::new().expires_at(1_000).build();
        let claims = Claims::decode(&token).unwrap();

        assert!(!claims.is_expired_at(1_000));
        assert!(claims.is_expired_at(1_001));
    }

    #[test]
    fn each_missing_claim_is_rejected() {
        for claim in ["sub", "name", "email", "picture", "exp"] {
            let token = TokenBuilder::new().without(claim).build();
            let err = Claims::decode(&token).unwrap_err();
            assert_eq!(err.reason, DecodeFailure::MissingClaim(claim), "{claim}");
        }
    }

    #[test]
    fn empty_claims_are_rejected() {
        let token = encode_payload(&json!({
            "sub": "user-1",
            "name": "",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "exp": 2_000_000_000
        }));
        let err = Claims::decode(&token).unwrap_err();
        assert_eq!(err.reason, DecodeFailure::MissingClaim("name"));

        let token = encode_payload(&json!({
            "sub": "user-1",
            "name": "Ada",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "exp": 0
        }));
        let err = Claims::decode(&token).unwrap_err();
        assert_eq!(err.reason, DecodeFailure::MissingClaim("exp"));
    }

    #[test]
    fn fractional_exp_is_truncated() {
        let token = encode_payload(&json!({
            "sub": "user-1",
            "name": "Ada",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "exp": 1_700_000_000.75
        }));
        assert_eq!(Claims::decode(&token).unwrap().expires_at, 1_700_000_000);
    }

    #[test]
    fn malformed_tokens_carry_token_in_message() {
        let err = Claims::decode("not-a-jwt").unwrap_err();
        assert_eq!(err.reason, DecodeFailure::Malformed(1));
        assert!(err.to_string().contains("token: not-a-jwt"));

        let err = Claims::decode("header.!!!.sig").unwrap_err();
        assert!(matches!(err.reason, DecodeFailure::Base64(_)));

        let payload = URL_SAFE_NO_PAD.encode(b"[1, 2, 3]");
        let err = Claims::decode(&format!("header.{payload}.sig")).unwrap_err();
        assert!(matches!(err.reason, DecodeFailure::Json(_)));
    }

    #[test]
    fn padded_standard_alphabet_is_accepted() {
        let token = TokenBuilder::new().build();
        let payload = token.split('.').nth(1).unwrap();
        let standard = base64::engine::general_purpose::STANDARD
            .encode(URL_SAFE_NO_PAD.decode(payload).unwrap());

        let claims = Claims::decode(&format!("h.{standard}.s")).unwrap();
        assert_eq!(claims.subject, "user-1");
    }
}
