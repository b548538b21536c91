//! Unsigned token builders for tests

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value, json};

/// Encode `payload` as an unsigned three-segment token
pub fn encode_payload(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

/// Builds tokens with a complete claim set by default
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    claims: Map<String, Value>,
}

impl TokenBuilder {
    pub fn new() -> Self {
        let claims = json!({
            "sub": "user-1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "exp": 4_102_444_800_i64
        });
        let Value::Object(claims) = claims else {
            unreachable!("claims literal is an object")
        };
        Self { claims }
    }

    pub fn subject(self, subject: &str) -> Self {
        self.claim("sub", json!(subject))
    }

    pub fn name(self, name: &str) -> Self {
        self.claim("name", json!(name))
    }

    pub fn expires_at(self, exp: i64) -> Self {
        self.claim("exp", json!(exp))
    }

    pub fn claim(mut self, key: &str, value: Value) -> Self {
        self.claims.insert(key.to_string(), value);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.claims.remove(key);
        self
    }

    pub fn build(&self) -> String {
        encode_payload(&Value::Object(self.claims.clone()))
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
