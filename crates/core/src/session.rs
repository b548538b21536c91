//! Session state model

use crate::claims::Claims;

/// An authenticated session: the raw token and its decoded claims.
///
/// Claims are always derived from the token they sit next to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    claims: Claims,
}

impl Session {
    pub(crate) fn new(token: String, claims: Claims) -> Self {
        Self { token, claims }
    }

    /// Decode `token` into a session
    pub fn from_token(token: impl Into<String>) -> Result<Self, crate::DecodeError> {
        let token = token.into();
        let claims = Claims::decode(&token)?;
        Ok(Self::new(token, claims))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

/// Where the per-load session lifecycle currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// True until the lifecycle has settled on either outcome
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.session().map(Session::claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TokenBuilder;

    #[test]
    fn derived_flags() {
        assert!(SessionState::Uninitialized.is_loading());
        assert!(SessionState::Loading.is_loading());
        assert!(!SessionState::Unauthenticated.is_loading());
        assert!(!SessionState::Unauthenticated.is_authenticated());

        let session = Session::from_token(TokenBuilder::new().build()).unwrap();
        let state = SessionState::Authenticated(session);
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.claims().map(|c| c.email.as_str()), Some("ada@example.com"));
    }

    #[test]
    fn from_token_rejects_incomplete_claims() {
        let token = TokenBuilder::new().without("picture").build();
        assert!(Session::from_token(token).is_err());
    }
}
