//! Authentication mode, state, and the token provider seam.
//!
//! # Design
//! The client never keeps a token. Every API call asks the `TokenProvider`
//! for one, so a provider backed by an identity-provider SDK can refresh
//! silently between calls. `AuthState` only remembers whether a token was
//! available and whether its (unverified) claims carry the admin permission.

use tracing::warn;

use crate::claims::{decode_claims, Claims};
use crate::error::ApiError;

/// Whether an identity provider gates the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// No identity provider: no header is sent and every control is shown.
    #[default]
    Open,
    /// Calls carry a bearer token and controls follow the decoded claims.
    Gated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated { is_admin: bool },
}

impl AuthState {
    /// Derive the state from a freshly obtained token.
    pub fn from_token(token: &str) -> Self {
        let is_admin = decode_claims(token).is_some_and(|claims| claims.is_admin());
        AuthState::Authenticated { is_admin }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AuthState::Authenticated { is_admin: true })
    }
}

/// Source of bearer tokens, consulted once per API call.
pub trait TokenProvider {
    /// `Ok(None)` means the user is not logged in.
    fn access_token(&self) -> Result<Option<String>, ApiError>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Result<Option<String>, ApiError>,
{
    fn access_token(&self) -> Result<Option<String>, ApiError> {
        self()
    }
}

/// Provider for [`AuthMode::Open`]: never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// Provider that always returns the same token. Mostly useful in tests.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(Some(self.0.clone()))
    }
}

/// Claims of the current token, for display. `Ok(None)` when logged out or
/// when the token does not decode; `Err` when the provider itself failed.
pub fn current_claims(provider: &impl TokenProvider) -> Result<Option<Claims>, ApiError> {
    match provider.access_token() {
        Ok(Some(token)) => Ok(decode_claims(&token)),
        Ok(None) => Ok(None),
        Err(e) => {
            warn!("Failed to read token: {}", e);
            Err(e)
        }
    }
}
