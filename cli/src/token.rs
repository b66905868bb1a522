//! Where the CLI gets its bearer token.
//!
//! The token is read again on every API call, so a login helper that
//! rewrites the file (or a shell that re-exports the variable) takes effect
//! without restarting anything. Empty values count as logged out.

use std::path::PathBuf;

use tracing::debug;
use wishlist_core::{ApiError, TokenProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Env(String),
    File(PathBuf),
}

impl TokenProvider for TokenSource {
    fn access_token(&self) -> Result<Option<String>, ApiError> {
        let raw = match self {
            TokenSource::Env(var) => match std::env::var(var) {
                Ok(value) => value,
                Err(std::env::VarError::NotPresent) => return Ok(None),
                Err(e) => return Err(ApiError::Token(format!("{var}: {e}"))),
            },
            TokenSource::File(path) => match std::fs::read_to_string(path) {
                Ok(value) => value,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(ApiError::Token(format!("{}: {e}", path.display()))),
            },
        };
        let token = raw.trim();
        if token.is_empty() {
            debug!("Token source {:?} is empty", self);
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }
}
