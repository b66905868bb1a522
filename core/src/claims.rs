//! Best-effort decoding of identity token claims.
//!
//! The payload is read without verifying the signature. The result only
//! decides which controls are shown; the backend makes the real
//! authorization decision.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Permission that unlocks add and delete controls.
pub const ADMIN_PERMISSION: &str = "manage:movies";

/// Claims read from the middle segment of a JWT.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Everything else in the payload, kept for display.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn is_admin(&self) -> bool {
        self.has_permission(ADMIN_PERMISSION)
    }
}

/// Decode the claims of a `header.payload.signature` token.
///
/// Returns `None` if the token does not have three segments, the payload is
/// not base64url, or it is not a JSON object of the expected shape.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // Identity providers usually strip padding, but not all of them do.
    let payload = parts[1];
    let bytes = if payload.ends_with('=') {
        URL_SAFE.decode(payload).ok()?
    } else {
        URL_SAFE_NO_PAD.decode(payload).ok()?
    };

    serde_json::from_slice(&bytes).ok()
}

/// `true` only when the token decodes and carries [`ADMIN_PERMISSION`].
pub fn is_admin_token(token: &str) -> bool {
    decode_claims(token).is_some_and(|claims| claims.is_admin())
}
