//! Error types for the wishlist API client.
//!
//! # Design
//! `NotFound` and `Unauthorized` get dedicated variants because callers
//! distinguish "the movie is gone" and "the token was refused" from "the
//! server returned an unexpected status." All other non-2xx responses land in
//! `Http` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `WishlistClient` parse methods and by the controller's
/// collaborators.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the requested movie.
    #[error("resource not found")]
    NotFound,

    /// The server refused the bearer token (401) or the permission (403).
    #[error("unauthorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The server returned a non-2xx status other than 401, 403 or 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the HTTP round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The identity provider could not hand out a token.
    #[error("token unavailable: {0}")]
    Token(String),
}
