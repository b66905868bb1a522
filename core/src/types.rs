//! Domain DTOs for the movie wishlist API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Movie ids are
//! assigned by the server and treated as opaque: some backends hand out
//! strings, others integers, so `MovieId` accepts both and re-serializes in
//! the form it was received.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, server-assigned movie identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{n}"),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MovieId {
    /// Typed ids stay text. Use `Wishlist::resolve_id` to find the form the
    /// server actually uses.
    fn from(s: &str) -> Self {
        MovieId::Text(s.to_string())
    }
}

impl From<i64> for MovieId {
    fn from(n: i64) -> Self {
        MovieId::Number(n)
    }
}

/// A single wishlist entry returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub watched: bool,
}

/// Request payload for adding a movie. The server decides the initial
/// watched flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
}

impl NewMovie {
    /// Returns `None` when the title is blank after trimming. The title is
    /// otherwise sent exactly as typed.
    pub fn from_input(title: &str) -> Option<Self> {
        if title.trim().is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
        })
    }
}
