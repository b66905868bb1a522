//! Client core for the movie wishlist service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of that sits the
//! `Wishlist` controller, which keeps the local movie list in a replace-only
//! state cell and decides, from unverified token claims, which controls the
//! view offers.
//!
//! # Design
//! - `WishlistClient` is stateless; it holds only `base_url`. Bearer tokens
//!   are passed per call and never stored.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit. Hosts plug in a `Transport` and a `TokenProvider`.
//! - Permission gating is cosmetic. The backend enforces authorization.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod claims;
pub mod client;
pub mod error;
pub mod guard;
pub mod http;
pub mod session;
pub mod state;
pub mod types;
pub mod view;
pub mod wishlist;

pub use claims::{decode_claims, is_admin_token, Claims, ADMIN_PERMISSION};
pub use client::{WishlistClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use guard::{InFlight, InFlightGuard};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use session::{AuthMode, AuthState, NoToken, StaticToken, TokenProvider};
pub use state::StateCell;
pub use types::{Movie, MovieId, NewMovie};
pub use view::{Controls, View};
pub use wishlist::{Outcome, Skip, Wishlist};
