//! The wishlist controller.
//!
//! # Design
//! `Wishlist` owns the local movie list and maps every user action to one
//! outbound call followed by one replacement of the list. Failures are caught
//! here and logged; the list is left as it was and nothing is retried. The
//! returned `Outcome` lets the host report what happened, but it carries no
//! state of its own.

use tracing::{debug, info, warn};

use crate::client::WishlistClient;
use crate::error::ApiError;
use crate::guard::InFlight;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::session::{AuthMode, AuthState, TokenProvider};
use crate::state::StateCell;
use crate::types::{Movie, MovieId, NewMovie};
use crate::view::{Controls, View};

/// Why an action issued no call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The title was blank after trimming.
    EmptyTitle,
    /// A toggle or delete for the same movie is still running.
    Busy,
    /// The current view does not offer this control.
    NotOffered,
}

#[derive(Debug)]
pub enum Outcome {
    Applied,
    Skipped(Skip),
    Failed(ApiError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

pub struct Wishlist<T, P> {
    client: WishlistClient,
    transport: T,
    tokens: P,
    mode: AuthMode,
    auth: AuthState,
    movies: StateCell<Vec<Movie>>,
    in_flight: InFlight,
}

impl<T: Transport, P: TokenProvider> Wishlist<T, P> {
    pub fn new(client: WishlistClient, transport: T, tokens: P, mode: AuthMode) -> Self {
        Self {
            client,
            transport,
            tokens,
            mode,
            auth: AuthState::Unauthenticated,
            movies: StateCell::default(),
            in_flight: InFlight::new(),
        }
    }

    pub fn movies(&self) -> &[Movie] {
        self.movies.get()
    }

    /// The state cell itself, for hosts that want to subscribe to changes.
    pub fn movies_cell(&mut self) -> &mut StateCell<Vec<Movie>> {
        &mut self.movies
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn token_provider(&self) -> &P {
        &self.tokens
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn view(&self) -> View {
        View::from_state(self.mode, self.auth, self.movies.get())
    }

    /// First render. Open wishlists fetch right away; gated ones ask the
    /// token provider whether someone is logged in and fetch if so.
    pub fn mount(&mut self) -> Outcome {
        match self.mode {
            AuthMode::Open => self.refresh(),
            AuthMode::Gated => match self.tokens.access_token() {
                Ok(Some(token)) => self.set_auth(AuthState::from_token(&token)),
                Ok(None) => self.set_auth(AuthState::Unauthenticated),
                Err(e) => {
                    warn!("Failed to read login state: {}", e);
                    self.set_auth(AuthState::Unauthenticated);
                    Outcome::Failed(e)
                }
            },
        }
    }

    /// Apply a login/logout. The list is fetched when the state flips to
    /// authenticated and cleared when it flips back.
    pub fn set_auth(&mut self, auth: AuthState) -> Outcome {
        let was_authenticated = self.auth.is_authenticated();
        self.auth = auth;
        match (was_authenticated, auth.is_authenticated()) {
            (false, true) => {
                info!("Logged in (admin: {})", auth.is_admin());
                self.refresh()
            }
            (true, false) => {
                info!("Logged out");
                self.movies.replace(Vec::new());
                Outcome::Applied
            }
            _ => Outcome::Applied,
        }
    }

    /// Replace the whole local list with the server's.
    pub fn refresh(&mut self) -> Outcome {
        let result = self
            .token()
            .map(|token| self.client.build_list_movies(token.as_deref()))
            .and_then(|req| self.send(&req))
            .and_then(|resp| self.client.parse_list_movies(resp));
        match result {
            Ok(movies) => {
                info!("Fetched {} movies", movies.len());
                self.movies.replace(movies);
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to fetch movies: {}", e);
                Outcome::Failed(e)
            }
        }
    }

    /// Add a movie and append the server's record to the end of the list.
    pub fn add(&mut self, title: &str) -> Outcome {
        let Some(input) = NewMovie::from_input(title) else {
            debug!("Ignoring blank title");
            return Outcome::Skipped(Skip::EmptyTitle);
        };
        if !self.offers(|c| c.add) {
            return Outcome::Skipped(Skip::NotOffered);
        }
        let result = self
            .token()
            .and_then(|token| self.client.build_add_movie(&input, token.as_deref()))
            .and_then(|req| self.send(&req))
            .and_then(|resp| self.client.parse_add_movie(resp));
        match result {
            Ok(added) => {
                self.movies.update(|movies| {
                    let mut next = movies.clone();
                    next.push(added);
                    next
                });
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to add movie: {}", e);
                Outcome::Failed(e)
            }
        }
    }

    /// Ask the server to flip the watched flag and swap in its answer.
    pub fn toggle_watched(&mut self, id: &MovieId) -> Outcome {
        if !self.offers(|c| c.toggle) {
            return Outcome::Skipped(Skip::NotOffered);
        }
        let Some(_guard) = self.in_flight.try_begin(id) else {
            debug!("Movie {} already has a request in flight", id);
            return Outcome::Skipped(Skip::Busy);
        };
        let result = self
            .token()
            .map(|token| self.client.build_toggle_watched(id, token.as_deref()))
            .and_then(|req| self.send(&req))
            .and_then(|resp| self.client.parse_toggle_watched(resp));
        match result {
            Ok(updated) => {
                self.movies.update(|movies| {
                    movies
                        .iter()
                        .map(|m| if &m.id == id { updated.clone() } else { m.clone() })
                        .collect()
                });
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to update movie {}: {}", id, e);
                Outcome::Failed(e)
            }
        }
    }

    /// Delete a movie. The record is dropped as soon as the server answers,
    /// whatever the status; a non-2xx answer is still logged and reported.
    /// Only a call that never got a response leaves the list alone.
    pub fn delete(&mut self, id: &MovieId) -> Outcome {
        if !self.offers(|c| c.delete) {
            return Outcome::Skipped(Skip::NotOffered);
        }
        let Some(_guard) = self.in_flight.try_begin(id) else {
            debug!("Movie {} already has a request in flight", id);
            return Outcome::Skipped(Skip::Busy);
        };
        let response = self
            .token()
            .map(|token| self.client.build_delete_movie(id, token.as_deref()))
            .and_then(|req| self.send(&req));
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to delete movie {}: {}", id, e);
                return Outcome::Failed(e);
            }
        };
        self.movies
            .update(|movies| movies.iter().filter(|m| &m.id != id).cloned().collect());
        match self.client.parse_delete_movie(response) {
            Ok(()) => Outcome::Applied,
            Err(e) => {
                warn!("Failed to delete movie {}: {}", id, e);
                Outcome::Failed(e)
            }
        }
    }

    /// Map an id as typed by a user to the id of a movie in the local list,
    /// comparing by displayed form. Unknown ids are passed on as text for
    /// the server to judge.
    pub fn resolve_id(&self, typed: &str) -> MovieId {
        self.movies
            .get()
            .iter()
            .find(|m| m.id.to_string() == typed)
            .map(|m| m.id.clone())
            .unwrap_or_else(|| MovieId::from(typed))
    }

    fn offers(&self, pick: impl Fn(Controls) -> bool) -> bool {
        let offered = Controls::for_state(self.mode, self.auth).is_some_and(pick);
        if !offered {
            debug!("Control not offered in the current view");
        }
        offered
    }

    /// A fresh token per call in gated mode; never one in open mode.
    fn token(&self) -> Result<Option<String>, ApiError> {
        match self.mode {
            AuthMode::Open => Ok(None),
            AuthMode::Gated => match self.tokens.access_token()? {
                Some(token) => Ok(Some(token)),
                None => Err(ApiError::Token("no user is logged in".to_string())),
            },
        }
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.execute(request)?;
        debug!("{} {} -> {}", request.method.as_str(), request.path, response.status);
        Ok(response)
    }
}
