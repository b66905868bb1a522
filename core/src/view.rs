//! View model and a plain-text renderer.
//!
//! The view only decides which affordances exist. Hiding a control is
//! cosmetic; the backend still has the final say on every call.

use std::fmt::Write;

use crate::session::{AuthMode, AuthState};
use crate::types::Movie;

pub const HEADING: &str = "My Movie Wishlist";

/// Controls offered next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub add: bool,
    pub toggle: bool,
    pub delete: bool,
}

impl Controls {
    pub const FULL: Controls = Controls {
        add: true,
        toggle: true,
        delete: true,
    };

    pub const READ_ONLY: Controls = Controls {
        add: false,
        toggle: true,
        delete: false,
    };

    /// `None` when only the login affordance is shown.
    pub fn for_state(mode: AuthMode, auth: AuthState) -> Option<Controls> {
        match (mode, auth) {
            (AuthMode::Open, _) => Some(Controls::FULL),
            (AuthMode::Gated, AuthState::Unauthenticated) => None,
            (AuthMode::Gated, AuthState::Authenticated { is_admin: true }) => Some(Controls::FULL),
            (AuthMode::Gated, AuthState::Authenticated { is_admin: false }) => {
                Some(Controls::READ_ONLY)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Nothing but a login affordance.
    Login,
    List {
        movies: Vec<Movie>,
        controls: Controls,
    },
}

impl View {
    pub fn from_state(mode: AuthMode, auth: AuthState, movies: &[Movie]) -> Self {
        match Controls::for_state(mode, auth) {
            None => View::Login,
            Some(controls) => View::List {
                movies: movies.to_vec(),
                controls,
            },
        }
    }

    pub fn controls(&self) -> Option<Controls> {
        match self {
            View::Login => None,
            View::List { controls, .. } => Some(*controls),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{HEADING}");
        match self {
            View::Login => {
                let _ = writeln!(out, "Log in to see your wishlist.");
            }
            View::List { movies, controls } => {
                if controls.add {
                    let _ = writeln!(out, "(add a movie with: add <title>)");
                }
                if movies.is_empty() {
                    let _ = writeln!(out, "No movies yet.");
                }
                for movie in movies {
                    let mark = if movie.watched { "x" } else { " " };
                    let _ = write!(out, "[{mark}] {}  (id {})", movie.title, movie.id);
                    if controls.delete {
                        let _ = write!(out, "  [delete]");
                    }
                    out.push('\n');
                }
            }
        }
        out
    }
}
