//! Terminal host for the movie wishlist.
//!
//! Executes the core's requests over HTTP with ureq, reads the bearer token
//! from an environment variable or a file on every call, and prints the view
//! the core decides on.

pub mod commands;
pub mod config;
pub mod token;
pub mod transport;

pub use commands::{execute, CliArgs, Command};
pub use config::{AppConfig, CliConfig, FileConfig};
pub use token::TokenSource;
pub use transport::UreqTransport;
