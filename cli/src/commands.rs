use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wishlist_core::session::current_claims;
use wishlist_core::{Outcome, TokenProvider, Transport, Wishlist};

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[clap(name = "wishlist", about = "Keep a wishlist of movies to watch")]
pub struct CliArgs {
    /// Path to a TOML configuration file. CLI arguments override its values.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the wishlist API.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Environment variable holding the bearer token. Enables login gating.
    #[clap(long, conflicts_with = "token_file")]
    pub token_env: Option<String>,

    /// File holding the bearer token. Enables login gating.
    #[clap(long)]
    pub token_file: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            base_url: args.base_url.clone(),
            token_env: args.token_env.clone(),
            token_file: args.token_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the wishlist.
    List,
    /// Add a movie. Words are joined with spaces.
    Add {
        #[clap(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip the watched flag of a movie.
    Toggle { id: String },
    /// Remove a movie.
    Delete { id: String },
    /// Show the decoded claims of the current token.
    Whoami,
}

/// Run one command and write the resulting view to `out`. Returns `false`
/// when the action failed; the view is printed either way.
pub fn execute<T, P>(
    command: &Command,
    wishlist: &mut Wishlist<T, P>,
    out: &mut impl Write,
) -> Result<bool>
where
    T: Transport,
    P: TokenProvider,
{
    if let Command::Whoami = command {
        return whoami(wishlist.token_provider(), out);
    }

    let mut ok = !wishlist.mount().is_failed();
    let outcome = match command {
        Command::List | Command::Whoami => None,
        Command::Add { title } => Some(wishlist.add(&title.join(" "))),
        Command::Toggle { id } => {
            let id = wishlist.resolve_id(id);
            Some(wishlist.toggle_watched(&id))
        }
        Command::Delete { id } => {
            let id = wishlist.resolve_id(id);
            Some(wishlist.delete(&id))
        }
    };
    match outcome {
        Some(Outcome::Failed(e)) => {
            writeln!(out, "error: {e}")?;
            ok = false;
        }
        Some(Outcome::Skipped(skip)) => {
            writeln!(out, "nothing done: {skip:?}")?;
            ok = false;
        }
        Some(Outcome::Applied) | None => {}
    }

    write!(out, "{}", wishlist.view().render())?;
    Ok(ok)
}

fn whoami<P: TokenProvider>(tokens: &P, out: &mut impl Write) -> Result<bool> {
    match current_claims(tokens) {
        Ok(Some(claims)) => {
            writeln!(out, "subject: {}", claims.sub.as_deref().unwrap_or("-"))?;
            writeln!(out, "permissions: {}", claims.permissions.join(", "))?;
            writeln!(out, "admin: {}", claims.is_admin())?;
            Ok(true)
        }
        Ok(None) => {
            writeln!(out, "not logged in")?;
            Ok(false)
        }
        Err(e) => {
            writeln!(out, "error: {e}")?;
            Ok(false)
        }
    }
}
