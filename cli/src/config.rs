use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wishlist_core::DEFAULT_BASE_URL;

use crate::token::TokenSource;

/// Optional settings read from a TOML file.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    /// Name of an environment variable holding the bearer token.
    pub token_env: Option<String>,
    /// Path of a file holding the bearer token.
    pub token_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Settings given on the command line.
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub token_env: Option<String>,
    pub token_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    /// `None` means the wishlist is not gated by a login.
    pub token_source: Option<TokenSource>,
}

impl AppConfig {
    /// CLI flags win over the file, the file wins over defaults. A token
    /// source given on the command line replaces the file's entirely.
    pub fn resolve(cli: &CliConfig, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let base_url = cli
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("base_url must be an http(s) URL, got {:?}", base_url);
        }

        let cli_source = token_source(cli.token_env.clone(), cli.token_file.clone())?;
        let token_source = match cli_source {
            Some(source) => Some(source),
            None => token_source(file.token_env, file.token_file)?,
        };

        Ok(Self {
            base_url,
            token_source,
        })
    }
}

fn token_source(env: Option<String>, file: Option<PathBuf>) -> Result<Option<TokenSource>> {
    match (env, file) {
        (Some(_), Some(_)) => bail!("token_env and token_file are mutually exclusive"),
        (Some(var), None) => Ok(Some(TokenSource::Env(var))),
        (None, Some(path)) => Ok(Some(TokenSource::File(path))),
        (None, None) => Ok(None),
    }
}
