use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wishlist_core::{AuthMode, NoToken, Wishlist, WishlistClient};
use wishlist_cli::{execute, AppConfig, CliArgs, CliConfig, FileConfig, UreqTransport};

fn main() -> Result<ExitCode> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config: CliConfig = (&cli_args).into();
    let app_config = AppConfig::resolve(&cli_config, file_config)?;
    debug!("Configuration: {:?}", app_config);

    let client = WishlistClient::new(&app_config.base_url);
    let mut stdout = std::io::stdout().lock();
    let ok = match app_config.token_source {
        Some(source) => {
            let mut wishlist = Wishlist::new(client, UreqTransport::new(), source, AuthMode::Gated);
            execute(&cli_args.command, &mut wishlist, &mut stdout)?
        }
        None => {
            let mut wishlist = Wishlist::new(client, UreqTransport::new(), NoToken, AuthMode::Open);
            execute(&cli_args.command, &mut wishlist, &mut stdout)?
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
