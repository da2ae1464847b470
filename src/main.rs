//! inidoc - INI Document Manager

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use inidoc::cli::{commands, Cli, Context};

/// Pick the log level from `LOG_LEVEL`, falling back to the configured one
fn log_level(configured: &str) -> Level {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| configured.to_string());
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = inidoc::config::load_or_create_config()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&config.log.level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("config={:?}", config);

    let ctx = Context::from_cli(&cli, config)?;
    commands::execute(&ctx, &cli.command)
}
