mod config;
mod filter;
mod import;
mod ledger;
mod models;
mod run;
mod summary;
mod ui;

use anyhow::{Context, Result};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{command_args, Config, LOG_ENV};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_args(&args);
    init_tracing(&config)?;

    match command_args(&args) {
        None => run::as_tui(&config),
        Some(cli_args) => run::as_cli(&cli_args, &config),
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match &config.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
    }
    Ok(())
}
