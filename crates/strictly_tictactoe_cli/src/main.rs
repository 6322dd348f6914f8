//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Two players share one terminal and take turns entering coordinates.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod render;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    info!(size = %config.size(), "Starting Strictly Tic-Tac-Toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(App::new(config), stdin.lock(), stdout.lock())
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            cli.config.display()
        );
        GameConfig::default()
    };

    // Override board size if provided
    Ok(match cli.size {
        Some(size) => {
            info!(%size, "Overriding board size");
            config.with_size(size)
        }
        None => config,
    })
}
