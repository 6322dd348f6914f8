//! Command-line interface for the terminal game.

use clap::Parser;
use strictly_tictactoe::BoardSize;

/// Strictly Tic-Tac-Toe - two players, one terminal, any board size
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play n-by-n tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long, value_parser = parse_size)]
    pub size: Option<BoardSize>,

    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Parses a board size argument.
pub fn parse_size(s: &str) -> Result<BoardSize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid board size '{}': {}", s, e))?;
    BoardSize::new(n).map_err(|e| e.to_string())
}
