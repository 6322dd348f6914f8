//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{BoardSize, Player};
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length for new games.
    #[serde(default)]
    size: BoardSize,

    /// Display name for player one (X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for player two (O).
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    Player::One.to_string()
}

fn default_player_two() -> String {
    Player::Two.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = %config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the board size.
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Display name for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
