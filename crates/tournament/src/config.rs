//! Runner configuration, read from `tournament.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use swiss_core::{DEFAULT_PLAYERS, DEFAULT_ROUNDS};

/// Default location of the configuration file
pub const CONFIG_FILE: &str = "tournament.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding players and tournaments
    pub store_path: PathBuf,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Values used when a new tournament does not specify them
    pub defaults: TournamentDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentDefaults {
    pub number_of_rounds: u32,
    pub number_of_players: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("database/db.json"),
            log_level: "info".to_string(),
            defaults: TournamentDefaults::default(),
        }
    }
}

impl Default for TournamentDefaults {
    fn default() -> Self {
        Self {
            number_of_rounds: DEFAULT_ROUNDS,
            number_of_players: DEFAULT_PLAYERS,
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
