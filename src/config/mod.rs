//! # Configuration Management Module
//!
//! Game tuning and logging settings, loaded from a TOML file.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - starting purse and the per-mode tuning table
//! - [`LoggingConfig`] - log level and optional log file
//!
//! Every field has a default, so an empty file (or no file at all) plays the
//! classic game.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("treasure-hunter.toml").await?;
//!     println!("Starting gold: {}", config.game.starting_gold);
//!
//!     Config::create_default("fresh.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! starting_gold = 20
//!
//! [game.hard]
//! markdown = 0.25
//! toughness = 0.75
//! bonus_gold = 0
//!
//! [logging]
//! level = "info"
//! file = "treasure-hunter.log"
//! ```
//!
//! Loading validates every value: rates must lie in `0.0..=1.0` and gold
//! settings must not be negative.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::hunt::errors::{check_gold, HuntError};
use crate::hunt::mode::{GameMode, ModeSettings, ModeTuning};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Gold every hunter starts with, before any mode bonus.
    #[serde(default = "default_starting_gold")]
    pub starting_gold: i32,
    #[serde(default = "default_normal")]
    pub normal: ModeTuning,
    #[serde(default = "default_hard")]
    pub hard: ModeTuning,
    #[serde(default = "default_easy")]
    pub easy: ModeTuning,
    #[serde(default = "default_samurai")]
    pub samurai: ModeTuning,
}

fn default_starting_gold() -> i32 {
    20
}

fn default_normal() -> ModeTuning {
    ModeTuning::new(0.5, 0.4, 0)
}

fn default_hard() -> ModeTuning {
    ModeTuning::new(0.25, 0.75, 0)
}

fn default_easy() -> ModeTuning {
    ModeTuning::new(1.0, 0.1, 20)
}

fn default_samurai() -> ModeTuning {
    ModeTuning::new(0.5, 0.0, 0)
}

impl GameConfig {
    /// Tuning row for `mode`. Test starts use the normal row.
    pub fn tuning_for(&self, mode: GameMode) -> ModeTuning {
        match mode {
            GameMode::Normal | GameMode::Test => self.normal,
            GameMode::Hard => self.hard,
            GameMode::Easy => self.easy,
            GameMode::Samurai => self.samurai,
        }
    }

    pub fn settings_for(&self, mode: GameMode) -> ModeSettings {
        ModeSettings::new(mode, self.tuning_for(mode))
    }

    /// Resolved settings for every mode, in menu order.
    pub fn mode_table(&self) -> Vec<ModeSettings> {
        GameMode::ALL
            .iter()
            .map(|mode| self.settings_for(*mode))
            .collect()
    }

    pub fn validate(&self) -> Result<(), HuntError> {
        check_gold("game.starting_gold", self.starting_gold)?;
        self.normal.validate("game.normal")?;
        self.hard.validate("game.hard")?;
        self.easy.validate("game.easy")?;
        self.samurai.validate("game.samurai")?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_gold: default_starting_gold(),
            normal: default_normal(),
            hard: default_hard(),
            easy: default_easy(),
            samurai: default_samurai(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append-mode log file. An empty string turns file logging off.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("treasure-hunter.log".to_string())
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Configured log file, if file logging is on.
    pub fn log_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config = Config::parse(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.game.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
