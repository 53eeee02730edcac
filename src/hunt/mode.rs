//! Difficulty modes chosen at the start of a game.

use serde::{Deserialize, Serialize};

use super::errors::{check_gold, check_rate, HuntError};

/// Startup choice made by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Normal,
    Hard,
    Easy,
    Samurai,
    /// Debug start: pre-bought gear and extra gold on normal settings.
    Test,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Normal,
        GameMode::Hard,
        GameMode::Easy,
        GameMode::Samurai,
        GameMode::Test,
    ];

    /// Map the answer to the startup question. Anything unrecognised is normal.
    pub fn from_choice(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "y" => GameMode::Hard,
            "e" => GameMode::Easy,
            "s" => GameMode::Samurai,
            "test" => GameMode::Test,
            _ => GameMode::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Hard => "hard",
            GameMode::Easy => "easy",
            GameMode::Samurai => "samurai",
            GameMode::Test => "test",
        }
    }
}

/// Tunable numbers for one mode, as stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeTuning {
    /// Fraction of the base price paid when the shop buys an item back.
    pub markdown: f64,
    /// Probability that a freshly built town is a tough one.
    pub toughness: f64,
    /// Gold granted on top of the starting purse.
    #[serde(default)]
    pub bonus_gold: i32,
}

impl ModeTuning {
    pub const fn new(markdown: f64, toughness: f64, bonus_gold: i32) -> Self {
        Self {
            markdown,
            toughness,
            bonus_gold,
        }
    }

    pub fn validate(&self, section: &str) -> Result<(), HuntError> {
        check_rate(&format!("{section}.markdown"), self.markdown)?;
        check_rate(&format!("{section}.toughness"), self.toughness)?;
        check_gold(&format!("{section}.bonus_gold"), self.bonus_gold)?;
        Ok(())
    }
}

/// Everything the engine needs to know about the chosen mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeSettings {
    pub mode: GameMode,
    pub markdown: f64,
    pub toughness: f64,
    pub bonus_gold: i32,
    /// Items never break when crossing terrain.
    pub protect_items: bool,
    /// Shops stock the sword and give owners everything for free.
    pub samurai: bool,
}

impl ModeSettings {
    /// Resolve a tuning row. Samurai towns are never tough, whatever the row says.
    pub fn new(mode: GameMode, tuning: ModeTuning) -> Self {
        let toughness = if mode == GameMode::Samurai {
            0.0
        } else {
            tuning.toughness
        };
        ModeSettings {
            mode,
            markdown: tuning.markdown,
            toughness,
            bonus_gold: tuning.bonus_gold,
            protect_items: mode == GameMode::Easy,
            samurai: mode == GameMode::Samurai,
        }
    }
}
