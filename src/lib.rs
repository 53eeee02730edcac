//! # Treasure Hunter - a text-adventure treasure hunt
//!
//! A hunter with a few coins wanders from town to town looking for the crown,
//! the trophy and the gem. Every town is ringed by terrain that takes a
//! particular tool to cross, sells and buys those tools, hides one treasure
//! search and one dig for gold, and may host a brawl or two.
//!
//! ## Features
//!
//! - **Five difficulty modes**: normal, hard, easy, samurai and a pre-outfitted test start.
//! - **Configurable tuning**: shop markdown, town toughness and bonus gold per mode, from TOML.
//! - **Replayable games**: every random draw goes through one injectable source; seed it to replay.
//! - **Headless play**: scripted input and a recording output drive whole games in tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//! use treasure_hunter::hunt::{ConsoleInput, ConsoleOutput, GameSession, RandEntropy};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("treasure-hunter.toml").await?;
//!     let mut session = GameSession::start(
//!         &config.game,
//!         ConsoleOutput::new(),
//!         ConsoleInput::new(),
//!         RandEntropy::seeded(7),
//!     );
//!     session.play();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`hunt`] - the game engine: hunter, shop, terrain, town and the session loop
//! - [`config`] - configuration loading and validation
//! - [`logutil`] - helpers for logging player input

pub mod config;
pub mod hunt;
pub mod logutil;
