//! Treasure Hunter game engine.
//!
//! A hunter starts with a little gold and travels from town to town. Each town
//! is walled in by terrain that can only be crossed with the right tool, has a
//! shop that buys and sells those tools, and hides one search worth of treasure.
//! Collect the crown, the trophy and the gem to win; run out of gold to lose.
//!
//! The engine is single-threaded and turn based. It talks to the player only
//! through [`io::Output`] and [`io::Input`] and draws every random number from
//! an [`rng::Entropy`], so a whole game can be replayed from a script.

pub mod commands;
pub mod errors;
pub mod hunter;
pub mod io;
pub mod mode;
pub mod rng;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;

pub use commands::Command;
pub use errors::HuntError;
pub use hunter::{Hunter, Treasure};
pub use io::{ConsoleInput, ConsoleOutput, Input, Output, ScriptedInput, Style, Transcript};
pub use mode::{GameMode, ModeSettings, ModeTuning};
pub use rng::{Entropy, RandEntropy, ScriptedEntropy};
pub use session::{Ending, GameSession};
pub use shop::{Shop, ShopMode};
pub use terrain::{Terrain, TerrainKind};
pub use town::{DigOutcome, Town, Trouble};
