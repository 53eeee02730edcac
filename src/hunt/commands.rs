//! Menu vocabulary: one letter per action, case-insensitive.

use super::shop::ShopMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shop(ShopMode),
    Explore,
    Move,
    LookForTrouble,
    Hunt,
    Dig,
    Exit,
}

impl Command {
    /// Parse one line of player input. Surrounding whitespace and case are ignored.
    pub fn parse(raw: &str) -> Option<Command> {
        match raw.trim().to_lowercase().as_str() {
            "b" => Some(Command::Shop(ShopMode::Buy)),
            "s" => Some(Command::Shop(ShopMode::Sell)),
            "e" => Some(Command::Explore),
            "m" => Some(Command::Move),
            "l" => Some(Command::LookForTrouble),
            "h" => Some(Command::Hunt),
            "d" => Some(Command::Dig),
            "x" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Menu lines shown every turn, in display order.
pub const MENU: [&str; 8] = [
    "(B)uy something at the shop.",
    "(S)ell something at the shop.",
    "(E)xplore surrounding terrain.",
    "(M)ove on to a different town.",
    "(L)ook for trouble!",
    "(H)unt for treasure.",
    "(D)ig for gold.",
    "Give up the hunt and e(X)it.",
];

pub const MOVE_PROMPT: &str = "What's your next move? ";

pub const INVALID_OPTION: &str = "Yikes! That's an invalid option! Try again.";

pub fn format_menu() -> String {
    MENU.join("\n")
}
