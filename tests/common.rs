//! Test utilities & fixtures.
//! Builds headless sessions driven by scripted input and scripted or seeded randomness.

use treasure_hunter::config::GameConfig;
use treasure_hunter::hunt::{
    GameMode, GameSession, Hunter, RandEntropy, ScriptedEntropy, ScriptedInput, Transcript,
};

pub type ScriptedSession = GameSession<Transcript, ScriptedInput, ScriptedEntropy>;

/// Draws that build a Mountains town that is not tough.
pub const SLEEPY_MOUNTAINS: [f64; 2] = [0.0, 0.9];

/// Full startup flow (name, mode question) with scripted draws.
#[allow(dead_code)]
pub fn start_session(lines: &[&str], draws: &[f64]) -> ScriptedSession {
    GameSession::start(
        &GameConfig::default(),
        Transcript::new(),
        ScriptedInput::new(lines.iter().copied()),
        ScriptedEntropy::new(draws.iter().copied()),
    )
}

/// Skip the greeting: a normal-mode hunter with `gold` in a sleepy Mountains town.
#[allow(dead_code)]
pub fn normal_session(gold: i32, lines: &[&str], draws: &[f64]) -> ScriptedSession {
    let mut all = SLEEPY_MOUNTAINS.to_vec();
    all.extend_from_slice(draws);
    GameSession::with_hunter(
        GameConfig::default().settings_for(GameMode::Normal),
        Hunter::new("tester", gold),
        Transcript::new(),
        ScriptedInput::new(lines.iter().copied()),
        ScriptedEntropy::new(all),
    )
}

/// Seeded session for statistical runs.
#[allow(dead_code)]
pub fn seeded_session(
    mode: GameMode,
    gold: i32,
    seed: u64,
) -> GameSession<Transcript, ScriptedInput, RandEntropy<rand::rngs::StdRng>> {
    GameSession::with_hunter(
        GameConfig::default().settings_for(mode),
        Hunter::new("tester", gold),
        Transcript::new(),
        ScriptedInput::new(Vec::<String>::new()),
        RandEntropy::seeded(seed),
    )
}
