//! The control loop: one hunter, one town at a time, one command per turn.

use log::{debug, info};

use super::commands::{format_menu, Command, INVALID_OPTION, MOVE_PROMPT};
use super::hunter::{Hunter, Treasure};
use super::io::{Input, Output, Style};
use super::mode::{GameMode, ModeSettings};
use super::rng::Entropy;
use super::shop::Shop;
use super::town::{DigOutcome, Town};
use crate::config::GameConfig;
use crate::logutil::escape_input;

/// Gear pre-bought for a `test` start.
pub const TEST_KIT: [&str; 5] = ["water", "rope", "machete", "horse", "boat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// All three treasures collected.
    Victory,
    /// Out of gold, gave up, or ran out of input.
    Defeat,
}

pub struct GameSession<O: Output, I: Input, E: Entropy> {
    settings: ModeSettings,
    hunter: Hunter,
    town: Town,
    out: O,
    input: I,
    rng: E,
    quit: bool,
}

impl<O: Output, I: Input, E: Entropy> GameSession<O, I, E> {
    /// Greet the player, ask for a name and a mode, and arrive in the first town.
    ///
    /// If the input runs dry during setup the session is already over; `play`
    /// then goes straight to the ending.
    pub fn start(config: &GameConfig, mut out: O, mut input: I, rng: E) -> Self {
        out.present("Welcome to TREASURE HUNTER!", Style::Highlight);
        out.present("Going hunting for the big treasure, eh?", Style::Normal);
        out.present("What's your name, Hunter? ", Style::Prompt);
        let name = input.read_line();

        let mode_choice = if name.is_some() {
            out.present("Hard mode? (y/n/e/s) OR test: ", Style::Prompt);
            input.read_line()
        } else {
            None
        };
        let exhausted = mode_choice.is_none();
        let mode = GameMode::from_choice(mode_choice.as_deref().unwrap_or(""));

        let settings = config.settings_for(mode);
        let mut hunter = Hunter::new(name.as_deref().unwrap_or(""), config.starting_gold);
        hunter.change_gold(settings.bonus_gold);
        if mode == GameMode::Test {
            outfit_for_testing(&mut hunter);
        }
        info!(
            "session: '{}' starts in {} mode with {} gold",
            escape_input(hunter.name()),
            mode.label(),
            hunter.gold()
        );

        let mut session = GameSession::with_hunter(settings, hunter, out, input, rng);
        session.quit = exhausted;
        session
    }

    /// Skip the greeting: play `hunter` as-is under `settings`.
    pub fn with_hunter(settings: ModeSettings, hunter: Hunter, out: O, input: I, mut rng: E) -> Self {
        let town = Self::build_town(&settings, &hunter, &mut rng);
        GameSession {
            settings,
            hunter,
            town,
            out,
            input,
            rng,
            quit: false,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn hunter_mut(&mut self) -> &mut Hunter {
        &mut self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn settings(&self) -> &ModeSettings {
        &self.settings
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Swap in a specific town, greeting the hunter there.
    pub fn replace_town(&mut self, mut town: Town) {
        town.hunter_arrives(&self.hunter);
        self.town = town;
    }

    /// Whether the loop would read another command.
    pub fn is_running(&self) -> bool {
        !self.quit && self.hunter.gold() > 0 && !self.hunter.has_all_treasures()
    }

    /// Run turns until the player leaves, goes broke or wins.
    pub fn play(&mut self) -> Ending {
        while self.is_running() {
            self.show_status();
            let Some(line) = self.input.read_line() else {
                debug!("session: input exhausted, leaving");
                self.step(Command::Exit);
                break;
            };
            debug!("session: command '{}'", escape_input(&line));
            match Command::parse(&line) {
                Some(command) => self.step(command),
                None => self.out.present(INVALID_OPTION, Style::Warning),
            }
        }
        self.finish()
    }

    /// Carry out one menu command.
    pub fn step(&mut self, command: Command) {
        match command {
            Command::Shop(mode) => {
                self.town
                    .enter_shop(&mut self.hunter, mode, &mut self.out, &mut self.input);
            }
            Command::Explore => {
                let info = self.town.terrain().info_string();
                self.out.present(&info, Style::Normal);
            }
            Command::Move => {
                if self.town.leave_town(&mut self.hunter, &mut self.rng) {
                    // this town is going away, so its news goes out now
                    self.out.present(self.town.latest_news(), Style::Normal);
                    self.town = Self::build_town(&self.settings, &self.hunter, &mut self.rng);
                }
            }
            Command::LookForTrouble => {
                self.town
                    .look_for_trouble(&mut self.hunter, &mut self.rng, &mut self.out);
            }
            Command::Hunt => self.hunt(),
            Command::Dig => {
                let outcome = self.town.dig_for_gold(&mut self.hunter, &mut self.rng);
                let style = match outcome {
                    DigOutcome::Struck(_) => Style::Success,
                    _ => Style::Normal,
                };
                self.out.present(&outcome.narration(), style);
            }
            Command::Exit => {
                self.out
                    .present(&format!("Fare thee well, {}!", self.hunter.name()), Style::Normal);
                self.quit = true;
            }
        }
    }

    fn hunt(&mut self) {
        if self.town.searched_for_treasure() {
            self.out
                .present("You have already searched this town", Style::Normal);
            return;
        }
        let treasure = self.town.get_treasure(&mut self.rng);
        if treasure == Treasure::Dust {
            self.out.present("You found dust!", Style::Normal);
        } else if self.hunter.has_item_in_treasure_list(treasure) {
            self.out.present(
                &format!("You have already collected this {}!", treasure),
                Style::Normal,
            );
        } else {
            self.out
                .present(&format!("You found a {}!", treasure), Style::Success);
            self.hunter.add_treasure(treasure);
            info!("session: {} found a {}", self.hunter.name(), treasure);
        }
        self.town.mark_searched();
    }

    fn show_status(&mut self) {
        self.out.present(self.town.latest_news(), Style::Normal);
        self.out.present("***", Style::Normal);
        self.out.present(&self.hunter.info_string(), Style::Normal);
        self.out.present(&self.town.info_string(), Style::Normal);
        self.out.present(&format_menu(), Style::Normal);
        self.out.present(MOVE_PROMPT, Style::Prompt);
    }

    fn finish(&mut self) -> Ending {
        let name = self.hunter.name();
        let ending = if self.hunter.has_all_treasures() {
            self.out.present(
                &format!("Fare thee well, {}, you have bested this game.\nGOOD ENDING", name),
                Style::Success,
            );
            Ending::Victory
        } else {
            self.out.present(
                &format!("Fare thee well, {}, you are out of money!\nBAD ENDING", name),
                Style::Warning,
            );
            Ending::Defeat
        };
        info!(
            "session: ended {:?} with {} gold",
            ending,
            self.hunter.gold()
        );
        ending
    }

    fn build_town(settings: &ModeSettings, hunter: &Hunter, rng: &mut E) -> Town {
        let shop = Shop::new(settings.markdown, settings.samurai);
        let mut town = Town::new(shop, settings.toughness, settings.protect_items, rng);
        town.hunter_arrives(hunter);
        town
    }
}

/// Debug outfit: extra gold, the five crossing tools paid at catalog price, then a top-up.
pub fn outfit_for_testing(hunter: &mut Hunter) {
    hunter.change_gold(80);
    for item in TEST_KIT {
        hunter.buy_item(item, Shop::base_price(item).unwrap_or(0));
    }
    hunter.change_gold(44);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt::io::{ScriptedInput, Transcript};
    use crate::hunt::rng::ScriptedEntropy;
    use crate::hunt::terrain::{Terrain, TerrainKind};

    type TestSession = GameSession<Transcript, ScriptedInput, ScriptedEntropy>;

    fn session_with(gold: i32, lines: &[&str], draws: &[f64]) -> TestSession {
        let config = GameConfig::default();
        let settings = config.settings_for(GameMode::Normal);
        // first two draws build the opening town
        let mut all = vec![0.0, 0.9];
        all.extend_from_slice(draws);
        GameSession::with_hunter(
            settings,
            Hunter::new("tester", gold),
            Transcript::new(),
            ScriptedInput::new(lines.iter().copied()),
            ScriptedEntropy::new(all),
        )
    }

    #[test]
    fn outfit_ends_with_hundred_gold_and_five_tools() {
        let mut h = Hunter::new("t", 20);
        outfit_for_testing(&mut h);
        assert_eq!(h.gold(), 100);
        assert_eq!(h.kit_len(), 5);
        for item in TEST_KIT {
            assert!(h.has_item_in_kit(item));
        }
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut s = session_with(20, &["q", "x"], &[]);
        assert_eq!(s.play(), Ending::Defeat);
        let out = s.output();
        assert_eq!(out.count(INVALID_OPTION), 1);
        assert_eq!(out.count(MOVE_PROMPT), 2);
        assert!(out.contains("Fare thee well, tester!"));
    }

    #[test]
    fn second_hunt_in_same_town_is_refused() {
        let mut s = session_with(20, &[], &[0.5]);
        s.step(Command::Hunt);
        assert!(s.hunter().has_item_in_treasure_list(Treasure::Gem));
        s.step(Command::Hunt);
        assert!(s.output().contains("You have already searched this town"));
        assert_eq!(s.hunter().treasures().count(), 1);
    }

    #[test]
    fn dust_is_never_collected() {
        let mut s = session_with(20, &[], &[0.9]);
        s.step(Command::Hunt);
        assert!(s.output().contains("You found dust!"));
        assert_eq!(s.hunter().treasures().count(), 0);
        assert!(s.town().searched_for_treasure());
    }

    #[test]
    fn moving_resets_the_per_town_flags() {
        let mut s = session_with(20, &[], &[0.1, 0.0]);
        s.hunter_mut().buy_item("rope", 0);
        s.hunter_mut().buy_item("shovel", 0);
        s.step(Command::Hunt);
        s.step(Command::Dig);
        assert!(s.town().searched_for_treasure());
        assert!(s.town().dug_for_gold());
        // opening town is Mountains; the drained script keeps the rope intact
        assert_eq!(s.town().terrain().kind(), TerrainKind::Mountains);
        s.step(Command::Move);
        assert!(!s.town().searched_for_treasure());
        assert!(!s.town().dug_for_gold());
        assert!(s.output().contains("You used your rope to cross the Mountains."));
        assert!(s.town().latest_news().starts_with("Welcome to town, tester."));
    }

    #[test]
    fn replaced_town_greets_and_gates_the_hunter() {
        let mut s = session_with(20, &[], &[]);
        let rough = Town::with_terrain(
            Shop::new(0.5, false),
            Terrain::new(TerrainKind::Ocean),
            true,
            false,
        );
        s.replace_town(rough);
        assert!(s.town().is_tough());
        assert!(s
            .town()
            .latest_news()
            .ends_with("It's pretty rough around here, so watch yourself."));
        s.hunter_mut().buy_item("rope", 0);
        s.step(Command::Move);
        assert_eq!(s.town().terrain().kind(), TerrainKind::Ocean);
        assert_eq!(
            s.town().latest_news(),
            "You can't leave town, tester. You don't have a boat."
        );
    }

    #[test]
    fn exhausted_input_ends_like_exit() {
        let mut s = session_with(20, &[], &[]);
        assert_eq!(s.play(), Ending::Defeat);
        assert!(s.output().contains("Fare thee well, tester!"));
        assert!(s.output().contains("BAD ENDING"));
    }
}
