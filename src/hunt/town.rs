//! A single town: its terrain, its shop, and the events a hunter can trigger there.
//!
//! Only one town exists at a time. Moving on replaces it with a fresh one,
//! which also resets the one-shot treasure and digging flags.

use log::debug;

use super::hunter::{Hunter, Treasure};
use super::io::{Input, Output, Style};
use super::rng::Entropy;
use super::shop::{Shop, ShopMode};
use super::terrain::Terrain;

/// Brawl threshold in a tough town.
pub const TOUGH_TOWN_CHANCE: f64 = 0.66;
/// Brawl threshold in a sleepy town.
pub const MILD_TOWN_CHANCE: f64 = 0.33;
/// Chance the crossing tool breaks on the way out.
pub const ITEM_BREAK_CHANCE: f64 = 0.5;
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;
pub const DIG_MAX_GOLD: i32 = 20;
pub const BRAWL_MAX_GOLD: i32 = 10;

/// Result of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trouble {
    Quiet,
    Won(i32),
    Lost(i32),
}

/// Result of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    AlreadyDug,
    NoShovel,
    Struck(i32),
    Dirt,
}

impl DigOutcome {
    pub fn narration(self) -> String {
        match self {
            DigOutcome::AlreadyDug => "You already dug for gold in this town".to_string(),
            DigOutcome::NoShovel => "You can't dig for gold without a shovel".to_string(),
            DigOutcome::Struck(gold) => format!("You dug up {} gold!", gold),
            DigOutcome::Dirt => "You dug but only found dirt".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    terrain: Terrain,
    tough_town: bool,
    protect_items: bool,
    searched_for_treasure: bool,
    dug_for_gold: bool,
    latest_message: String,
}

impl Town {
    /// Build a town with random terrain. It is tough with probability `toughness`.
    pub fn new(shop: Shop, toughness: f64, protect_items: bool, rng: &mut dyn Entropy) -> Self {
        let terrain = Terrain::random(rng);
        let tough_town = rng.chance(toughness);
        debug!(
            "town: built {} town behind the {}",
            if tough_town { "tough" } else { "sleepy" },
            terrain.name()
        );
        Town::with_terrain(shop, terrain, tough_town, protect_items)
    }

    /// Build a town with everything decided up front.
    pub fn with_terrain(shop: Shop, terrain: Terrain, tough_town: bool, protect_items: bool) -> Self {
        Town {
            shop,
            terrain,
            tough_town,
            protect_items,
            searched_for_treasure: false,
            dug_for_gold: false,
            latest_message: String::new(),
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn is_tough(&self) -> bool {
        self.tough_town
    }

    pub fn latest_news(&self) -> &str {
        &self.latest_message
    }

    pub fn searched_for_treasure(&self) -> bool {
        self.searched_for_treasure
    }

    pub fn mark_searched(&mut self) {
        self.searched_for_treasure = true;
    }

    pub fn dug_for_gold(&self) -> bool {
        self.dug_for_gold
    }

    /// Greet the hunter; this becomes the town's first news.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let mut msg = format!("Welcome to town, {}.", hunter.name());
        if self.tough_town {
            msg.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            msg.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.latest_message = msg;
    }

    /// Try to cross the terrain. On success the tool may break, unless items
    /// are protected. Returns whether the hunter got out.
    pub fn leave_town(&mut self, hunter: &mut Hunter, rng: &mut dyn Entropy) -> bool {
        let item = self.terrain.required_item();
        if !self.terrain.can_cross(hunter) {
            self.latest_message = format!(
                "You can't leave town, {}. You don't have a {}.",
                hunter.name(),
                item
            );
            return false;
        }

        let mut msg = format!(
            "You used your {} to cross the {}.",
            item,
            self.terrain.name()
        );
        if rng.chance(ITEM_BREAK_CHANCE) {
            if self.protect_items {
                msg.push_str(&format!(
                    "\nA powerful force prevents you from losing your {}.",
                    item
                ));
            } else {
                hunter.remove_item_from_kit(item);
                msg.push_str(&format!("\nUnfortunately, you lost your {}.", item));
            }
        }
        self.latest_message = msg;
        true
    }

    /// Hand the hunter over to the shop and keep what it says as news.
    pub fn enter_shop(
        &mut self,
        hunter: &mut Hunter,
        mode: ShopMode,
        out: &mut dyn Output,
        input: &mut dyn Input,
    ) {
        self.latest_message = self.shop.enter(hunter, mode, out, input);
    }

    /// Brawl threshold for this town.
    pub fn no_trouble_chance(&self) -> f64 {
        if self.tough_town {
            TOUGH_TOWN_CHANCE
        } else {
            MILD_TOWN_CHANCE
        }
    }

    /// Pick a fight for gold.
    ///
    /// The same threshold gates both draws: a fight starts when the first draw
    /// is at or below it, and is won when the second draw is above it. Tough
    /// towns therefore start more fights and win fewer of them. A sword only
    /// changes what the beaten brawler says when the hunter wins.
    pub fn look_for_trouble(
        &mut self,
        hunter: &mut Hunter,
        rng: &mut dyn Entropy,
        out: &mut dyn Output,
    ) -> Trouble {
        let threshold = self.no_trouble_chance();
        if rng.unit() > threshold {
            self.latest_message = "You couldn't find any trouble".to_string();
            return Trouble::Quiet;
        }

        out.present(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!",
            Style::Warning,
        );
        let stake = rng.roll(BRAWL_MAX_GOLD);
        if rng.unit() > threshold {
            if hunter.has_item_in_kit("sword") {
                out.present(
                    "The brawler, seeing your sword, realized he needs to do better.\n\
                     He couldn't win this fight, so he gave you his gold.",
                    Style::Normal,
                );
            } else {
                out.present(
                    "Okay, stranger! You proved yer mettle. Here, take my gold.",
                    Style::Normal,
                );
            }
            out.present(
                &format!("You won the brawl and receive {} gold.", stake),
                Style::Highlight,
            );
            hunter.change_gold(stake);
            self.latest_message = "You won, nice.".to_string();
            debug!("town: brawl won, +{} gold", stake);
            Trouble::Won(stake)
        } else {
            out.present(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                Style::Normal,
            );
            out.present(
                &format!("You lost the brawl and pay {} gold.", stake),
                Style::Highlight,
            );
            hunter.change_gold(-stake);
            self.latest_message = "You're weak.".to_string();
            debug!("town: brawl lost, -{} gold", stake);
            Trouble::Lost(stake)
        }
    }

    /// Draw what a search turns up; crown, trophy, gem and dust are equally likely.
    pub fn get_treasure(&self, rng: &mut dyn Entropy) -> Treasure {
        Treasure::ALL[rng.pick(Treasure::ALL.len())]
    }

    /// Dig once per town with a shovel; half the time there is gold.
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut dyn Entropy) -> DigOutcome {
        if self.dug_for_gold {
            return DigOutcome::AlreadyDug;
        }
        if !hunter.has_item_in_kit("shovel") {
            return DigOutcome::NoShovel;
        }
        self.dug_for_gold = true;
        if rng.chance(DIG_SUCCESS_CHANCE) {
            let gold = rng.roll(DIG_MAX_GOLD);
            hunter.change_gold(gold);
            DigOutcome::Struck(gold)
        } else {
            DigOutcome::Dirt
        }
    }

    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt::io::Transcript;
    use crate::hunt::rng::ScriptedEntropy;
    use crate::hunt::terrain::TerrainKind;

    fn mk_town(kind: TerrainKind, tough: bool, protect: bool) -> Town {
        Town::with_terrain(Shop::new(0.5, false), Terrain::new(kind), tough, protect)
    }

    #[test]
    fn construction_draws_terrain_then_toughness() {
        let mut rng = ScriptedEntropy::new([0.0, 0.3]);
        let town = Town::new(Shop::new(0.5, false), 0.4, false, &mut rng);
        assert_eq!(town.terrain().kind(), TerrainKind::Mountains);
        assert!(town.is_tough());

        let mut rng = ScriptedEntropy::new([0.9, 0.4]);
        let town = Town::new(Shop::new(0.5, false), 0.4, false, &mut rng);
        assert_eq!(town.terrain().kind(), TerrainKind::Marsh);
        assert!(!town.is_tough());
        assert!(!town.searched_for_treasure());
        assert!(!town.dug_for_gold());
    }

    #[test]
    fn arrival_message_reflects_toughness() {
        let hunter = Hunter::new("Ada", 10);
        let mut rough = mk_town(TerrainKind::Ocean, true, false);
        rough.hunter_arrives(&hunter);
        assert!(rough.latest_news().starts_with("Welcome to town, ada."));
        assert!(rough.latest_news().contains("pretty rough"));
        let mut sleepy = mk_town(TerrainKind::Ocean, false, false);
        sleepy.hunter_arrives(&hunter);
        assert!(sleepy.latest_news().contains("sleepy little town"));
    }

    #[test]
    fn leave_without_tool_is_refused() {
        let mut town = mk_town(TerrainKind::Jungle, false, false);
        let mut hunter = Hunter::new("h", 10);
        hunter.buy_item("rope", 0);
        let mut rng = ScriptedEntropy::new([0.0]);
        assert!(!town.leave_town(&mut hunter, &mut rng));
        assert_eq!(hunter.kit_len(), 1);
        assert_eq!(rng.remaining(), 1);
        assert!(town.latest_news().contains("You don't have a machete"));
    }

    #[test]
    fn leave_may_break_tool() {
        let mut town = mk_town(TerrainKind::Mountains, false, false);
        let mut hunter = Hunter::new("h", 10);
        hunter.buy_item("rope", 0);
        assert!(town.leave_town(&mut hunter, &mut ScriptedEntropy::new([0.7])));
        assert!(hunter.has_item_in_kit("rope"));
        assert_eq!(town.latest_news(), "You used your rope to cross the Mountains.");

        assert!(town.leave_town(&mut hunter, &mut ScriptedEntropy::new([0.2])));
        assert!(!hunter.has_item_in_kit("rope"));
        assert!(town.latest_news().contains("you lost your rope"));
    }

    #[test]
    fn protected_items_survive_the_break_roll() {
        let mut town = mk_town(TerrainKind::Desert, false, true);
        let mut hunter = Hunter::new("h", 10);
        hunter.buy_item("water", 0);
        assert!(town.leave_town(&mut hunter, &mut ScriptedEntropy::new([0.0])));
        assert!(hunter.has_item_in_kit("water"));
        assert!(town.latest_news().contains("powerful force"));
    }

    #[test]
    fn quiet_town_finds_no_trouble() {
        let mut town = mk_town(TerrainKind::Plains, false, false);
        let mut hunter = Hunter::new("h", 10);
        let mut out = Transcript::new();
        let res = town.look_for_trouble(&mut hunter, &mut ScriptedEntropy::new([0.5]), &mut out);
        assert_eq!(res, Trouble::Quiet);
        assert_eq!(hunter.gold(), 10);
        assert_eq!(town.latest_news(), "You couldn't find any trouble");
        assert!(out.entries().is_empty());
    }

    #[test]
    fn brawl_win_and_loss_move_gold_by_stake() {
        let mut town = mk_town(TerrainKind::Plains, true, false);
        let mut hunter = Hunter::new("h", 10);
        let mut out = Transcript::new();
        // trouble, stake 5, win
        let mut rng = ScriptedEntropy::new([0.1, 0.45, 0.9]);
        assert_eq!(town.look_for_trouble(&mut hunter, &mut rng, &mut out), Trouble::Won(5));
        assert_eq!(hunter.gold(), 15);
        assert!(out.contains("You won the brawl and receive 5 gold."));
        // trouble, stake 10, lose
        let mut rng = ScriptedEntropy::new([0.66, 0.95, 0.66]);
        assert_eq!(town.look_for_trouble(&mut hunter, &mut rng, &mut out), Trouble::Lost(10));
        assert_eq!(hunter.gold(), 5);
        assert_eq!(town.latest_news(), "You're weak.");
    }

    #[test]
    fn sword_changes_only_the_story() {
        let mut town = mk_town(TerrainKind::Plains, false, false);
        let mut hunter = Hunter::new("h", 10);
        hunter.buy_item("sword", 0);
        let mut out = Transcript::new();
        let mut rng = ScriptedEntropy::new([0.1, 0.0, 0.2]);
        assert_eq!(town.look_for_trouble(&mut hunter, &mut rng, &mut out), Trouble::Lost(1));
        assert_eq!(hunter.gold(), 9);
        assert!(!out.contains("seeing your sword"));
        let mut rng = ScriptedEntropy::new([0.1, 0.0, 0.8]);
        assert_eq!(town.look_for_trouble(&mut hunter, &mut rng, &mut out), Trouble::Won(1));
        assert!(out.contains("seeing your sword"));
    }

    #[test]
    fn treasure_draw_uses_four_buckets() {
        let town = mk_town(TerrainKind::Marsh, false, false);
        let mut rng = ScriptedEntropy::new([0.1, 0.3, 0.6, 0.8]);
        let found: Vec<Treasure> = (0..4).map(|_| town.get_treasure(&mut rng)).collect();
        assert_eq!(found, Treasure::ALL.to_vec());
    }

    #[test]
    fn digging_needs_shovel_and_happens_once() {
        let mut town = mk_town(TerrainKind::Marsh, false, false);
        let mut hunter = Hunter::new("h", 10);
        let mut rng = ScriptedEntropy::new([0.1, 0.5]);
        assert_eq!(town.dig_for_gold(&mut hunter, &mut rng), DigOutcome::NoShovel);
        assert!(!town.dug_for_gold());
        hunter.buy_item("shovel", 0);
        assert_eq!(town.dig_for_gold(&mut hunter, &mut rng), DigOutcome::Struck(11));
        assert_eq!(hunter.gold(), 21);
        assert_eq!(town.dig_for_gold(&mut hunter, &mut rng), DigOutcome::AlreadyDug);
        assert_eq!(hunter.gold(), 21);
    }

    #[test]
    fn dirt_still_uses_up_the_dig() {
        let mut town = mk_town(TerrainKind::Marsh, false, false);
        let mut hunter = Hunter::new("h", 10);
        hunter.buy_item("shovel", 0);
        let mut rng = ScriptedEntropy::new([0.9]);
        assert_eq!(town.dig_for_gold(&mut hunter, &mut rng), DigOutcome::Dirt);
        assert!(town.dug_for_gold());
        assert_eq!(DigOutcome::Dirt.narration(), "You dug but only found dirt");
    }

    #[test]
    fn info_names_terrain() {
        let town = mk_town(TerrainKind::Jungle, false, false);
        assert_eq!(town.info_string(), "This nice little town is surrounded by Jungle.");
    }
}
