//! The player character: gold, kit and collected treasures.

use std::collections::BTreeSet;
use std::fmt;

use super::io::normalize;

/// Something a town can yield when the hunter searches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    /// Found often, worth nothing, never collected.
    Dust,
}

impl Treasure {
    /// Draw order for a town search; each bucket is equally likely.
    pub const ALL: [Treasure; 4] = [
        Treasure::Crown,
        Treasure::Trophy,
        Treasure::Gem,
        Treasure::Dust,
    ];

    /// The three treasures that win the game.
    pub const COLLECTIBLE: [Treasure; 3] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem];

    pub fn name(self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
            Treasure::Dust => "dust",
        }
    }

    pub fn is_collectible(self) -> bool {
        self != Treasure::Dust
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: BTreeSet<String>,
    treasures: BTreeSet<Treasure>,
}

impl Hunter {
    /// New hunter with an empty kit. The name is trimmed and lowercased.
    pub fn new(name: &str, starting_gold: i32) -> Self {
        Hunter {
            name: normalize(name),
            gold: starting_gold,
            kit: BTreeSet::new(),
            treasures: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Owned items in name order.
    pub fn kit(&self) -> impl Iterator<Item = &str> {
        self.kit.iter().map(String::as_str)
    }

    pub fn kit_len(&self) -> usize {
        self.kit.len()
    }

    pub fn treasures(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.treasures.iter().copied()
    }

    /// Pay `cost` for `item`. Refused, with nothing changed, when the hunter
    /// cannot afford it or already owns one.
    pub fn buy_item(&mut self, item: &str, cost: i32) -> bool {
        let item = normalize(item);
        if cost > self.gold || self.kit.contains(&item) {
            return false;
        }
        self.gold = self.gold.saturating_sub(cost);
        self.kit.insert(item);
        true
    }

    /// Hand over `item` for `price` gold. Refused when it is not in the kit.
    pub fn sell_item(&mut self, item: &str, price: i32) -> bool {
        if !self.remove_item_from_kit(item) {
            return false;
        }
        self.gold = self.gold.saturating_add(price);
        true
    }

    /// Adjust gold by `delta`, clamping at the `i32` bounds. Brawl losses may
    /// push the balance below zero.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    /// Drop `item` from the kit, reporting whether it was there.
    pub fn remove_item_from_kit(&mut self, item: &str) -> bool {
        self.kit.remove(&normalize(item))
    }

    pub fn has_item_in_kit(&self, item: &str) -> bool {
        self.kit.contains(&normalize(item))
    }

    pub fn has_item_in_treasure_list(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Record a treasure. Adding one twice is harmless.
    pub fn add_treasure(&mut self, treasure: Treasure) {
        self.treasures.insert(treasure);
    }

    pub fn has_all_treasures(&self) -> bool {
        Treasure::COLLECTIBLE
            .iter()
            .all(|t| self.treasures.contains(t))
    }

    /// Kit contents for listings, e.g. `rope, water` or `nothing`.
    pub fn inventory(&self) -> String {
        if self.kit.is_empty() {
            "nothing".to_string()
        } else {
            self.kit().collect::<Vec<_>>().join(", ")
        }
    }

    /// Status block shown every turn.
    pub fn info_string(&self) -> String {
        let mut s = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            s.push_str(&format!(" and a kit of: {}", self.inventory()));
        }
        s.push('.');
        if !self.treasures.is_empty() {
            let found: Vec<&str> = self.treasures.iter().map(|t| t.name()).collect();
            s.push_str(&format!("\nTreasures found: {}.", found.join(", ")));
        }
        s
    }
}
