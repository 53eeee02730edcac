//! Town shop: fixed catalog, sell-back markdown and the buy/sell dialogue.
//!
//! Every shop carries the same catalog. What differs between shops is the
//! markdown applied when buying items back from the hunter and whether the
//! samurai discount is in force. A shop keeps no customer between visits; the
//! hunter is passed into each call.

use log::debug;

use super::hunter::Hunter;
use super::io::{normalize, Input, Output, Style};
use crate::logutil::escape_input;

/// Base prices, in listing order.
pub const CATALOG: [(&str, i32); 8] = [
    ("water", 2),
    ("rope", 4),
    ("machete", 6),
    ("horse", 12),
    ("boat", 20),
    ("boots", 10),
    ("shovel", 8),
    ("sword", 0),
];

/// Only stocked in samurai mode.
pub const SWORD: &str = "sword";

/// Latest-news line once the hunter walks out, whatever happened inside.
pub const LEFT_SHOP: &str = "You left the shop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Buy,
    Sell,
}

#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
    samurai_mode: bool,
}

impl Shop {
    pub fn new(markdown: f64, samurai_mode: bool) -> Self {
        Shop {
            markdown,
            samurai_mode,
        }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// Catalog price, or `None` for things no shop has heard of.
    pub fn base_price(item: &str) -> Option<i32> {
        let item = normalize(item);
        CATALOG
            .iter()
            .find(|(name, _)| *name == item)
            .map(|(_, price)| *price)
    }

    /// Whether this shop will sell `item` at all.
    pub fn stocks(&self, item: &str) -> bool {
        let item = normalize(item);
        Shop::base_price(&item).is_some() && (item != SWORD || self.samurai_mode)
    }

    /// Samurai shops give sword owners everything for nothing.
    pub fn samurai_discount(&self, customer: &Hunter) -> bool {
        self.samurai_mode && customer.has_item_in_kit(SWORD)
    }

    /// What `customer` pays for `item`; zero when unstocked or discounted.
    pub fn buy_price(&self, item: &str, customer: &Hunter) -> i32 {
        if !self.stocks(item) || self.samurai_discount(customer) {
            return 0;
        }
        Shop::base_price(item).unwrap_or(0)
    }

    /// What the shop pays for `item`: base price times markdown, rounded down.
    pub fn sell_price(&self, item: &str) -> i32 {
        let base = Shop::base_price(item).unwrap_or(0);
        (base as f64 * self.markdown).floor() as i32
    }

    pub fn price_for(&self, item: &str, is_buying: bool, customer: &Hunter) -> i32 {
        if is_buying {
            self.buy_price(item, customer)
        } else {
            self.sell_price(item)
        }
    }

    /// Price list as shown to `customer`, one `Item: N gold` line per entry.
    pub fn inventory(&self, customer: &Hunter) -> String {
        let discount = self.samurai_discount(customer);
        CATALOG
            .iter()
            .filter(|(name, _)| self.stocks(name) && !(discount && *name == SWORD))
            .map(|(name, _)| {
                format!("{}: {} gold", capitalize(name), self.buy_price(name, customer))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run one buy or sell visit. Prompts go through `out`, replies come from
    /// `input`. Returns the line the town keeps as its latest news.
    pub fn enter(
        &self,
        hunter: &mut Hunter,
        mode: ShopMode,
        out: &mut dyn Output,
        input: &mut dyn Input,
    ) -> String {
        match mode {
            ShopMode::Buy => self.buy_dialogue(hunter, out, input),
            ShopMode::Sell => self.sell_dialogue(hunter, out, input),
        }
        LEFT_SHOP.to_string()
    }

    fn buy_dialogue(&self, hunter: &mut Hunter, out: &mut dyn Output, input: &mut dyn Input) {
        out.present(
            "Welcome to the shop! We have the finest wares in town.",
            Style::Normal,
        );
        out.present("Currently we have the following items:", Style::Normal);
        out.present(&self.inventory(hunter), Style::Normal);
        out.present("What're you lookin' to buy? ", Style::Prompt);
        let Some(line) = input.read_line() else {
            return;
        };
        let item = normalize(&line);
        if !self.stocks(&item) {
            debug!("shop: no stock for '{}'", escape_input(&item));
            out.present("We ain't got none of those.", Style::Warning);
            return;
        }
        let cost = self.buy_price(&item, hunter);
        out.present(
            &format!("It'll cost you {} gold. Buy it (y/n)? ", cost),
            Style::Prompt,
        );
        if confirmed(input) {
            self.buy_item(hunter, &item, cost, out);
        }
    }

    fn sell_dialogue(&self, hunter: &mut Hunter, out: &mut dyn Output, input: &mut dyn Input) {
        out.present("What're you lookin' to sell? ", Style::Prompt);
        out.present(
            &format!(
                "You currently have the following items: {}",
                hunter.inventory()
            ),
            Style::Normal,
        );
        let Some(line) = input.read_line() else {
            return;
        };
        let item = normalize(&line);
        let price = self.sell_price(&item);
        if price == 0 {
            out.present("We don't want none of those.", Style::Warning);
            return;
        }
        out.present(
            &format!("It'll get you {} gold. Sell it (y/n)? ", price),
            Style::Prompt,
        );
        if confirmed(input) {
            self.sell_item(hunter, &item, price, out);
        }
    }

    fn buy_item(&self, hunter: &mut Hunter, item: &str, cost: i32, out: &mut dyn Output) {
        if hunter.buy_item(item, cost) {
            debug!("shop: {} bought {} for {}", hunter.name(), item, cost);
            out.present(
                &format!("Ye' got yerself a {}. Come again soon.", item),
                Style::Success,
            );
        } else {
            out.present(
                "Hmm, either you don't have enough gold or you've already got one of those!",
                Style::Warning,
            );
        }
    }

    fn sell_item(&self, hunter: &mut Hunter, item: &str, price: i32, out: &mut dyn Output) {
        if hunter.sell_item(item, price) {
            debug!("shop: {} sold {} for {}", hunter.name(), item, price);
            out.present("Pleasure doin' business with you.", Style::Success);
        } else {
            out.present("Stop stringin' me along!", Style::Warning);
        }
    }
}

/// A `y` reply, after normalising. Exhausted input counts as no.
fn confirmed(input: &mut dyn Input) -> bool {
    input.read_line().map(|l| normalize(&l) == "y").unwrap_or(false)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
