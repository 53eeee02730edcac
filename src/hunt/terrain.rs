//! The border around a town and the tool needed to get across it.

use super::hunter::Hunter;
use super::rng::Entropy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
        TerrainKind::Marsh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
            TerrainKind::Marsh => "Marsh",
        }
    }

    /// Kit item that gets a hunter across, always lowercase.
    pub fn required_item(self) -> &'static str {
        match self {
            TerrainKind::Mountains => "rope",
            TerrainKind::Ocean => "boat",
            TerrainKind::Plains => "horse",
            TerrainKind::Desert => "water",
            TerrainKind::Jungle => "machete",
            TerrainKind::Marsh => "boots",
        }
    }
}

/// Immutable once built; each town gets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    pub fn new(kind: TerrainKind) -> Self {
        Terrain { kind }
    }

    /// Uniform pick among the six kinds.
    pub fn random(rng: &mut dyn Entropy) -> Self {
        Terrain::new(TerrainKind::ALL[rng.pick(TerrainKind::ALL.len())])
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn required_item(&self) -> &'static str {
        self.kind.required_item()
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item_in_kit(self.required_item())
    }

    pub fn info_string(&self) -> String {
        format!(
            "Beyond the town walls lies the {}. You'll need a {} to cross it.",
            self.name(),
            self.required_item()
        )
    }
}
