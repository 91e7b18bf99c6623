//! Symbol definitions

use serde::{Deserialize, Serialize};

/// Rarity band, derived from reel weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Rare,
    Common,
    VeryCommon,
}

impl Rarity {
    /// Classify a reel weight (≤2 rare, ≤5 common)
    pub fn from_weight(weight: u32) -> Self {
        match weight {
            0..=2 => Rarity::Rare,
            3..=5 => Rarity::Common,
            _ => Rarity::VeryCommon,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Rare => "Rare",
            Rarity::Common => "Common",
            Rarity::VeryCommon => "Very Common",
        }
    }
}

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Symbol name (e.g., "Diamond")
    pub name: String,
    /// Glyph drawn on the reels
    pub glyph: String,
    /// Copies of this symbol on each reel
    pub weight: u32,
    /// Line payout as a multiple of the bet per line
    pub multiplier: u64,
}

impl Symbol {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        glyph: impl Into<String>,
        weight: u32,
        multiplier: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: glyph.into(),
            weight,
            multiplier,
        }
    }

    pub fn rarity(&self) -> Rarity {
        Rarity::from_weight(self.weight)
    }
}

/// Symbol ID of the Diamond in the reference set
pub const DIAMOND_ID: u32 = 1;

/// Reference eight-symbol set, rarest first (weights sum to 39)
pub fn reference_symbols() -> Vec<Symbol> {
    vec![
        Symbol::new(DIAMOND_ID, "Diamond", "💎", 1, 50),
        Symbol::new(2, "Crown", "👑", 2, 25),
        Symbol::new(3, "Cherry", "🍒", 3, 15),
        Symbol::new(4, "Lemon", "🍋", 4, 10),
        Symbol::new(5, "Bell", "🔔", 5, 8),
        Symbol::new(6, "Star", "⭐", 6, 5),
        Symbol::new(7, "Grapes", "🍇", 8, 3),
        Symbol::new(8, "Orange", "🍊", 10, 2),
    ]
}
