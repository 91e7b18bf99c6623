//! Payout table and weighted symbol pool

use serde::{Deserialize, Serialize};

use crate::config::SlotConfig;
use crate::error::ConfigError;
use crate::symbols::Symbol;

/// One paytable row as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub multiplier: u64,
    pub weight: u32,
    pub is_jackpot: bool,
}

/// Immutable symbol → (weight, multiplier) table
#[derive(Debug, Clone)]
pub struct PayoutTable {
    /// Symbol definitions, configuration order
    symbols: Vec<Symbol>,
    /// Each symbol ID repeated `weight` times, configuration order
    pool: Vec<u32>,
    /// Symbol that pays the progressive jackpot
    jackpot_id: u32,
    /// Position of the jackpot symbol in `symbols`
    jackpot_index: usize,
}

impl PayoutTable {
    /// Build from a validated configuration
    pub fn from_config(config: &SlotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let jackpot_id = config.jackpot.symbol_id;
        let jackpot_index = config
            .symbols
            .iter()
            .position(|s| s.id == jackpot_id)
            .ok_or(ConfigError::UnknownJackpotSymbol(jackpot_id))?;

        let pool: Vec<u32> = config
            .symbols
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.id, s.weight as usize))
            .collect();

        Ok(Self {
            symbols: config.symbols.clone(),
            pool,
            jackpot_id,
            jackpot_index,
        })
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Line multiplier for a symbol (0 if unknown)
    pub fn multiplier_of(&self, id: u32) -> u64 {
        self.get(id).map(|s| s.multiplier).unwrap_or(0)
    }

    /// The sampling universe; length equals the sum of all weights
    pub fn weighted_pool(&self) -> &[u32] {
        &self.pool
    }

    pub fn jackpot_symbol(&self) -> &Symbol {
        &self.symbols[self.jackpot_index]
    }

    pub fn is_jackpot(&self, id: u32) -> bool {
        id == self.jackpot_id
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Paytable rows in configuration order
    pub fn entries(&self) -> Vec<PaytableEntry> {
        self.symbols
            .iter()
            .map(|s| PaytableEntry {
                symbol: s.clone(),
                multiplier: s.multiplier,
                weight: s.weight,
                is_jackpot: self.is_jackpot(s.id),
            })
            .collect()
    }

    /// Paytable rows, highest multiplier first
    pub fn entries_by_payout(&self) -> Vec<PaytableEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.multiplier.cmp(&a.multiplier));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::DIAMOND_ID;

    #[test]
    fn test_pool_follows_weights_in_order() {
        let table = PayoutTable::from_config(&SlotConfig::reference()).unwrap();
        let pool = table.weighted_pool();
        assert_eq!(pool.len(), 39);
        assert_eq!(pool[0], DIAMOND_ID);
        assert_eq!(&pool[1..3], &[2, 2]);
        assert_eq!(pool.iter().filter(|&&id| id == 8).count(), 10);
        assert_eq!(*pool.last().unwrap(), 8);
    }

    #[test]
    fn test_multiplier_lookup() {
        let table = PayoutTable::from_config(&SlotConfig::reference()).unwrap();
        assert_eq!(table.multiplier_of(DIAMOND_ID), 50);
        assert_eq!(table.multiplier_of(6), 5);
        assert_eq!(table.multiplier_of(42), 0);
    }

    #[test]
    fn test_jackpot_symbol() {
        let table = PayoutTable::from_config(&SlotConfig::reference()).unwrap();
        assert_eq!(table.jackpot_symbol().name, "Diamond");
        assert!(table.is_jackpot(DIAMOND_ID));
        assert!(!table.is_jackpot(2));
    }

    #[test]
    fn test_jackpot_symbol_follows_config() {
        let mut config = SlotConfig::reference();
        config.jackpot.symbol_id = 5;
        let table = PayoutTable::from_config(&config).unwrap();
        assert_eq!(table.jackpot_symbol().id, 5);
        assert_eq!(table.jackpot_symbol().name, "Bell");
        assert!(!table.is_jackpot(DIAMOND_ID));

        config.jackpot.symbol_id = 99;
        assert!(matches!(
            PayoutTable::from_config(&config),
            Err(ConfigError::UnknownJackpotSymbol(99))
        ));
    }

    #[test]
    fn test_entries_sorted_by_payout() {
        let table = PayoutTable::from_config(&SlotConfig::reference()).unwrap();
        let entries = table.entries_by_payout();
        assert_eq!(entries.len(), 8);
        assert!(entries.windows(2).all(|w| w[0].multiplier >= w[1].multiplier));
        assert!(entries[0].is_jackpot);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SlotConfig::reference();
        config.symbols.clear();
        assert!(matches!(
            PayoutTable::from_config(&config),
            Err(ConfigError::EmptySymbolTable)
        ));
    }
}
