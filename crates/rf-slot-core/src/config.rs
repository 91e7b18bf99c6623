//! Slot machine configuration

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::symbols::{DIAMOND_ID, Symbol, reference_symbols};

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: u8,
    /// Number of visible rows per reel
    pub rows: u8,
}

impl GridSpec {
    /// Standard 5×3
    pub fn standard_5x3() -> Self {
        Self { reels: 5, rows: 3 }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.reels as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::standard_5x3()
    }
}

/// Betting limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLimits {
    /// Lines a player may bet on (line N is row N)
    pub max_lines: u32,
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            max_lines: 3,
            min_bet: 1,
            max_bet: 1000,
        }
    }
}

/// Progressive jackpot configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotConfig {
    /// Symbol whose full line pays the progressive pool
    pub symbol_id: u32,
    /// Pool value after a jackpot is won
    pub seed: u64,
    /// Share of every total bet added to the pool, in basis points
    pub contribution_bps: u64,
}

impl JackpotConfig {
    /// Contribution for a total bet, rounded down
    pub fn contribution(&self, total_bet: u64) -> u64 {
        total_bet.saturating_mul(self.contribution_bps) / 10_000
    }
}

impl Default for JackpotConfig {
    fn default() -> Self {
        Self {
            symbol_id: DIAMOND_ID,
            seed: 1000,
            contribution_bps: 100,
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub grid: GridSpec,
    pub bets: BetLimits,
    pub jackpot: JackpotConfig,
    /// Symbol table, in reel pool order
    pub symbols: Vec<Symbol>,
    /// Starting balance for a fresh save
    pub default_balance: u64,
    /// Largest single deposit accepted by the front end
    pub max_deposit: u64,
}

impl SlotConfig {
    /// The reference 5×3 machine with eight symbols
    pub fn reference() -> Self {
        Self {
            grid: GridSpec::standard_5x3(),
            bets: BetLimits::default(),
            jackpot: JackpotConfig::default(),
            symbols: reference_symbols(),
            default_balance: 100,
            max_deposit: 10_000,
        }
    }

    /// Load and validate a machine from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a machine from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SlotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sum of all reel weights
    pub fn pool_size(&self) -> usize {
        self.symbols.iter().map(|s| s.weight as usize).sum()
    }

    /// Check every structural constraint of the machine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptySymbolTable);
        }

        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if !seen.insert(symbol.id) {
                return Err(ConfigError::DuplicateSymbol(symbol.id));
            }
            if symbol.weight == 0 {
                return Err(ConfigError::ZeroWeight { id: symbol.id });
            }
            if symbol.multiplier == 0 {
                return Err(ConfigError::ZeroMultiplier { id: symbol.id });
            }
        }

        if !seen.contains(&self.jackpot.symbol_id) {
            return Err(ConfigError::UnknownJackpotSymbol(self.jackpot.symbol_id));
        }

        let GridSpec { reels, rows } = self.grid;
        if reels == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { reels, rows });
        }

        let pool_size = self.pool_size();
        if rows as usize > pool_size {
            return Err(ConfigError::RowsExceedPool { rows, pool_size });
        }

        if self.bets.max_lines == 0 || self.bets.max_lines > rows as u32 {
            return Err(ConfigError::InvalidMaxLines {
                max_lines: self.bets.max_lines,
                rows,
            });
        }

        if self.bets.min_bet == 0 || self.bets.min_bet > self.bets.max_bet {
            return Err(ConfigError::InvalidBetLimits {
                min_bet: self.bets.min_bet,
                max_bet: self.bets.max_bet,
            });
        }

        Ok(())
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_valid() {
        let config = SlotConfig::reference();
        assert!(config.validate().is_ok());
        assert_eq!(config.pool_size(), 39);
        assert_eq!(config.grid.total_positions(), 15);
    }

    #[test]
    fn test_contribution_rounds_down() {
        let jackpot = JackpotConfig::default();
        assert_eq!(jackpot.contribution(250), 2);
        assert_eq!(jackpot.contribution(99), 0);
        assert_eq!(jackpot.contribution(100), 1);
        assert_eq!(jackpot.contribution(3000), 30);
    }

    #[test]
    fn test_rejects_zero_weight() {
        let mut config = SlotConfig::reference();
        config.symbols[3].weight = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroWeight { id: 4 }));
    }

    #[test]
    fn test_rejects_rows_exceeding_pool() {
        let mut config = SlotConfig::reference();
        config.symbols = vec![Symbol::new(1, "A", "A", 1, 2), Symbol::new(2, "B", "B", 1, 2)];
        config.jackpot.symbol_id = 1;
        config.bets.max_lines = 2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::RowsExceedPool { rows: 3, pool_size: 2 })
        );
    }

    #[test]
    fn test_rejects_unknown_jackpot_symbol() {
        let mut config = SlotConfig::reference();
        config.jackpot.symbol_id = 99;
        assert_eq!(config.validate(), Err(ConfigError::UnknownJackpotSymbol(99)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut config = SlotConfig::reference();
        config.symbols[1].id = DIAMOND_ID;
        assert_eq!(config.validate(), Err(ConfigError::DuplicateSymbol(DIAMOND_ID)));
    }

    #[test]
    fn test_rejects_lines_beyond_rows() {
        let mut config = SlotConfig::reference();
        config.bets.max_lines = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMaxLines { max_lines: 5, rows: 3 })
        );
    }

    #[test]
    fn test_rejects_inverted_bet_limits() {
        let mut config = SlotConfig::reference();
        config.bets.min_bet = 10;
        config.bets.max_bet = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBetLimits { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_and_parse_errors() {
        let json = serde_json::to_string(&SlotConfig::reference()).unwrap();
        assert_eq!(SlotConfig::from_json(&json).unwrap(), SlotConfig::reference());
        assert!(matches!(SlotConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
