//! Error types for the slot core

use thiserror::Error;

/// Errors raised by game operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Requested total bet exceeds the current balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// Lines or bet per line outside the configured limits
    #[error("Invalid bet: {lines} line(s) at {bet_per_line} per line (lines 1..={max_lines}, bet {min_bet}..={max_bet})")]
    InvalidBet {
        lines: u32,
        bet_per_line: u64,
        max_lines: u32,
        min_bet: u64,
        max_bet: u64,
    },

    /// Deposit of zero, or one the balance cannot hold
    #[error("Invalid deposit amount: {amount}")]
    InvalidDeposit { amount: u64 },

    /// Machine configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid machine configuration. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Symbol table is empty")]
    EmptySymbolTable,

    #[error("Duplicate symbol id {0}")]
    DuplicateSymbol(u32),

    #[error("Symbol {id} has zero reel weight")]
    ZeroWeight { id: u32 },

    #[error("Symbol {id} has zero payout multiplier")]
    ZeroMultiplier { id: u32 },

    #[error("Grid must have at least one reel and one row (got {reels}x{rows})")]
    EmptyGrid { reels: u8, rows: u8 },

    #[error("Rows per reel ({rows}) exceed the weighted pool size ({pool_size})")]
    RowsExceedPool { rows: u8, pool_size: usize },

    #[error("Jackpot symbol {0} is not in the symbol table")]
    UnknownJackpotSymbol(u32),

    #[error("Max lines must be between 1 and the row count {rows} (got {max_lines})")]
    InvalidMaxLines { max_lines: u32, rows: u8 },

    #[error("Bet limits invalid: min {min_bet}, max {max_bet}")]
    InvalidBetLimits { min_bet: u64, max_bet: u64 },

    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Json(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

/// Save/load failure. Reported, never fatal.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for game operations
pub type Result<T> = std::result::Result<T, SlotError>;
