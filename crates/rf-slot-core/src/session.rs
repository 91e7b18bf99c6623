//! Game session — one spin end to end

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::bet::BetSpec;
use crate::config::SlotConfig;
use crate::engine::{Grid, SpinEngine};
use crate::error::{ConfigError, Result, SlotError};
use crate::evaluator::{SpinOutcome, WinEvaluator};
use crate::ledger::{AccountLedger, AccountState};
use crate::paytable::{PayoutTable, PaytableEntry};
use crate::persistence::SaveData;
use crate::stats::GameStats;
use crate::symbols::Symbol;

/// Account and statistics at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub account: AccountState,
    pub stats: GameStats,
}

/// What a spin would cost, computed without touching the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinPreview {
    pub bet: BetSpec,
    pub total_bet: u64,
    pub balance_after_bet: u64,
}

/// A running game: owns the machine, the account and the statistics
pub struct GameSession {
    config: SlotConfig,
    paytable: PayoutTable,
    engine: SpinEngine,
    ledger: AccountLedger,
    stats: GameStats,
}

impl GameSession {
    /// Reference machine, fresh account, entropy-seeded reels
    pub fn new_game() -> std::result::Result<Self, ConfigError> {
        let config = SlotConfig::reference();
        let save = Self::default_save(&config);
        Self::new(config, save, None)
    }

    /// Build a session from a machine configuration and saved state
    pub fn new(
        config: SlotConfig,
        save: SaveData,
        seed: Option<u64>,
    ) -> std::result::Result<Self, ConfigError> {
        let paytable = PayoutTable::from_config(&config)?;
        let engine = SpinEngine::new(&paytable, config.grid, seed)?;
        let ledger = AccountLedger::new(
            AccountState {
                balance: save.balance,
                progressive_jackpot: save.progressive_jackpot,
            },
            config.jackpot,
        );

        Ok(Self {
            config,
            paytable,
            engine,
            ledger,
            stats: save.stats,
        })
    }

    /// Default save contents for a machine
    pub fn default_save(config: &SlotConfig) -> SaveData {
        SaveData::new(config.default_balance, config.jackpot.seed)
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Validate a bet against the machine's limits
    pub fn bet(&self, lines: u32, bet_per_line: u64) -> Result<BetSpec> {
        BetSpec::new(lines, bet_per_line, &self.config.bets)
    }

    /// Check a bet without mutating anything
    pub fn preview(&self, bet: BetSpec) -> Result<SpinPreview> {
        let bet = bet.validate(&self.config.bets)?;
        let total_bet = bet.total_bet();
        if !self.ledger.can_afford(total_bet) {
            return Err(SlotError::InsufficientFunds {
                needed: total_bet,
                available: self.ledger.balance(),
            });
        }

        Ok(SpinPreview {
            bet,
            total_bet,
            balance_after_bet: self.ledger.balance() - total_bet,
        })
    }

    /// Debit, draw, score, settle and record one spin.
    ///
    /// A bet outside this machine's limits or beyond the balance is rejected
    /// before any state changes.
    pub fn spin(&mut self, bet: BetSpec) -> Result<SpinOutcome> {
        self.play(bet, SpinEngine::draw)
    }

    fn play(&mut self, bet: BetSpec, draw: impl FnOnce(&mut SpinEngine) -> Grid) -> Result<SpinOutcome> {
        let bet = bet.validate(&self.config.bets)?;
        let total_bet = bet.total_bet();
        self.ledger.place_bet(total_bet)?;

        // Jackpot lines pay the pool including this bet's contribution
        let grid = draw(&mut self.engine);
        let outcome = WinEvaluator::new(&self.paytable).evaluate(
            &grid,
            &bet,
            self.ledger.progressive_jackpot(),
        );

        self.ledger.settle(&outcome);
        self.stats.record_spin(total_bet, &outcome);

        debug!(
            "Spin: {} line(s) x {} -> won {} on lines {:?}",
            bet.lines(),
            bet.bet_per_line(),
            outcome.total_winnings,
            outcome.winning_lines()
        );
        if outcome.is_jackpot {
            info!("JACKPOT: {} paid", outcome.total_winnings);
        }

        Ok(outcome)
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.ledger.deposit(amount)?;
        debug!("Deposited {}, balance {}", amount, self.ledger.balance());
        Ok(())
    }

    /// Count a new process run
    pub fn record_session_start(&mut self) {
        self.stats.record_session_start();
        info!("Session {} started", self.stats.sessions_played);
    }

    pub fn current_state(&self) -> SessionSnapshot {
        SessionSnapshot {
            account: self.ledger.state(),
            stats: self.stats,
        }
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn progressive_jackpot(&self) -> u64 {
        self.ledger.progressive_jackpot()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Paytable rows in configuration order
    pub fn paytable(&self) -> Vec<PaytableEntry> {
        self.paytable.entries()
    }

    pub fn payout_table(&self) -> &PayoutTable {
        &self.paytable
    }

    pub fn jackpot_symbol(&self) -> &Symbol {
        self.paytable.jackpot_symbol()
    }

    pub fn symbol(&self, id: u32) -> Option<&Symbol> {
        self.paytable.get(id)
    }

    /// State to persist
    pub fn save_data(&self) -> SaveData {
        SaveData {
            balance: self.ledger.balance(),
            progressive_jackpot: self.ledger.progressive_jackpot(),
            stats: self.stats,
        }
    }
}
