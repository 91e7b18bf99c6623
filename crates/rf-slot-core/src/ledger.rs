//! Balance and progressive jackpot ledger

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::JackpotConfig;
use crate::error::{Result, SlotError};
use crate::evaluator::SpinOutcome;

/// Player funds and the progressive pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub balance: u64,
    pub progressive_jackpot: u64,
}

/// Owns the account state; every mutation goes through here
#[derive(Debug, Clone)]
pub struct AccountLedger {
    state: AccountState,
    jackpot: JackpotConfig,
}

impl AccountLedger {
    pub fn new(state: AccountState, jackpot: JackpotConfig) -> Self {
        Self { state, jackpot }
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn balance(&self) -> u64 {
        self.state.balance
    }

    pub fn progressive_jackpot(&self) -> u64 {
        self.state.progressive_jackpot
    }

    pub fn can_afford(&self, total_bet: u64) -> bool {
        total_bet <= self.state.balance
    }

    /// Debit a bet and feed the jackpot pool. Rejected without mutation when unaffordable.
    pub fn place_bet(&mut self, total_bet: u64) -> Result<()> {
        if !self.can_afford(total_bet) {
            return Err(SlotError::InsufficientFunds {
                needed: total_bet,
                available: self.state.balance,
            });
        }

        let contribution = self.jackpot.contribution(total_bet);
        self.state.balance -= total_bet;
        self.state.progressive_jackpot = self.state.progressive_jackpot.saturating_add(contribution);

        debug!(
            "Bet {} placed, jackpot +{} -> {}",
            total_bet, contribution, self.state.progressive_jackpot
        );
        Ok(())
    }

    /// Credit winnings; reset the pool after a jackpot
    pub fn settle(&mut self, outcome: &SpinOutcome) {
        self.state.balance = self.state.balance.saturating_add(outcome.total_winnings);
        if outcome.is_jackpot {
            info!(
                "Jackpot paid, pool reset {} -> {}",
                self.state.progressive_jackpot, self.jackpot.seed
            );
            self.state.progressive_jackpot = self.jackpot.seed;
        }
    }

    /// Credit funds. Zero, or an amount the balance cannot hold, is rejected.
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        match self.state.balance.checked_add(amount) {
            Some(balance) if amount > 0 => {
                self.state.balance = balance;
                Ok(())
            }
            _ => Err(SlotError::InvalidDeposit { amount }),
        }
    }
}
