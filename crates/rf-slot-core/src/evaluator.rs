//! Line evaluation

use serde::{Deserialize, Serialize};

use crate::bet::BetSpec;
use crate::engine::Grid;
use crate::paytable::PayoutTable;
use crate::stats::signed_difference;

/// A win on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    /// Line number, 1-based (line N is row N-1)
    pub line: u32,
    /// Symbol filling the line
    pub symbol_id: u32,
    /// Amount this line pays
    pub payout: u64,
    /// Line paid the progressive jackpot
    pub is_jackpot: bool,
}

/// Outcome of one spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub grid: Grid,
    /// Winning lines, ascending
    pub line_wins: Vec<LineWin>,
    pub total_winnings: u64,
    /// At least one line paid the jackpot
    pub is_jackpot: bool,
}

impl SpinOutcome {
    /// Winning line numbers, ascending
    pub fn winning_lines(&self) -> Vec<u32> {
        self.line_wins.iter().map(|w| w.line).collect()
    }

    pub fn is_win(&self) -> bool {
        self.total_winnings > 0
    }

    /// Winnings minus stake
    pub fn net_result(&self, total_bet: u64) -> i64 {
        signed_difference(self.total_winnings, total_bet)
    }
}

/// Scores grids against a payout table
pub struct WinEvaluator<'a> {
    paytable: &'a PayoutTable,
}

impl<'a> WinEvaluator<'a> {
    pub fn new(paytable: &'a PayoutTable) -> Self {
        Self { paytable }
    }

    /// Evaluate the first `bet.lines()` rows.
    ///
    /// A full line of the jackpot symbol pays `progressive_jackpot` in place of
    /// its multiplier. Several jackpot lines in one spin each pay the full pool.
    pub fn evaluate(&self, grid: &Grid, bet: &BetSpec, progressive_jackpot: u64) -> SpinOutcome {
        let lines = (bet.lines() as usize).min(grid.rows());

        let line_wins: Vec<LineWin> = (0..lines)
            .filter_map(|row| self.evaluate_line(grid, row, bet.bet_per_line(), progressive_jackpot))
            .collect();

        let total_winnings = line_wins.iter().fold(0u64, |sum, w| sum.saturating_add(w.payout));
        let is_jackpot = line_wins.iter().any(|w| w.is_jackpot);

        SpinOutcome {
            grid: grid.clone(),
            line_wins,
            total_winnings,
            is_jackpot,
        }
    }

    fn evaluate_line(
        &self,
        grid: &Grid,
        row: usize,
        bet_per_line: u64,
        progressive_jackpot: u64,
    ) -> Option<LineWin> {
        let symbols = grid.row(row);
        let first = *symbols.first()?;
        if symbols.len() != grid.reels() || symbols.iter().any(|&s| s != first) {
            return None;
        }

        let is_jackpot = self.paytable.is_jackpot(first);
        let payout = if is_jackpot {
            progressive_jackpot
        } else {
            self.paytable.multiplier_of(first).saturating_mul(bet_per_line)
        };

        Some(LineWin {
            line: row as u32 + 1,
            symbol_id: first,
            payout,
            is_jackpot,
        })
    }
}
