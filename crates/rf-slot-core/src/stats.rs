//! Cumulative player statistics

use serde::{Deserialize, Serialize};

use crate::evaluator::SpinOutcome;

/// Lifetime counters, persisted across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub total_spins: u64,
    pub total_bet: u64,
    pub total_winnings: u64,
    pub biggest_win: u64,
    pub jackpots_won: u64,
    pub sessions_played: u64,
}

impl GameStats {
    /// Record a settled spin
    pub fn record_spin(&mut self, total_bet: u64, outcome: &SpinOutcome) {
        self.total_spins = self.total_spins.saturating_add(1);
        self.total_bet = self.total_bet.saturating_add(total_bet);
        self.total_winnings = self.total_winnings.saturating_add(outcome.total_winnings);
        self.biggest_win = self.biggest_win.max(outcome.total_winnings);
        if outcome.is_jackpot {
            self.jackpots_won = self.jackpots_won.saturating_add(1);
        }
    }

    /// Called once per process run
    pub fn record_session_start(&mut self) {
        self.sessions_played = self.sessions_played.saturating_add(1);
    }

    pub fn net_profit(&self) -> i64 {
        signed_difference(self.total_winnings, self.total_bet)
    }

    /// Winnings as a percentage of amount bet (0 before any bet)
    pub fn win_rate(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_winnings as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// `won - staked`, clamped to the `i64` range
pub(crate) fn signed_difference(won: u64, staked: u64) -> i64 {
    let diff = i128::from(won) - i128::from(staked);
    i64::try_from(diff).unwrap_or(if diff > 0 { i64::MAX } else { i64::MIN })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Grid;

    fn outcome(total_winnings: u64, is_jackpot: bool) -> SpinOutcome {
        SpinOutcome {
            grid: Grid::from_columns(vec![vec![1]]),
            line_wins: Vec::new(),
            total_winnings,
            is_jackpot,
        }
    }

    #[test]
    fn test_record_spin() {
        let mut stats = GameStats::default();
        stats.record_spin(30, &outcome(0, false));
        stats.record_spin(30, &outcome(150, false));
        stats.record_spin(10, &outcome(1000, true));

        assert_eq!(stats.total_spins, 3);
        assert_eq!(stats.total_bet, 70);
        assert_eq!(stats.total_winnings, 1150);
        assert_eq!(stats.biggest_win, 1000);
        assert_eq!(stats.jackpots_won, 1);
        assert_eq!(stats.net_profit(), 1080);
    }

    #[test]
    fn test_biggest_win_never_decreases() {
        let mut stats = GameStats::default();
        let mut last = 0;
        for win in [5, 80, 0, 20, 80, 300, 1] {
            stats.record_spin(10, &outcome(win, false));
            assert!(stats.biggest_win >= last);
            last = stats.biggest_win;
        }
        assert_eq!(stats.biggest_win, 300);
    }

    #[test]
    fn test_win_rate() {
        let mut stats = GameStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record_spin(200, &outcome(50, false));
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert_eq!(stats.net_profit(), -150);
    }

    #[test]
    fn test_extreme_totals_do_not_wrap() {
        let mut stats = GameStats {
            total_winnings: u64::MAX - 1,
            ..GameStats::default()
        };
        assert_eq!(stats.net_profit(), i64::MAX);

        stats.record_spin(5, &outcome(10, false));
        assert_eq!(stats.total_winnings, u64::MAX);

        let losing = GameStats {
            total_bet: u64::MAX,
            ..GameStats::default()
        };
        assert_eq!(losing.net_profit(), i64::MIN);
    }

    #[test]
    fn test_session_start() {
        let mut stats = GameStats::default();
        stats.record_session_start();
        stats.record_session_start();
        assert_eq!(stats.sessions_played, 2);
        assert_eq!(stats.total_spins, 0);
    }
}
