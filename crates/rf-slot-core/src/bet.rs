//! Bet selection

use serde::Serialize;

use crate::config::BetLimits;
use crate::error::{Result, SlotError};

/// Lines and stake for one spin. Only constructible through [`BetSpec::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BetSpec {
    lines: u32,
    bet_per_line: u64,
    total_bet: u64,
}

impl BetSpec {
    /// Validate a bet against the machine's limits
    pub fn new(lines: u32, bet_per_line: u64, limits: &BetLimits) -> Result<Self> {
        let lines_ok = (1..=limits.max_lines).contains(&lines);
        let bet_ok = (limits.min_bet..=limits.max_bet).contains(&bet_per_line);
        let total_bet = (lines as u64).checked_mul(bet_per_line);

        match total_bet {
            Some(total_bet) if lines_ok && bet_ok => Ok(Self {
                lines,
                bet_per_line,
                total_bet,
            }),
            _ => Err(SlotError::InvalidBet {
                lines,
                bet_per_line,
                max_lines: limits.max_lines,
                min_bet: limits.min_bet,
                max_bet: limits.max_bet,
            }),
        }
    }

    /// Re-check against another set of limits
    pub fn validate(&self, limits: &BetLimits) -> Result<Self> {
        Self::new(self.lines, self.bet_per_line, limits)
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn bet_per_line(&self) -> u64 {
        self.bet_per_line
    }

    pub fn total_bet(&self) -> u64 {
        self.total_bet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_bet() {
        let bet = BetSpec::new(3, 25, &BetLimits::default()).unwrap();
        assert_eq!(bet.total_bet(), 75);
    }

    #[test]
    fn test_limits_enforced() {
        let limits = BetLimits::default();
        assert!(BetSpec::new(0, 10, &limits).is_err());
        assert!(BetSpec::new(4, 10, &limits).is_err());
        assert!(BetSpec::new(1, 0, &limits).is_err());
        assert!(BetSpec::new(1, 1001, &limits).is_err());
        assert!(BetSpec::new(1, 1, &limits).is_ok());
        assert!(BetSpec::new(3, 1000, &limits).is_ok());
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let wide = BetLimits {
            max_lines: 3,
            min_bet: 1,
            max_bet: u64::MAX,
        };
        let err = BetSpec::new(3, u64::MAX / 2, &wide).unwrap_err();
        assert!(matches!(err, SlotError::InvalidBet { lines: 3, .. }));
        assert_eq!(BetSpec::new(1, u64::MAX, &wide).unwrap().total_bet(), u64::MAX);
    }

    #[test]
    fn test_validate_against_narrower_limits() {
        let wide = BetLimits {
            max_bet: 1_000_000,
            ..BetLimits::default()
        };
        let bet = BetSpec::new(3, 500_000, &wide).unwrap();
        assert!(bet.validate(&wide).is_ok());
        assert!(matches!(
            bet.validate(&BetLimits::default()),
            Err(SlotError::InvalidBet { bet_per_line: 500_000, .. })
        ));
    }

    #[test]
    fn test_invalid_bet_reports_limits() {
        let err = BetSpec::new(9, 5, &BetLimits::default()).unwrap_err();
        assert_eq!(
            err,
            SlotError::InvalidBet {
                lines: 9,
                bet_per_line: 5,
                max_lines: 3,
                min_bet: 1,
                max_bet: 1000,
            }
        );
    }
}
