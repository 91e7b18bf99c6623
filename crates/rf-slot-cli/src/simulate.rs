//! Batch spin simulation

use std::io::{self, Write};

use log::info;
use rf_slot_core::{BetSpec, GameSession, Result, SaveData, SlotConfig};

/// Totals from a simulated run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationReport {
    pub spins: u64,
    pub total_bet: u64,
    pub total_won: u64,
    pub winning_spins: u64,
    pub jackpots: u64,
    pub biggest_win: u64,
    /// Winnings as a percentage of amount bet
    pub rtp: f64,
}

/// Run `spins` spins on a throw-away session funded for the whole run
pub fn run(
    config: SlotConfig,
    seed: Option<u64>,
    spins: u64,
    lines: u32,
    bet_per_line: u64,
) -> Result<SimulationReport> {
    config.validate()?;
    let bet = BetSpec::new(lines, bet_per_line, &config.bets)?;
    let funding = spins.saturating_mul(bet.total_bet());
    let save = SaveData::new(funding, config.jackpot.seed);
    let mut session = GameSession::new(config, save, seed)?;

    let mut winning_spins = 0;
    for _ in 0..spins {
        if session.spin(bet)?.is_win() {
            winning_spins += 1;
        }
    }

    let stats = *session.stats();
    info!("Simulated {} spins, RTP {:.2}%", stats.total_spins, stats.win_rate());

    Ok(SimulationReport {
        spins: stats.total_spins,
        total_bet: stats.total_bet,
        total_won: stats.total_winnings,
        winning_spins,
        jackpots: stats.jackpots_won,
        biggest_win: stats.biggest_win,
        rtp: stats.win_rate(),
    })
}

pub fn print_report(out: &mut impl Write, report: &SimulationReport) -> io::Result<()> {
    let hit_rate = if report.spins > 0 {
        report.winning_spins as f64 / report.spins as f64 * 100.0
    } else {
        0.0
    };

    writeln!(out, "Spins:        {}", report.spins)?;
    writeln!(out, "Total bet:    ${}", report.total_bet)?;
    writeln!(out, "Total won:    ${}", report.total_won)?;
    writeln!(out, "RTP:          {:.2}%", report.rtp)?;
    writeln!(out, "Hit rate:     {:.2}% ({} winning spins)", hit_rate, report.winning_spins)?;
    writeln!(out, "Jackpots:     {}", report.jackpots)?;
    writeln!(out, "Biggest win:  ${}", report.biggest_win)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_slot_core::SlotError;

    #[test]
    fn test_seeded_runs_match() {
        let a = run(SlotConfig::reference(), Some(8), 2_000, 3, 2).unwrap();
        let b = run(SlotConfig::reference(), Some(8), 2_000, 3, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.spins, 2_000);
        assert_eq!(a.total_bet, 12_000);
        assert!(a.winning_spins <= a.spins);
    }

    #[test]
    fn test_invalid_bet_rejected() {
        let err = run(SlotConfig::reference(), Some(1), 10, 4, 1).unwrap_err();
        assert!(matches!(err, SlotError::InvalidBet { lines: 4, .. }));
    }

    #[test]
    fn test_huge_bet_rejected_before_funding() {
        let err = run(SlotConfig::reference(), Some(1), 10, 3, u64::MAX).unwrap_err();
        assert!(matches!(err, SlotError::InvalidBet { bet_per_line: u64::MAX, .. }));
    }

    #[test]
    fn test_report_output() {
        let report = run(SlotConfig::reference(), Some(3), 100, 1, 1).unwrap();
        let mut buf = Vec::new();
        print_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Spins:        100"));
        assert!(text.contains("Total bet:    $100"));
    }
}
