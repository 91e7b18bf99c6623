//! Text rendering of game screens

use std::io::{self, Write};

use rf_slot_core::{GameSession, Grid, PayoutTable, SpinOutcome, SpinPreview};

fn rule(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(width))
}

fn glyph(paytable: &PayoutTable, id: u32) -> &str {
    paytable.get(id).map(|s| s.glyph.as_str()).unwrap_or("?")
}

/// Header shown above the main menu
pub fn game_info(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let stats = session.stats();
    writeln!(out)?;
    rule(out, 60)?;
    writeln!(out, "🎰 REELFORGE SLOT MACHINE 🎰")?;
    rule(out, 60)?;
    writeln!(out, "💰 Balance: ${}", session.balance())?;
    writeln!(out, "🎁 Progressive Jackpot: ${}", session.progressive_jackpot())?;
    writeln!(out, "🎯 Total Spins: {}", stats.total_spins)?;
    writeln!(out, "📊 Win Rate: {:.1}%", stats.win_rate())?;
    rule(out, 60)
}

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n🎮 MAIN MENU:")?;
    writeln!(out, "1. 🎰 Play Slot Machine")?;
    writeln!(out, "2. 💰 Deposit Funds")?;
    writeln!(out, "3. 💎 View Paytable")?;
    writeln!(out, "4. 📊 View Statistics")?;
    writeln!(out, "5. 💾 Save Game")?;
    writeln!(out, "6. 👋 Quit")
}

/// Reel grid, one printed row per line
pub fn grid(out: &mut impl Write, paytable: &PayoutTable, grid: &Grid) -> io::Result<()> {
    writeln!(out)?;
    rule(out, 50)?;
    writeln!(out, "🎰 SLOT MACHINE RESULT 🎰")?;
    rule(out, 50)?;

    for row in 0..grid.rows() {
        let cells: Vec<&str> = grid.row(row).into_iter().map(|id| glyph(paytable, id)).collect();
        writeln!(out, "   {}: {}", row + 1, cells.join(" | "))?;
    }

    rule(out, 50)
}

/// Symbols by payout, with the jackpot line
pub fn paytable(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    rule(out, 40)?;
    writeln!(out, "💎 SYMBOL PAYTABLE 💎")?;
    rule(out, 40)?;

    for entry in session.payout_table().entries_by_payout() {
        writeln!(
            out,
            "{} {:<8} = {}x bet ({})",
            entry.symbol.glyph,
            entry.symbol.name,
            entry.multiplier,
            entry.symbol.rarity().label()
        )?;
    }

    writeln!(
        out,
        "\n🎁 JACKPOT: All {} = ${}",
        session.jackpot_symbol().glyph,
        session.progressive_jackpot()
    )?;
    rule(out, 40)
}

pub fn statistics(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let stats = session.stats();
    writeln!(out)?;
    rule(out, 50)?;
    writeln!(out, "📊 PLAYER STATISTICS 📊")?;
    rule(out, 50)?;
    writeln!(out, "Total Spins: {}", stats.total_spins)?;
    writeln!(out, "Total Amount Bet: ${}", stats.total_bet)?;
    writeln!(out, "Total Winnings: ${}", stats.total_winnings)?;
    writeln!(out, "Net Profit/Loss: ${}", stats.net_profit())?;
    writeln!(out, "Biggest Single Win: ${}", stats.biggest_win)?;
    writeln!(out, "Jackpots Won: {}", stats.jackpots_won)?;
    writeln!(out, "Win Rate: {:.1}%", stats.win_rate())?;
    writeln!(out, "Sessions Played: {}", stats.sessions_played)?;
    rule(out, 50)
}

/// Bet summary shown before confirmation
pub fn spin_summary(out: &mut impl Write, preview: &SpinPreview) -> io::Result<()> {
    writeln!(out, "\n🎲 SPIN SUMMARY:")?;
    writeln!(out, "Lines: {}", preview.bet.lines())?;
    writeln!(out, "Bet per line: ${}", preview.bet.bet_per_line())?;
    writeln!(out, "Total bet: ${}", preview.total_bet)?;
    writeln!(out, "Remaining balance after bet: ${}", preview.balance_after_bet)
}

/// Win/loss report after the grid
pub fn spin_result(
    out: &mut impl Write,
    outcome: &SpinOutcome,
    total_bet: u64,
    balance: u64,
) -> io::Result<()> {
    if outcome.is_win() {
        if outcome.is_jackpot {
            writeln!(out, "\n🎉🎉🎉 JACKPOT! YOU WON ${}! 🎉🎉🎉", outcome.total_winnings)?;
        } else {
            writeln!(out, "\n🎉 You won ${}!", outcome.total_winnings)?;
        }
        let lines: Vec<String> = outcome.winning_lines().iter().map(u32::to_string).collect();
        writeln!(out, "🏆 Winning lines: {}", lines.join(", "))?;
    } else {
        writeln!(out, "\n😞 No winning combinations. Better luck next time!")?;
    }

    writeln!(out, "\n💰 New balance: ${balance}")?;
    let net = outcome.net_result(total_bet);
    match net {
        n if n > 0 => writeln!(out, "📈 Net gain this spin: +${n}"),
        n if n < 0 => writeln!(out, "📉 Net loss this spin: ${}", n.unsigned_abs()),
        _ => writeln!(out, "➡️  Broke even this spin!"),
    }
}
