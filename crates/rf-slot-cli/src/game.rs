//! Interactive menu loop

use std::io::{self, BufRead, Write};

use log::warn;
use rf_slot_core::{GameSession, SaveFile, SlotError};

use crate::prompt::Prompter;
use crate::render;

/// Outer loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    Playing,
    Quit,
}

/// Terminal front end around a [`GameSession`]
pub struct App<R, W> {
    session: GameSession,
    save_file: SaveFile,
    prompter: Prompter<R, W>,
    state: MenuState,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(session: GameSession, save_file: SaveFile, prompter: Prompter<R, W>) -> Self {
        Self {
            session,
            save_file,
            prompter,
            state: MenuState::Menu,
        }
    }

    /// Run until the player quits or input ends, then save
    pub fn run(&mut self) -> io::Result<()> {
        let out = self.prompter.output();
        writeln!(out, "🎰 Welcome to the ReelForge Slot Machine! 🎰")?;
        writeln!(out, "Type 'q' at any prompt to quit")?;

        self.session.record_session_start();

        let result = self.main_loop();

        self.save()?;
        self.farewell()?;
        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.state != MenuState::Quit {
            self.state = match self.state {
                MenuState::Menu => self.main_menu()?,
                MenuState::Playing => self.playing()?,
                MenuState::Quit => MenuState::Quit,
            };
        }
        Ok(())
    }

    fn main_menu(&mut self) -> io::Result<MenuState> {
        render::game_info(self.prompter.output(), &self.session)?;
        render::main_menu(self.prompter.output())?;

        let Some(choice) = self.prompter.integer("\nSelect option (1-6): ", 1, 6, false)? else {
            return Ok(MenuState::Quit);
        };

        match choice {
            1 => return Ok(MenuState::Playing),
            2 => self.deposit()?,
            3 => {
                render::paytable(self.prompter.output(), &self.session)?;
                self.prompter.pause()?;
            }
            4 => {
                render::statistics(self.prompter.output(), &self.session)?;
                self.prompter.pause()?;
            }
            5 => self.save()?,
            _ => return Ok(MenuState::Quit),
        }
        Ok(MenuState::Menu)
    }

    fn playing(&mut self) -> io::Result<MenuState> {
        if !self.play_single_spin()? {
            return Ok(MenuState::Quit);
        }

        if self.session.balance() == 0 {
            writeln!(self.prompter.output(), "💸 You're out of money!")?;
            return Ok(MenuState::Menu);
        }

        if self.prompter.yes_no("\nPlay another spin?")? {
            Ok(MenuState::Playing)
        } else {
            Ok(MenuState::Menu)
        }
    }

    fn deposit(&mut self) -> io::Result<()> {
        let max = self.session.config().max_deposit;
        let out = self.prompter.output();
        writeln!(out, "\n💰 DEPOSIT FUNDS 💰")?;
        writeln!(out, "Current balance: ${}", self.session.balance())?;

        let prompt = "Enter deposit amount (or 'q' to cancel): $";
        if let Some(amount) = self.prompter.integer(prompt, 1, max, true)? {
            match self.session.deposit(amount) {
                Ok(()) => writeln!(
                    self.prompter.output(),
                    "✅ Deposited ${}! New balance: ${}",
                    amount,
                    self.session.balance()
                )?,
                Err(e) => writeln!(self.prompter.output(), "❌ {e}")?,
            }
        }
        Ok(())
    }

    /// One spin attempt. `false` means the player asked to quit.
    fn play_single_spin(&mut self) -> io::Result<bool> {
        if self.session.balance() == 0 {
            writeln!(
                self.prompter.output(),
                "💸 You're out of money! Please deposit more funds."
            )?;
            return Ok(true);
        }

        let limits = self.session.config().bets;

        writeln!(self.prompter.output(), "\n📏 SELECT BETTING LINES (1-{}) 📏", limits.max_lines)?;
        writeln!(self.prompter.output(), "More lines = more chances to win, but higher total bet!")?;
        let prompt = format!("Number of lines to bet on (1-{}): ", limits.max_lines);
        let Some(lines) = self.prompter.integer(&prompt, 1, limits.max_lines as u64, true)? else {
            return Ok(false);
        };

        writeln!(
            self.prompter.output(),
            "\n💵 SET BET PER LINE (${}-${}) 💵",
            limits.min_bet, limits.max_bet
        )?;
        let prompt = format!("Bet per line (${}-${}): $", limits.min_bet, limits.max_bet);
        let Some(bet_per_line) = self.prompter.integer(&prompt, limits.min_bet, limits.max_bet, true)? else {
            return Ok(false);
        };

        let preview = match self
            .session
            .bet(lines as u32, bet_per_line)
            .and_then(|bet| self.session.preview(bet))
        {
            Ok(preview) => preview,
            Err(SlotError::InsufficientFunds { needed, available }) => {
                let out = self.prompter.output();
                writeln!(out, "❌ Insufficient funds! You need ${needed} but only have ${available}")?;
                writeln!(out, "💡 Try betting on fewer lines or reducing your bet per line.")?;
                return Ok(true);
            }
            Err(e) => {
                writeln!(self.prompter.output(), "❌ {e}")?;
                return Ok(true);
            }
        };

        render::spin_summary(self.prompter.output(), &preview)?;
        if !self.prompter.yes_no("Confirm this spin?")? {
            writeln!(self.prompter.output(), "Spin cancelled.")?;
            return Ok(true);
        }

        writeln!(self.prompter.output(), "\n🎰 Spinning...")?;
        let outcome = match self.session.spin(preview.bet) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.prompter.output(), "❌ {e}")?;
                return Ok(true);
            }
        };

        render::grid(self.prompter.output(), self.session.payout_table(), &outcome.grid)?;
        render::spin_result(
            self.prompter.output(),
            &outcome,
            preview.total_bet,
            self.session.balance(),
        )?;
        Ok(true)
    }

    /// Write the save file; failures are reported and play continues
    fn save(&mut self) -> io::Result<()> {
        match self.save_file.save(&self.session.save_data()) {
            Ok(()) => writeln!(self.prompter.output(), "✅ Game saved successfully!"),
            Err(e) => {
                warn!("Save to {} failed: {}", self.save_file.path().display(), e);
                writeln!(self.prompter.output(), "⚠️  Warning: Could not save game: {e}")
            }
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        let balance = self.session.balance();
        let stats = *self.session.stats();
        let out = self.prompter.output();

        writeln!(out, "\n👋 Thanks for playing!")?;
        writeln!(out, "💰 Final balance: ${balance}")?;
        if stats.total_spins > 0 {
            writeln!(out, "📊 You played {} spins", stats.total_spins)?;
            writeln!(out, "🎯 Net result: ${}", stats.net_profit())?;
        }
        Ok(())
    }
}
