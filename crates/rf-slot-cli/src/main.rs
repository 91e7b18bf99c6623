//! ReelForge Slot Machine — terminal front end
//!
//! Usage:
//!   rf-slot                          - Play (default)
//!   rf-slot paytable                 - Print the paytable
//!   rf-slot simulate --spins 100000  - Batch run, nothing is saved
//!
//! Global options: --save-file <PATH>, --seed <N>, --paytable <JSON>

mod game;
mod prompt;
mod render;
mod simulate;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rf_slot_core::{GameSession, SaveFile, SlotConfig};

use crate::game::App;
use crate::prompt::Prompter;

#[derive(Parser)]
#[command(name = "rf-slot", about = "ReelForge terminal slot machine")]
struct Cli {
    /// Save file location (defaults to the per-user data directory)
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,

    /// Seed the reels for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Machine definition (JSON) replacing the built-in paytable
    #[arg(long, global = true)]
    paytable: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play,
    /// Print the paytable and exit
    Paytable,
    /// Run many spins and report the return to player
    Simulate {
        /// Number of spins
        #[arg(short, long, default_value_t = 100_000)]
        spins: u64,
        /// Lines per spin
        #[arg(short, long, default_value_t = 3)]
        lines: u32,
        /// Bet per line
        #[arg(short, long, default_value_t = 1)]
        bet: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.paytable {
        Some(path) => SlotConfig::from_json_file(path)
            .with_context(|| format!("Invalid machine definition {}", path.display()))?,
        None => SlotConfig::reference(),
    };
    log::debug!("Machine: {} symbols, {}x{} grid", config.symbols.len(), config.grid.reels, config.grid.rows);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play(config, cli.save_file, cli.seed),
        Commands::Paytable => {
            let session = GameSession::new(config.clone(), GameSession::default_save(&config), cli.seed)?;
            render::paytable(&mut io::stdout(), &session)?;
            Ok(())
        }
        Commands::Simulate { spins, lines, bet } => {
            let report = simulate::run(config, cli.seed, spins, lines, bet)?;
            simulate::print_report(&mut io::stdout(), &report)?;
            Ok(())
        }
    }
}

fn play(config: SlotConfig, save_path: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let save_file = save_path.map(SaveFile::new).unwrap_or_else(SaveFile::at_default_path);
    let defaults = GameSession::default_save(&config);

    let save = match save_file.try_load(&defaults) {
        Ok(Some(save)) => {
            println!("✅ Previous game loaded!");
            save
        }
        Ok(None) => defaults,
        Err(e) => {
            log::warn!("Could not load {}: {}", save_file.path().display(), e);
            println!("⚠️  Warning: Could not load saved game: {e}");
            println!("Starting with default values...");
            defaults
        }
    };

    let session = GameSession::new(config, save, seed)?;
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    App::new(session, save_file, prompter).run()?;
    Ok(())
}
