//! # rf-slot-core — Slot Machine Game Core
//!
//! Engine behind the ReelForge terminal slot machine: weighted reels,
//! line evaluation, a progressive jackpot and persistent player statistics.
//!
//! ## Architecture
//!
//! ```text
//! GameSession::spin(BetSpec)
//!     │
//!     ├── AccountLedger::place_bet   (debit, jackpot contribution)
//!     ├── SpinEngine::draw           (weighted draw, no replacement per reel)
//!     ├── WinEvaluator::evaluate     (full-row lines, jackpot symbol)
//!     ├── AccountLedger::settle      (credit, jackpot reset)
//!     └── GameStats::record_spin
//!           │
//!           v
//!     SpinOutcome
//! ```
//!
//! Persistence lives in [`persistence`]; the session only produces and
//! consumes [`SaveData`].

pub mod bet;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod ledger;
pub mod paytable;
pub mod persistence;
pub mod session;
pub mod stats;
pub mod symbols;

pub use bet::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use ledger::*;
pub use paytable::*;
pub use persistence::*;
pub use session::*;
pub use stats::*;
pub use symbols::*;
