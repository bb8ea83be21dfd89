//! MatchForge Core - Domain types for two-team court assignment
//!
//! This crate provides the fundamental types shared across MatchForge:
//! - Teams, players, and the units (singles entries or doubles pairs) that
//!   occupy one side of a match
//! - The append-only match ledger
//! - Per-player and per-pair tally bookkeeping
//! - The balance score used to rank candidate matches

pub mod domain;
pub mod error;
pub mod ledger;
pub mod score;
pub mod tally;

pub use domain::{MatchKind, Player, PlayerId, Pool, Roster, Team, Unit, UnitLabel};
pub use error::CoreError;
pub use ledger::{Ledger, MatchRecord};
pub use score::BalanceScore;
pub use tally::{PlayerTally, TallyBoard};
