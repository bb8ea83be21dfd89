//! MatchForge Engine - Round generation for two-team court practice.
//!
//! The engine turns a roster, pools, and a session's match history into
//! court assignments:
//! - [`candidate`] enumerates and ranks every legal pairing
//! - [`relaxation`] retries enumeration through the escalating constraint
//!   ladder
//! - [`round`] plans the two concurrent courts of a round, keeping court 2
//!   from reusing court 1's participants
//! - [`manual`] validates hand-picked rounds
//! - [`session`] owns the ledger, tallies, and recent set, and commits
//!   rounds atomically

pub mod candidate;
pub mod error;
pub mod manual;
pub mod relaxation;
pub mod round;
pub mod session;
pub mod settings;

pub use candidate::{Candidate, CandidateQuery, ConstraintFlags};
pub use error::PlanError;
pub use manual::{plan_manual_round, ManualSelection};
pub use relaxation::{generate_matches, GenerationResult, Relaxation};
pub use round::{Court, CourtAssignment, FailureHint, PlanFailure, PlannedRound, RoundContext};
pub use session::{CommittedRound, SessionState};
pub use settings::MatchSettings;
