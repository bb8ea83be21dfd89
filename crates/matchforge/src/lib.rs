//! MatchForge - Practice-match court assignment in Rust
//!
//! Assigns singles players and doubles pairs from two teams to two courts,
//! round after round, balancing match counts while avoiding rematches,
//! consecutive play, and rank mismatches - with a staged relaxation ladder
//! when the constraints cannot all hold.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! let roster = Roster::from_team_sizes(4, 4);
//! let singles_a = Pool::singles(&roster, Team::A);
//! let singles_b = Pool::singles(&roster, Team::B);
//! let doubles_a = Pool::doubles(Team::A);
//! let doubles_b = Pool::doubles(Team::B);
//!
//! let ctx = RoundContext {
//!     roster: &roster,
//!     singles_a: &singles_a,
//!     singles_b: &singles_b,
//!     doubles_a: &doubles_a,
//!     doubles_b: &doubles_b,
//!     settings: MatchSettings::default(),
//! };
//!
//! let mut state = SessionState::new();
//! let planned = ctx
//!     .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
//!     .expect("fresh teams always match");
//! let committed = state.commit_round(planned, false).unwrap();
//! assert_eq!(committed.round, 1);
//! ```

// Domain types
pub use matchforge_core::domain::{
    MatchKind, Player, PlayerId, Pool, Roster, Team, Unit, UnitLabel,
};
pub use matchforge_core::ledger::{Ledger, MatchRecord};
pub use matchforge_core::score::BalanceScore;
pub use matchforge_core::tally::{PlayerTally, TallyBoard};

// Engine
pub use matchforge_engine::{
    generate_matches, plan_manual_round, Candidate, CandidateQuery, CommittedRound,
    ConstraintFlags, Court, CourtAssignment, FailureHint, GenerationResult, ManualSelection,
    MatchSettings, PlanError, PlanFailure, PlannedRound, Relaxation, RoundContext, SessionState,
};

// Configuration
pub use matchforge_config::{ConfigError, SessionConfig};

pub mod prelude {
    pub use super::{
        BalanceScore, Court, MatchKind, MatchSettings, PlannedRound, PlayerId, Pool, Relaxation,
        Roster, RoundContext, SessionConfig, SessionState, Team, Unit, UnitLabel,
    };
}
