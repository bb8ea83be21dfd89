//! The staged constraint-relaxation ladder.
//!
//! Levels are tried strictly in order; the first one yielding any candidate
//! wins. A level a user setting forbids is skipped, not failed.

use tracing::debug;

use crate::candidate::{Candidate, CandidateQuery, ConstraintFlags};
use crate::settings::MatchSettings;

/// Relaxation levels in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// No consecutive play, no rematches.
    Strict,
    /// Consecutive play permitted; still no rematches.
    AllowConsecutive,
    /// Consecutive play and rematches permitted.
    AllowAll,
}

impl Relaxation {
    /// All levels, most constrained first.
    pub const LADDER: [Relaxation; 3] = [
        Relaxation::Strict,
        Relaxation::AllowConsecutive,
        Relaxation::AllowAll,
    ];

    /// The enumeration flags this level runs with.
    pub fn flags(self) -> ConstraintFlags {
        match self {
            Relaxation::Strict => ConstraintFlags {
                allow_consecutive: false,
                allow_repeat_history: false,
            },
            Relaxation::AllowConsecutive => ConstraintFlags {
                allow_consecutive: true,
                allow_repeat_history: false,
            },
            Relaxation::AllowAll => ConstraintFlags {
                allow_consecutive: true,
                allow_repeat_history: true,
            },
        }
    }

    /// Whether the user settings permit attempting this level.
    pub fn permitted(self, settings: &MatchSettings) -> bool {
        match self {
            Relaxation::Strict => true,
            Relaxation::AllowConsecutive => settings.allow_consecutive,
            Relaxation::AllowAll => settings.allow_repeat_history,
        }
    }

    /// Short description of what was given up, for warnings. Strict gives
    /// up nothing.
    pub fn concession(self) -> Option<&'static str> {
        match self {
            Relaxation::Strict => None,
            Relaxation::AllowConsecutive => Some("consecutive play was allowed"),
            Relaxation::AllowAll => Some("consecutive play and rematches were allowed"),
        }
    }
}

impl std::fmt::Display for Relaxation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relaxation::Strict => write!(f, "strict"),
            Relaxation::AllowConsecutive => write!(f, "allow_consecutive"),
            Relaxation::AllowAll => write!(f, "allow_all"),
        }
    }
}

/// Outcome of one generation call for one court.
#[derive(Debug, Clone)]
pub enum GenerationResult {
    /// At least one candidate survived at `level`; `candidates` is the
    /// ranked, non-empty sequence.
    Matched {
        level: Relaxation,
        candidates: Vec<Candidate>,
    },
    /// Every permitted level came up empty.
    Failed,
}

impl GenerationResult {
    /// Returns true if no permitted level produced a candidate.
    pub fn is_failed(&self) -> bool {
        matches!(self, GenerationResult::Failed)
    }
}

/// Runs the relaxation ladder over one query: each permitted level in
/// order, returning the first non-empty candidate list with its level.
pub fn generate_matches(query: &CandidateQuery<'_>, settings: &MatchSettings) -> GenerationResult {
    for level in Relaxation::LADDER {
        if !level.permitted(settings) {
            continue;
        }
        let candidates = query.enumerate(level.flags());
        debug!(
            event = "ladder_level",
            level = %level,
            candidates = candidates.len(),
        );
        if !candidates.is_empty() {
            return GenerationResult::Matched { level, candidates };
        }
    }
    GenerationResult::Failed
}
