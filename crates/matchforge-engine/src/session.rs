//! Session state: the ledger, tallies, and recent set of one sitting.
//!
//! One value of [`SessionState`] is created when the session starts and
//! threaded through every planning call; nothing in the engine touches
//! process-global state.

use std::collections::HashSet;

use tracing::info;

use matchforge_core::domain::PlayerId;
use matchforge_core::ledger::Ledger;
use matchforge_core::tally::TallyBoard;

use crate::error::PlanError;
use crate::round::{CourtAssignment, PlannedRound};

/// A committed round, for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CommittedRound {
    pub round: u32,
    pub courts: Vec<CourtAssignment>,
}

/// Everything a session accumulates: match history, per-player and per-pair
/// counts, and who played the last round.
///
/// Tallies and the recent set are caches over the ledger; [`commit_round`]
/// is the only writer, so they cannot diverge from it.
///
/// [`commit_round`]: SessionState::commit_round
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    ledger: Ledger,
    tallies: TallyBoard,
    recent: HashSet<PlayerId>,
}

impl SessionState {
    /// A fresh session with no history.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// The match history.
    #[inline]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Per-player and per-pair counts.
    #[inline]
    pub fn tallies(&self) -> &TallyBoard {
        &self.tallies
    }

    /// Players of the most recently committed round.
    #[inline]
    pub fn recent(&self) -> &HashSet<PlayerId> {
        &self.recent
    }

    /// Number of committed rounds.
    #[inline]
    pub fn rounds(&self) -> u32 {
        self.ledger.rounds()
    }

    /// Commits a planned round: appends every court's match to the ledger
    /// under one new round number, bumps the tallies, and replaces the
    /// recent set with exactly this round's players.
    ///
    /// All-or-nothing: the conflict check runs before the first mutation,
    /// so a rejected commit leaves the session untouched. Consuming the
    /// plan by value makes committing the same plan twice unrepresentable.
    ///
    /// # Errors
    ///
    /// Rejects a round carrying recent-player conflicts unless `force` is
    /// set.
    pub fn commit_round(
        &mut self,
        planned: PlannedRound,
        force: bool,
    ) -> Result<CommittedRound, PlanError> {
        if !planned.recent_conflicts.is_empty() && !force {
            return Err(PlanError::UnacknowledgedConflict {
                players: planned.recent_conflicts,
            });
        }

        let participants: HashSet<PlayerId> =
            planned.participants().cloned().collect();

        let round = self.ledger.append_round(planned.courts.iter().map(|c| {
            (c.kind, c.side_a.label().clone(), c.side_b.label().clone())
        }));
        for court in &planned.courts {
            self.tallies
                .record_match(court.kind, &court.side_a, &court.side_b);
        }
        self.recent = participants;

        info!(
            event = "round_committed",
            round,
            matches = planned.courts.len(),
            players = self.recent.len(),
        );

        Ok(CommittedRound {
            round,
            courts: planned.courts,
        })
    }
}
