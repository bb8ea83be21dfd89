//! Planning and commit errors.
//!
//! An empty candidate list is not represented here: failing to find a match
//! is an expected outcome and travels as data
//! ([`GenerationResult::Failed`](crate::relaxation::GenerationResult) /
//! [`PlanFailure`](crate::round::PlanFailure)). These errors are the cases
//! that must block a commit.

use thiserror::Error;

use matchforge_core::domain::{MatchKind, PlayerId, Team, UnitLabel};

use crate::round::Court;

/// Errors raised while assembling or committing a round.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The same player was selected on both courts of one round.
    #[error("same player selected on both courts: {}", join_ids(.players))]
    DuplicateParticipant { players: Vec<PlayerId> },

    /// A court's entries are only partially specified.
    #[error("{court} is only partially specified")]
    IncompleteSelection { court: Court },

    /// Neither court has a complete selection.
    #[error("no court has a complete selection")]
    EmptySelection,

    /// A selection named a unit that is not in the team's pool.
    #[error("no {kind} unit '{label}' on {team}")]
    UnknownUnit {
        label: UnitLabel,
        kind: MatchKind,
        team: Team,
    },

    /// The round reuses players from the previous round and was committed
    /// without the explicit force acknowledgment.
    #[error("players from the previous round need confirmation: {}", join_ids(.players))]
    UnacknowledgedConflict { players: Vec<PlayerId> },
}

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(PlayerId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_players() {
        let err = PlanError::DuplicateParticipant {
            players: vec!["A1".into(), "B2".into()],
        };
        assert_eq!(
            err.to_string(),
            "same player selected on both courts: A1, B2"
        );
    }

    #[test]
    fn test_incomplete_selection_names_the_court() {
        let err = PlanError::IncompleteSelection { court: Court::Two };
        assert_eq!(err.to_string(), "court 2 is only partially specified");
    }
}
