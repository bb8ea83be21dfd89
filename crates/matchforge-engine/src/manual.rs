//! Manual round assembly.
//!
//! Manual selections bypass the generator entirely but share the planned
//! round and commit paths, so the duplicate-participant and recent-player
//! checks still apply. Recent-player reuse is a warning carried on the
//! planned round, not a hard error; the commit then demands an explicit
//! force acknowledgment.

use std::collections::HashSet;

use matchforge_core::domain::{MatchKind, PlayerId, Unit, UnitLabel};

use crate::error::PlanError;
use crate::round::{Court, CourtAssignment, PlannedRound, RoundContext};
use crate::session::SessionState;

/// One court's hand-picked entries. Leave both sides `None` to leave the
/// court empty this round.
#[derive(Debug, Clone)]
pub struct ManualSelection {
    pub kind: MatchKind,
    pub side_a: Option<UnitLabel>,
    pub side_b: Option<UnitLabel>,
}

/// Assembles a manual round from per-court selections.
///
/// # Errors
///
/// - [`PlanError::IncompleteSelection`] if a court names only one side
/// - [`PlanError::EmptySelection`] if no court is fully specified
/// - [`PlanError::UnknownUnit`] for labels missing from the pools
/// - [`PlanError::DuplicateParticipant`] if the courts share a player
pub fn plan_manual_round(
    ctx: &RoundContext<'_>,
    state: &SessionState,
    selections: [Option<ManualSelection>; 2],
) -> Result<PlannedRound, PlanError> {
    let mut courts = Vec::new();

    for (court, selection) in [Court::One, Court::Two].into_iter().zip(selections) {
        let Some(selection) = selection else {
            continue;
        };
        match (selection.side_a, selection.side_b) {
            (Some(label_a), Some(label_b)) => {
                let side_a = resolve(ctx, selection.kind, &label_a, Side::A)?;
                let side_b = resolve(ctx, selection.kind, &label_b, Side::B)?;
                courts.push(CourtAssignment {
                    court,
                    kind: selection.kind,
                    side_a,
                    side_b,
                    relaxation: None,
                });
            }
            (None, None) => continue,
            _ => return Err(PlanError::IncompleteSelection { court }),
        }
    }

    if courts.is_empty() {
        return Err(PlanError::EmptySelection);
    }

    if courts.len() == 2 {
        let first: HashSet<&PlayerId> = courts[0].participants().collect();
        let mut duplicates: Vec<PlayerId> = courts[1]
            .participants()
            .filter(|p| first.contains(p))
            .cloned()
            .collect();
        if !duplicates.is_empty() {
            duplicates.sort();
            return Err(PlanError::DuplicateParticipant {
                players: duplicates,
            });
        }
    }

    let mut recent_conflicts: Vec<PlayerId> = courts
        .iter()
        .flat_map(CourtAssignment::participants)
        .filter(|p| state.recent().contains(*p))
        .cloned()
        .collect();
    recent_conflicts.sort();
    recent_conflicts.dedup();

    Ok(PlannedRound {
        courts,
        recent_conflicts,
    })
}

enum Side {
    A,
    B,
}

fn resolve(
    ctx: &RoundContext<'_>,
    kind: MatchKind,
    label: &UnitLabel,
    side: Side,
) -> Result<Unit, PlanError> {
    let (pool_a, pool_b) = ctx.pools_for(kind);
    let pool = match side {
        Side::A => pool_a,
        Side::B => pool_b,
    };
    pool.get(label)
        .cloned()
        .ok_or_else(|| PlanError::UnknownUnit {
            label: label.clone(),
            kind,
            team: pool.team(),
        })
}

#[cfg(test)]
mod tests {
    use matchforge_core::domain::{Pool, Roster, Team};

    use super::*;
    use crate::settings::MatchSettings;

    struct Fixture {
        roster: Roster,
        singles_a: Pool,
        singles_b: Pool,
        doubles_a: Pool,
        doubles_b: Pool,
    }

    impl Fixture {
        fn new() -> Self {
            let roster = Roster::from_team_sizes(4, 4);
            let mut doubles_a = Pool::doubles(Team::A);
            doubles_a
                .add_pair("A-pair1", ["A1".into(), "A2".into()], &roster)
                .unwrap();
            let mut doubles_b = Pool::doubles(Team::B);
            doubles_b
                .add_pair("B-pair1", ["B1".into(), "B2".into()], &roster)
                .unwrap();
            Fixture {
                singles_a: Pool::singles(&roster, Team::A),
                singles_b: Pool::singles(&roster, Team::B),
                doubles_a,
                doubles_b,
                roster,
            }
        }

        fn context(&self) -> RoundContext<'_> {
            RoundContext {
                roster: &self.roster,
                singles_a: &self.singles_a,
                singles_b: &self.singles_b,
                doubles_a: &self.doubles_a,
                doubles_b: &self.doubles_b,
                settings: MatchSettings::default(),
            }
        }
    }

    fn singles(a: &str, b: &str) -> Option<ManualSelection> {
        Some(ManualSelection {
            kind: MatchKind::Singles,
            side_a: Some(a.into()),
            side_b: Some(b.into()),
        })
    }

    #[test]
    fn test_two_manual_courts() {
        let fixture = Fixture::new();
        let state = SessionState::new();

        let doubles = Some(ManualSelection {
            kind: MatchKind::Doubles,
            side_a: Some("A-pair1".into()),
            side_b: Some("B-pair1".into()),
        });
        let planned = plan_manual_round(
            &fixture.context(),
            &state,
            [singles("A3", "B3"), doubles],
        )
        .unwrap();

        assert_eq!(planned.courts.len(), 2);
        assert!(planned.recent_conflicts.is_empty());
        assert_eq!(planned.courts[1].kind, MatchKind::Doubles);
    }

    #[test]
    fn test_duplicate_player_across_courts_is_rejected() {
        let fixture = Fixture::new();
        let state = SessionState::new();

        // A1 plays singles on court 1 and doubles (inside A-pair1) on court 2.
        let doubles = Some(ManualSelection {
            kind: MatchKind::Doubles,
            side_a: Some("A-pair1".into()),
            side_b: Some("B-pair1".into()),
        });
        let err = plan_manual_round(
            &fixture.context(),
            &state,
            [singles("A1", "B3"), doubles],
        )
        .unwrap_err();

        match err {
            PlanError::DuplicateParticipant { players } => {
                assert_eq!(players, vec![PlayerId::new("A1")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_half_specified_court_is_incomplete() {
        let fixture = Fixture::new();
        let state = SessionState::new();

        let half = Some(ManualSelection {
            kind: MatchKind::Singles,
            side_a: Some("A1".into()),
            side_b: None,
        });
        let err = plan_manual_round(&fixture.context(), &state, [half, None]).unwrap_err();
        assert!(matches!(
            err,
            PlanError::IncompleteSelection { court: Court::One }
        ));
    }

    #[test]
    fn test_no_selection_at_all_is_empty() {
        let fixture = Fixture::new();
        let state = SessionState::new();

        let err = plan_manual_round(&fixture.context(), &state, [None, None]).unwrap_err();
        assert!(matches!(err, PlanError::EmptySelection));
    }

    #[test]
    fn test_unknown_label_is_reported_with_team() {
        let fixture = Fixture::new();
        let state = SessionState::new();

        let err = plan_manual_round(
            &fixture.context(),
            &state,
            [singles("A9", "B1"), None],
        )
        .unwrap_err();
        match err {
            PlanError::UnknownUnit { label, team, .. } => {
                assert_eq!(label.as_str(), "A9");
                assert_eq!(team, Team::A);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_recent_reuse_is_a_conflict_not_an_error() {
        let fixture = Fixture::new();
        let mut state = SessionState::new();

        let first = plan_manual_round(
            &fixture.context(),
            &state,
            [singles("A1", "B1"), None],
        )
        .unwrap();
        state.commit_round(first, false).unwrap();

        let rematch = plan_manual_round(
            &fixture.context(),
            &state,
            [singles("A1", "B2"), None],
        )
        .unwrap();
        assert_eq!(rematch.recent_conflicts, vec![PlayerId::new("A1")]);

        // Unforced commit refuses; forced commit goes through.
        let err = state.commit_round(rematch.clone(), false).unwrap_err();
        assert!(matches!(err, PlanError::UnacknowledgedConflict { .. }));
        state.commit_round(rematch, true).unwrap();
        assert_eq!(state.rounds(), 2);
    }
}
