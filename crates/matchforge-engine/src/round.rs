//! Round planning: the two concurrent courts of one round.

use std::collections::HashSet;

use tracing::{debug, warn};

use matchforge_core::domain::{MatchKind, PlayerId, Pool, Roster, Unit, UnitLabel};

use crate::candidate::CandidateQuery;
use crate::relaxation::{generate_matches, GenerationResult, Relaxation};
use crate::session::SessionState;
use crate::settings::MatchSettings;

/// The two concurrent courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Court {
    One,
    Two,
}

impl std::fmt::Display for Court {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Court::One => write!(f, "court 1"),
            Court::Two => write!(f, "court 2"),
        }
    }
}

/// One court's assignment within a planned round.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CourtAssignment {
    pub court: Court,
    pub kind: MatchKind,
    pub side_a: Unit,
    pub side_b: Unit,

    /// The relaxation level the generator needed, or `None` for a manual
    /// selection.
    pub relaxation: Option<Relaxation>,
}

impl CourtAssignment {
    /// The players on this court.
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.side_a
            .members()
            .iter()
            .chain(self.side_b.members().iter())
    }
}

/// A validated round that has not been committed yet.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlannedRound {
    pub courts: Vec<CourtAssignment>,

    /// Players also present in the previous round (manual selections only;
    /// the generator resolves these through the relaxation ladder instead).
    /// Non-empty conflicts make the commit require an explicit force flag.
    pub recent_conflicts: Vec<PlayerId>,
}

impl PlannedRound {
    /// Courts that needed a relaxed constraint level, with the concession
    /// made for each.
    pub fn concessions(&self) -> impl Iterator<Item = (Court, &'static str)> + '_ {
        self.courts.iter().filter_map(|c| {
            c.relaxation
                .and_then(Relaxation::concession)
                .map(|text| (c.court, text))
        })
    }

    /// All players in the round.
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.courts.iter().flat_map(CourtAssignment::participants)
    }
}

/// What to do about a court that could not be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureHint {
    /// Enabling the allow-consecutive setting may unblock matching.
    EnableConsecutive,
    /// Constraints are exhausted; pick manually or change the court format.
    ManualOrReformat,
}

/// A round that could not be planned: the first court with no candidates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlanFailure {
    pub court: Court,
    pub hint: FailureHint,
}

impl std::fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.hint {
            FailureHint::EnableConsecutive => write!(
                f,
                "no pairing found for {}; enable allow-consecutive or pick manually",
                self.court
            ),
            FailureHint::ManualOrReformat => write!(
                f,
                "no pairing found for {}; pick manually or change the court format",
                self.court
            ),
        }
    }
}

/// The fixed inputs of a session's round planning: roster, the four pools,
/// and the matching settings.
#[derive(Debug)]
pub struct RoundContext<'a> {
    pub roster: &'a Roster,
    pub singles_a: &'a Pool,
    pub singles_b: &'a Pool,
    pub doubles_a: &'a Pool,
    pub doubles_b: &'a Pool,
    pub settings: MatchSettings,
}

impl RoundContext<'_> {
    /// The (team A, team B) pools serving one match kind.
    pub fn pools_for(&self, kind: MatchKind) -> (&Pool, &Pool) {
        match kind {
            MatchKind::Singles => (self.singles_a, self.singles_b),
            MatchKind::Doubles => (self.doubles_a, self.doubles_b),
        }
    }

    /// Plans both courts of the next round.
    ///
    /// Court 1 is generated first; its chosen units and players are then
    /// barred from court 2's enumeration, and its players join a transient
    /// copy of the recent set so court 2 prefers everyone else. The
    /// session's own recent set is untouched until commit.
    ///
    /// # Errors
    ///
    /// Returns the first court for which every permitted relaxation level
    /// came up empty.
    pub fn plan_round(
        &self,
        state: &SessionState,
        kinds: [MatchKind; 2],
    ) -> Result<PlannedRound, PlanFailure> {
        let mut excluded_units: HashSet<UnitLabel> = HashSet::new();
        let mut excluded_players: HashSet<PlayerId> = HashSet::new();
        let mut recent_overlay = state.recent().clone();
        let mut courts = Vec::with_capacity(2);

        for (court, kind) in [Court::One, Court::Two].into_iter().zip(kinds) {
            let (pool_a, pool_b) = self.pools_for(kind);
            let query = CandidateQuery {
                kind,
                pool_a,
                pool_b,
                ledger: state.ledger(),
                recent: &recent_overlay,
                roster: self.roster,
                tallies: state.tallies(),
                max_rank_gap: self.settings.max_rank_gap,
                excluded_units: &excluded_units,
                excluded_players: &excluded_players,
            };

            let top = match generate_matches(&query, &self.settings) {
                GenerationResult::Matched { level, candidates } => {
                    debug!(
                        event = "court_planned",
                        court = %court,
                        level = %level,
                        candidates = candidates.len(),
                    );
                    if let Some(concession) = level.concession() {
                        warn!(event = "constraints_relaxed", court = %court, %concession);
                    }
                    let Some(top) = candidates.into_iter().next() else {
                        // Matched guarantees non-empty; treat anything else
                        // as a failed court.
                        return Err(self.failure(court));
                    };
                    CourtAssignment {
                        court,
                        kind,
                        side_a: top.side_a,
                        side_b: top.side_b,
                        relaxation: Some(level),
                    }
                }
                GenerationResult::Failed => return Err(self.failure(court)),
            };

            excluded_units.insert(top.side_a.label().clone());
            excluded_units.insert(top.side_b.label().clone());
            for player in top.participants() {
                excluded_players.insert(player.clone());
                recent_overlay.insert(player.clone());
            }
            courts.push(top);
        }

        Ok(PlannedRound {
            courts,
            recent_conflicts: Vec::new(),
        })
    }

    fn failure(&self, court: Court) -> PlanFailure {
        let hint = if self.settings.allow_consecutive {
            FailureHint::ManualOrReformat
        } else {
            FailureHint::EnableConsecutive
        };
        PlanFailure { court, hint }
    }
}

#[cfg(test)]
mod tests {
    use matchforge_core::domain::Team;

    use super::*;

    struct Fixture {
        roster: Roster,
        singles_a: Pool,
        singles_b: Pool,
        doubles_a: Pool,
        doubles_b: Pool,
    }

    impl Fixture {
        fn new(per_team: usize) -> Self {
            let roster = Roster::from_team_sizes(per_team, per_team);
            Fixture {
                singles_a: Pool::singles(&roster, Team::A),
                singles_b: Pool::singles(&roster, Team::B),
                doubles_a: Pool::doubles(Team::A),
                doubles_b: Pool::doubles(Team::B),
                roster,
            }
        }

        fn context(&self, settings: MatchSettings) -> RoundContext<'_> {
            RoundContext {
                roster: &self.roster,
                singles_a: &self.singles_a,
                singles_b: &self.singles_b,
                doubles_a: &self.doubles_a,
                doubles_b: &self.doubles_b,
                settings,
            }
        }
    }

    #[test]
    fn test_courts_never_share_a_player() {
        let fixture = Fixture::new(4);
        let ctx = fixture.context(MatchSettings::default());
        let state = SessionState::new();

        let planned = ctx
            .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
            .unwrap();

        assert_eq!(planned.courts.len(), 2);
        let first: Vec<_> = planned.courts[0].participants().collect();
        assert!(planned.courts[1]
            .participants()
            .all(|p| !first.contains(&p)));
    }

    #[test]
    fn test_two_player_teams_cannot_fill_two_courts() {
        let fixture = Fixture::new(1);
        let ctx = fixture.context(MatchSettings {
            allow_consecutive: true,
            allow_repeat_history: true,
            ..Default::default()
        });
        let state = SessionState::new();

        // Court 1 takes the only pairing; court 2 has nobody left even with
        // everything relaxed, because cross-court exclusion is hard.
        let failure = ctx
            .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
            .unwrap_err();
        assert_eq!(failure.court, Court::Two);
        assert_eq!(failure.hint, FailureHint::ManualOrReformat);
    }

    #[test]
    fn test_failure_hint_points_at_consecutive_toggle() {
        let fixture = Fixture::new(1);
        let mut state = SessionState::new();
        let ctx = fixture.context(MatchSettings {
            allow_consecutive: false,
            allow_repeat_history: false,
            ..Default::default()
        });

        // Commit A1 vs B1 by hand to seed history and the recent set;
        // the next strict pass then fails court 1 outright.
        let round = PlannedRound {
            courts: vec![CourtAssignment {
                court: Court::One,
                kind: MatchKind::Singles,
                side_a: fixture.singles_a.units()[0].clone(),
                side_b: fixture.singles_b.units()[0].clone(),
                relaxation: None,
            }],
            recent_conflicts: Vec::new(),
        };
        state.commit_round(round, false).unwrap();

        let failure = ctx
            .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
            .unwrap_err();
        assert_eq!(failure.court, Court::One);
        assert_eq!(failure.hint, FailureHint::EnableConsecutive);
    }
}
