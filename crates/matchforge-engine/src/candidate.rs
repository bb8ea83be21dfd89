//! Candidate enumeration: every legal pairing of two pools, ranked.
//!
//! Enumeration is a pure read over session state. The ranking sort is
//! stable, so runs with identical state produce identical orderings.

use std::collections::HashSet;

use tracing::trace;

use matchforge_core::domain::{MatchKind, PlayerId, Pool, Roster, Unit, UnitLabel};
use matchforge_core::ledger::Ledger;
use matchforge_core::score::BalanceScore;
use matchforge_core::tally::TallyBoard;

/// Constraint toggles for a single enumeration pass. Both default to off,
/// which is the strict level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintFlags {
    /// Accept units whose players appeared in the previous round.
    pub allow_consecutive: bool,

    /// Accept pairings already present in the ledger.
    pub allow_repeat_history: bool,
}

/// One legal pairing together with its ranking metrics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Candidate {
    pub side_a: Unit,
    pub side_b: Unit,

    /// Sum of total matches already played by everyone involved.
    pub prior_total: u32,

    /// Balance spread across the whole relevant player set if this match
    /// were played.
    pub projected_balance: BalanceScore,
}

impl Candidate {
    /// The players on both sides.
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.side_a
            .members()
            .iter()
            .chain(self.side_b.members().iter())
    }
}

/// The inputs of one enumeration pass over a (team A pool, team B pool)
/// cross product.
#[derive(Debug)]
pub struct CandidateQuery<'a> {
    pub kind: MatchKind,
    pub pool_a: &'a Pool,
    pub pool_b: &'a Pool,
    pub ledger: &'a Ledger,
    pub recent: &'a HashSet<PlayerId>,
    pub roster: &'a Roster,
    pub tallies: &'a TallyBoard,
    pub max_rank_gap: u32,

    /// Unit labels barred outright, regardless of flags.
    pub excluded_units: &'a HashSet<UnitLabel>,

    /// Players barred outright, regardless of flags. Populated with the
    /// participants already assigned to an earlier court of the round.
    pub excluded_players: &'a HashSet<PlayerId>,
}

impl CandidateQuery<'_> {
    /// Enumerates every pairing that satisfies the hard constraints under
    /// `flags`, ranked ascending by (projected balance, prior total).
    /// Returns an empty vector when nothing survives. No state is mutated.
    pub fn enumerate(&self, flags: ConstraintFlags) -> Vec<Candidate> {
        // The projected balance is computed over everyone eligible for this
        // match kind, not just the four candidates, so one match's effect on
        // the whole group is what gets minimized.
        let relevant: Vec<&PlayerId> = {
            let mut set = self.pool_a.player_set();
            set.extend(self.pool_b.player_set());
            set.into_iter().collect()
        };

        let mut candidates = Vec::new();
        for side_a in self.pool_a.units() {
            if self.is_barred(side_a) {
                continue;
            }
            if !flags.allow_consecutive && self.played_last_round(side_a) {
                continue;
            }
            for side_b in self.pool_b.units() {
                if self.is_barred(side_b) {
                    continue;
                }
                if side_a.label() == side_b.label() {
                    continue;
                }
                if !flags.allow_consecutive && self.played_last_round(side_b) {
                    continue;
                }
                if !flags.allow_repeat_history
                    && self.ledger.contains_pairing(side_a.label(), side_b.label())
                {
                    continue;
                }
                if self.kind == MatchKind::Singles && !self.rank_gap_ok(side_a, side_b) {
                    continue;
                }
                candidates.push(self.build_candidate(side_a, side_b, &relevant));
            }
        }

        // Stable sort: ties keep enumeration order.
        candidates.sort_by_key(|c| (c.projected_balance, c.prior_total));
        trace!(
            event = "enumerated",
            kind = %self.kind,
            survivors = candidates.len(),
        );
        candidates
    }

    fn is_barred(&self, unit: &Unit) -> bool {
        self.excluded_units.contains(unit.label())
            || unit
                .members()
                .iter()
                .any(|p| self.excluded_players.contains(p))
    }

    fn played_last_round(&self, unit: &Unit) -> bool {
        unit.members().iter().any(|p| self.recent.contains(p))
    }

    /// The rank gap applies to singles only and is never relaxed. Units
    /// without a roster rank never pass.
    fn rank_gap_ok(&self, side_a: &Unit, side_b: &Unit) -> bool {
        let rank_of = |unit: &Unit| {
            unit.members()
                .first()
                .and_then(|id| self.roster.rank_of(id))
        };
        match (rank_of(side_a), rank_of(side_b)) {
            (Some(a), Some(b)) => a.abs_diff(b) <= self.max_rank_gap,
            _ => false,
        }
    }

    fn build_candidate(&self, side_a: &Unit, side_b: &Unit, relevant: &[&PlayerId]) -> Candidate {
        let involved = |id: &PlayerId| side_a.contains(id) || side_b.contains(id);

        let prior_total = side_a
            .members()
            .iter()
            .chain(side_b.members())
            .map(|id| self.tallies.total_for(id))
            .sum();

        let projected_balance = BalanceScore::spread(relevant.iter().map(|id| {
            let bump = if involved(id) { 1 } else { 0 };
            self.tallies.total_for(id) + bump
        }));

        Candidate {
            side_a: side_a.clone(),
            side_b: side_b.clone(),
            prior_total,
            projected_balance,
        }
    }
}
