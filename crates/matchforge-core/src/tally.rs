//! Per-player and per-pair match counts.
//!
//! Tallies are a cache over the ledger: they are maintained incrementally as
//! rounds commit, and [`TallyBoard::replay`] rebuilds the same board from
//! ledger history, which the tests use to pin the two together.

use std::collections::BTreeMap;

use crate::domain::{MatchKind, PlayerId, Unit, UnitLabel};
use crate::ledger::Ledger;
use crate::score::BalanceScore;

/// Match counts of one player, split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTally {
    pub singles: u32,
    pub doubles: u32,
}

impl PlayerTally {
    /// Total matches played across both kinds.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.singles + self.doubles
    }

    fn bump(&mut self, kind: MatchKind) {
        match kind {
            MatchKind::Singles => self.singles += 1,
            MatchKind::Doubles => self.doubles += 1,
        }
    }
}

/// Cumulative per-player and per-pair counts for a session.
///
/// Iteration order is the id order, so displays and tests are
/// deterministic.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyBoard {
    players: BTreeMap<PlayerId, PlayerTally>,
    pairs: BTreeMap<UnitLabel, u32>,
}

impl TallyBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        TallyBoard::default()
    }

    /// The tally of one player; players who have not played count zero.
    pub fn tally_for(&self, id: &PlayerId) -> PlayerTally {
        self.players.get(id).copied().unwrap_or_default()
    }

    /// Total matches of one player across both kinds.
    pub fn total_for(&self, id: &PlayerId) -> u32 {
        self.tally_for(id).total()
    }

    /// Times a doubles pair has played.
    pub fn pair_count(&self, label: &UnitLabel) -> u32 {
        self.pairs.get(label).copied().unwrap_or(0)
    }

    /// Per-player tallies in id order.
    pub fn players(&self) -> impl Iterator<Item = (&PlayerId, &PlayerTally)> {
        self.players.iter()
    }

    /// Per-pair counts in label order.
    pub fn pairs(&self) -> impl Iterator<Item = (&UnitLabel, &u32)> {
        self.pairs.iter()
    }

    /// Records one confirmed match: every member of both units is counted
    /// once in the kind's bucket, and doubles units get a pair count.
    pub fn record_match(&mut self, kind: MatchKind, side_a: &Unit, side_b: &Unit) {
        for unit in [side_a, side_b] {
            for member in unit.members() {
                self.players.entry(member.clone()).or_default().bump(kind);
            }
            if kind == MatchKind::Doubles {
                *self.pairs.entry(unit.label().clone()).or_insert(0) += 1;
            }
        }
    }

    /// The balance score of a set of players under the current counts.
    pub fn balance_spread<'a>(
        &self,
        players: impl IntoIterator<Item = &'a PlayerId>,
    ) -> BalanceScore {
        BalanceScore::spread(players.into_iter().map(|p| self.total_for(p)))
    }

    /// Rebuilds a board from ledger history, resolving unit labels through
    /// `resolve`.
    pub fn replay<'a>(ledger: &Ledger, resolve: impl Fn(&UnitLabel) -> Option<&'a Unit>) -> Self {
        let mut board = TallyBoard::new();
        for record in ledger.records() {
            if let (Some(a), Some(b)) = (resolve(&record.side_a), resolve(&record.side_b)) {
                board.record_match(record.kind, a, b);
            }
        }
        board
    }
}
