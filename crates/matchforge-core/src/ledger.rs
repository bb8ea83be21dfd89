//! Append-only record of confirmed matches.

use crate::domain::{MatchKind, UnitLabel};

/// One confirmed match. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub round: u32,
    pub kind: MatchKind,
    pub side_a: UnitLabel,
    pub side_b: UnitLabel,
}

/// The append-only match history of a session.
///
/// Round numbers are assigned by the ledger itself and are strictly
/// increasing; all matches of one round are appended together.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    records: Vec<MatchRecord>,
    rounds: u32,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// All records in append order.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Number of committed rounds.
    #[inline]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns true if the two units have already faced each other, in
    /// either side order.
    pub fn contains_pairing(&self, a: &UnitLabel, b: &UnitLabel) -> bool {
        self.records
            .iter()
            .any(|r| (&r.side_a == a && &r.side_b == b) || (&r.side_a == b && &r.side_b == a))
    }

    /// Appends all matches of one round under the next round number and
    /// returns that number.
    pub fn append_round(
        &mut self,
        matches: impl IntoIterator<Item = (MatchKind, UnitLabel, UnitLabel)>,
    ) -> u32 {
        self.rounds += 1;
        let round = self.rounds;
        for (kind, side_a, side_b) in matches {
            self.records.push(MatchRecord {
                round,
                kind,
                side_a,
                side_b,
            });
        }
        round
    }
}
