//! BalanceScore - spread of match counts across a set of players.

use std::cmp::Ordering;
use std::fmt;

/// The fairness score of a set of players: the spread between the most-played
/// and least-played player's total match count. Lower is better.
///
/// # Examples
///
/// ```
/// use matchforge_core::score::BalanceScore;
///
/// let even = BalanceScore::spread([2, 2, 2]);
/// let skewed = BalanceScore::spread([0, 3]);
///
/// assert_eq!(even, BalanceScore::ZERO);
/// assert!(even < skewed); // a smaller spread ranks first
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceScore {
    spread: u32,
}

impl BalanceScore {
    /// The perfectly balanced score.
    pub const ZERO: BalanceScore = BalanceScore { spread: 0 };

    /// Creates a score with the given spread.
    #[inline]
    pub const fn of(spread: u32) -> Self {
        BalanceScore { spread }
    }

    /// Returns the spread value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.spread
    }

    /// Returns true if every player in the scored set had the same count.
    #[inline]
    pub const fn is_balanced(&self) -> bool {
        self.spread == 0
    }

    /// Computes `max - min` over a collection of per-player totals.
    ///
    /// An empty collection scores [`BalanceScore::ZERO`]. Symmetric: the
    /// order of totals never affects the result.
    pub fn spread(totals: impl IntoIterator<Item = u32>) -> Self {
        let mut bounds: Option<(u32, u32)> = None;
        for total in totals {
            bounds = Some(match bounds {
                None => (total, total),
                Some((min, max)) => (min.min(total), max.max(total)),
            });
        }
        match bounds {
            None => BalanceScore::ZERO,
            Some((min, max)) => BalanceScore::of(max - min),
        }
    }
}

impl Ord for BalanceScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.spread.cmp(&other.spread)
    }
}

impl PartialOrd for BalanceScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BalanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BalanceScore({})", self.spread)
    }
}

impl fmt::Display for BalanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spread)
    }
}

impl From<u32> for BalanceScore {
    fn from(spread: u32) -> Self {
        BalanceScore::of(spread)
    }
}
