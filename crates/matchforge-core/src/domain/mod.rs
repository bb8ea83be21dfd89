//! Domain model: teams, players, and the units that occupy a court side.

mod roster;

pub use roster::{Pool, Roster};

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// One of the two sides of the practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Single-letter label used in generated player ids.
    pub const fn letter(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.letter())
    }
}

/// Match format of one court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchKind {
    Singles,
    Doubles,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Singles => write!(f, "singles"),
            MatchKind::Doubles => write!(f, "doubles"),
        }
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singles" => Ok(MatchKind::Singles),
            "doubles" => Ok(MatchKind::Doubles),
            other => Err(format!("unknown match kind '{other}'")),
        }
    }
}

/// Identifier of a single player, e.g. `A3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new player id.
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId::new(id)
    }
}

/// A roster member.
///
/// `rank` is an explicit 1-based strength ordering within the player's team;
/// the id is a display label only and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    pub rank: u32,
}

/// Label naming a unit, e.g. `A3` for a singles entry or `A-pair1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitLabel(String);

impl UnitLabel {
    /// Creates a new unit label.
    pub fn new(label: impl Into<String>) -> Self {
        UnitLabel(label.into())
    }

    /// Returns the label as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitLabel {
    fn from(label: &str) -> Self {
        UnitLabel::new(label)
    }
}

/// The atomic object occupying one side of a match: either a singles entry
/// (one player) or a doubles pair (two players from the same team).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    label: UnitLabel,
    team: Team,
    kind: MatchKind,
    members: SmallVec<[PlayerId; 2]>,
}

impl Unit {
    /// Creates the singles unit for one player; the unit label is the
    /// player's id.
    pub fn singles(player: &Player) -> Self {
        Unit {
            label: UnitLabel::new(player.id.as_str()),
            team: player.team,
            kind: MatchKind::Singles,
            members: SmallVec::from_iter(std::iter::once(player.id.clone())),
        }
    }

    /// Creates a doubles pair. Membership validation happens when the pair
    /// is registered in a [`Pool`].
    pub fn pair(label: impl Into<UnitLabel>, team: Team, members: [PlayerId; 2]) -> Self {
        Unit {
            label: label.into(),
            team,
            kind: MatchKind::Doubles,
            members: SmallVec::from_iter(members),
        }
    }

    /// The unit's label.
    #[inline]
    pub fn label(&self) -> &UnitLabel {
        &self.label
    }

    /// The team this unit plays for.
    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    /// The match kind this unit is eligible for.
    #[inline]
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// The players making up this unit.
    #[inline]
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    /// Returns true if the given player is part of this unit.
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.members.iter().any(|m| m == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_kind_parses() {
        assert_eq!("singles".parse::<MatchKind>().unwrap(), MatchKind::Singles);
        assert_eq!(" Doubles ".parse::<MatchKind>().unwrap(), MatchKind::Doubles);
        assert!("triples".parse::<MatchKind>().is_err());
    }

    #[test]
    fn test_singles_unit_wraps_player() {
        let player = Player {
            id: PlayerId::new("A2"),
            team: Team::A,
            rank: 2,
        };
        let unit = Unit::singles(&player);
        assert_eq!(unit.label().as_str(), "A2");
        assert_eq!(unit.kind(), MatchKind::Singles);
        assert_eq!(unit.members(), [PlayerId::new("A2")]);
    }

    #[test]
    fn test_pair_unit_membership() {
        let unit = Unit::pair(
            "B-pair1",
            Team::B,
            [PlayerId::new("B1"), PlayerId::new("B4")],
        );
        assert!(unit.contains(&PlayerId::new("B4")));
        assert!(!unit.contains(&PlayerId::new("B2")));
    }
}
