//! Rosters and per-team unit pools.

use std::collections::HashSet;

use crate::error::{CoreError, Result};

use super::{MatchKind, Player, PlayerId, Team, Unit, UnitLabel};

/// Both teams' players in rank order.
///
/// Ranks are assigned from position within the team at construction time,
/// starting at 1.
///
/// # Examples
///
/// ```
/// use matchforge_core::domain::{Roster, Team};
///
/// let roster = Roster::from_team_sizes(4, 3);
/// assert_eq!(roster.team_players(Team::A).count(), 4);
/// assert_eq!(roster.rank_of(&"B3".into()), Some(3));
/// assert_eq!(roster.rank_of(&"B4".into()), None);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster with `a_count` players on team A and `b_count` on
    /// team B, labelled `A1..An` / `B1..Bn` with ranks from position.
    pub fn from_team_sizes(a_count: usize, b_count: usize) -> Self {
        let mut players = Vec::with_capacity(a_count + b_count);
        for (team, count) in [(Team::A, a_count), (Team::B, b_count)] {
            for i in 1..=count {
                players.push(Player {
                    id: PlayerId::new(format!("{}{}", team.letter(), i)),
                    team,
                    rank: i as u32,
                });
            }
        }
        Roster { players }
    }

    /// All players, team A first, each team in rank order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The players of one team in rank order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team == team)
    }

    /// Looks up a player by id.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// The rank of a player within their team, if on the roster.
    pub fn rank_of(&self, id: &PlayerId) -> Option<u32> {
        self.player(id).map(|p| p.rank)
    }

    /// Returns true if neither team has any players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The units of one team eligible for one match kind.
///
/// Singles pools are derived from the roster; doubles pools are built by
/// registering explicitly configured pairs, which are validated against the
/// roster as they are added.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    team: Team,
    kind: MatchKind,
    units: Vec<Unit>,
}

impl Pool {
    /// The singles pool of a team: one unit per roster player.
    pub fn singles(roster: &Roster, team: Team) -> Self {
        Pool {
            team,
            kind: MatchKind::Singles,
            units: roster.team_players(team).map(Unit::singles).collect(),
        }
    }

    /// An empty doubles pool for a team.
    pub fn doubles(team: Team) -> Self {
        Pool {
            team,
            kind: MatchKind::Doubles,
            units: Vec::new(),
        }
    }

    /// Registers a doubles pair, validating it against the roster.
    ///
    /// # Errors
    ///
    /// Rejects pairs with duplicate labels, members that are not two
    /// distinct players, members missing from the roster, or members from a
    /// team other than the pool's.
    pub fn add_pair(
        &mut self,
        label: impl Into<UnitLabel>,
        members: [PlayerId; 2],
        roster: &Roster,
    ) -> Result<()> {
        let label = label.into();
        if self.units.iter().any(|u| u.label() == &label) {
            return Err(CoreError::DuplicateLabel {
                label: label.as_str().to_owned(),
            });
        }
        if members[0] == members[1] {
            return Err(CoreError::BadPairMembers {
                label: label.as_str().to_owned(),
            });
        }
        for member in &members {
            match roster.player(member) {
                None => {
                    return Err(CoreError::UnknownPlayer {
                        label: label.as_str().to_owned(),
                        player: member.as_str().to_owned(),
                    })
                }
                Some(player) if player.team != self.team => {
                    return Err(CoreError::MixedTeams {
                        label: label.as_str().to_owned(),
                    })
                }
                Some(_) => {}
            }
        }
        self.units.push(Unit::pair(label, self.team, members));
        Ok(())
    }

    /// The team this pool belongs to.
    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    /// The match kind this pool serves.
    #[inline]
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// All units in registration order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Looks up a unit by label.
    pub fn get(&self, label: &UnitLabel) -> Option<&Unit> {
        self.units.iter().find(|u| u.label() == label)
    }

    /// Returns true if the pool has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The distinct players appearing in any unit of this pool.
    pub fn player_set(&self) -> HashSet<&PlayerId> {
        self.units.iter().flat_map(|u| u.members()).collect()
    }
}
