//! Shared test fixtures for MatchForge crates.
//!
//! This crate provides ready-made rosters and pools for testing. It only
//! depends on `matchforge-core` to avoid circular dependencies.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matchforge-test = { workspace = true }
//! ```

use matchforge_core::domain::{PlayerId, Pool, Roster, Team};

/// A roster plus the four pools round planning needs.
///
/// Doubles pools hold `A-pair1`/`A-pair2` and `B-pair1`/`B-pair2`, built
/// from each team's first four players, when the team is big enough.
#[derive(Debug)]
pub struct TeamsFixture {
    pub roster: Roster,
    pub singles_a: Pool,
    pub singles_b: Pool,
    pub doubles_a: Pool,
    pub doubles_b: Pool,
}

impl TeamsFixture {
    /// Builds a fixture with `per_team` players on each side.
    pub fn new(per_team: usize) -> Self {
        let roster = Roster::from_team_sizes(per_team, per_team);
        let mut doubles_a = Pool::doubles(Team::A);
        let mut doubles_b = Pool::doubles(Team::B);
        if per_team >= 4 {
            for (pool, team) in [(&mut doubles_a, "A"), (&mut doubles_b, "B")] {
                pool.add_pair(
                    format!("{team}-pair1").as_str(),
                    [
                        PlayerId::new(format!("{team}1")),
                        PlayerId::new(format!("{team}2")),
                    ],
                    &roster,
                )
                .expect("fixture pair is valid");
                pool.add_pair(
                    format!("{team}-pair2").as_str(),
                    [
                        PlayerId::new(format!("{team}3")),
                        PlayerId::new(format!("{team}4")),
                    ],
                    &roster,
                )
                .expect("fixture pair is valid");
            }
        }
        TeamsFixture {
            singles_a: Pool::singles(&roster, Team::A),
            singles_b: Pool::singles(&roster, Team::B),
            doubles_a,
            doubles_b,
            roster,
        }
    }
}
