//! Error types for MatchForge domain construction.

use thiserror::Error;

/// Main error type for domain model construction.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A doubles pair did not have exactly two distinct members.
    #[error("pair '{label}' must have exactly two distinct members")]
    BadPairMembers { label: String },

    /// A unit referenced a player that is not on the roster.
    #[error("unit '{label}' references unknown player '{player}'")]
    UnknownPlayer { label: String, player: String },

    /// A doubles pair mixed players from different teams.
    #[error("pair '{label}' mixes players from different teams")]
    MixedTeams { label: String },

    /// A unit label was registered twice in the same pool.
    #[error("duplicate unit label '{label}'")]
    DuplicateLabel { label: String },
}

/// Result type alias for domain construction.
pub type Result<T> = std::result::Result<T, CoreError>;
