//! Matching constraints shared by every generation call of a session.

use matchforge_config::MatchingConfig;

/// Global matching settings: the hard rank-gap limit and the user-facing
/// toggles deciding which relaxation levels may be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    /// Maximum allowed rank difference for singles pairings. Never relaxed.
    pub max_rank_gap: u32,

    /// Permit the allow-consecutive relaxation level.
    pub allow_consecutive: bool,

    /// Permit the allow-all relaxation level (rematches).
    pub allow_repeat_history: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            max_rank_gap: 3,
            allow_consecutive: true,
            allow_repeat_history: false,
        }
    }
}

impl From<&MatchingConfig> for MatchSettings {
    fn from(config: &MatchingConfig) -> Self {
        MatchSettings {
            max_rank_gap: config.max_rank_gap,
            allow_consecutive: config.allow_consecutive,
            allow_repeat_history: config.allow_repeat_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let from_config = MatchSettings::from(&MatchingConfig::default());
        assert_eq!(from_config, MatchSettings::default());
    }
}
