//! Configuration system for MatchForge.
//!
//! Load session configuration from TOML or YAML files to control rosters,
//! doubles pairs, and matching constraints without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use matchforge_config::SessionConfig;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     [teams]
//!     team_a = 8
//!     team_b = 8
//!
//!     [[teams.pairs_a]]
//!     label = "A-pair1"
//!     members = ["A1", "A2"]
//!
//!     [matching]
//!     max_rank_gap = 2
//!     allow_repeat_history = true
//! "#).unwrap();
//!
//! assert_eq!(config.matching.max_rank_gap, 2);
//! assert!(config.matching.allow_consecutive); // default
//! assert_eq!(config.teams.pairs_a.len(), 1);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use matchforge_config::SessionConfig;
//!
//! let config = SessionConfig::load("session.toml").unwrap_or_default();
//! assert_eq!(config.teams.team_a, 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use matchforge_core::domain::{MatchKind, PlayerId, Pool, Roster, Team};
use matchforge_core::CoreError;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid pair configuration: {0}")]
    Pair(#[from] CoreError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main session configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    /// Roster sizes and doubles pairs.
    #[serde(default)]
    pub teams: TeamsConfig,

    /// Matching constraints and relaxation toggles.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Default match kinds for the two courts.
    #[serde(default)]
    pub courts: CourtsConfig,
}

/// Roster sizes and doubles pairs for both teams.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TeamsConfig {
    /// Number of players on team A; ids are generated as `A1..An`.
    #[serde(default = "default_team_size")]
    pub team_a: usize,

    /// Number of players on team B; ids are generated as `B1..Bn`.
    #[serde(default = "default_team_size")]
    pub team_b: usize,

    /// Team A's doubles pairs.
    #[serde(default)]
    pub pairs_a: Vec<PairConfig>,

    /// Team B's doubles pairs.
    #[serde(default)]
    pub pairs_b: Vec<PairConfig>,
}

impl Default for TeamsConfig {
    fn default() -> Self {
        TeamsConfig {
            team_a: default_team_size(),
            team_b: default_team_size(),
            pairs_a: Vec::new(),
            pairs_b: Vec::new(),
        }
    }
}

fn default_team_size() -> usize {
    8
}

/// One configured doubles pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairConfig {
    /// Display label, e.g. `A-pair1`.
    pub label: String,

    /// Exactly two player ids from the owning team.
    pub members: [String; 2],
}

/// Matching constraints and relaxation toggles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchingConfig {
    /// Maximum allowed rank difference for singles pairings.
    #[serde(default = "default_max_rank_gap")]
    pub max_rank_gap: u32,

    /// Permit players to play two rounds in a row when nothing else fits.
    #[serde(default = "default_true")]
    pub allow_consecutive: bool,

    /// Permit rematches of past pairings when nothing else fits.
    #[serde(default)]
    pub allow_repeat_history: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            max_rank_gap: default_max_rank_gap(),
            allow_consecutive: true,
            allow_repeat_history: false,
        }
    }
}

fn default_max_rank_gap() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

/// Default match kinds for the two courts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CourtsConfig {
    #[serde(default = "default_kind")]
    pub court1: MatchKind,

    #[serde(default = "default_kind")]
    pub court2: MatchKind,
}

impl Default for CourtsConfig {
    fn default() -> Self {
        CourtsConfig {
            court1: MatchKind::Singles,
            court2: MatchKind::Singles,
        }
    }
}

fn default_kind() -> MatchKind {
    MatchKind::Singles
}

impl SessionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension
    /// (`.yaml`/`.yml` parse as YAML, everything else as TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds the roster described by `[teams]`.
    pub fn build_roster(&self) -> Result<Roster, ConfigError> {
        if self.teams.team_a == 0 && self.teams.team_b == 0 {
            return Err(ConfigError::Invalid(
                "both teams are empty; set teams.team_a / teams.team_b".into(),
            ));
        }
        Ok(Roster::from_team_sizes(self.teams.team_a, self.teams.team_b))
    }

    /// Builds both teams' doubles pools, validating every configured pair
    /// against the roster.
    pub fn build_doubles_pools(&self, roster: &Roster) -> Result<(Pool, Pool), ConfigError> {
        let mut pool_a = Pool::doubles(Team::A);
        for pair in &self.teams.pairs_a {
            pool_a.add_pair(
                pair.label.as_str(),
                [
                    PlayerId::new(pair.members[0].as_str()),
                    PlayerId::new(pair.members[1].as_str()),
                ],
                roster,
            )?;
        }
        let mut pool_b = Pool::doubles(Team::B);
        for pair in &self.teams.pairs_b {
            pool_b.add_pair(
                pair.label.as_str(),
                [
                    PlayerId::new(pair.members[0].as_str()),
                    PlayerId::new(pair.members[1].as_str()),
                ],
                roster,
            )?;
        }
        Ok((pool_a, pool_b))
    }

    /// Validates the whole configuration without keeping the built values.
    ///
    /// # Errors
    ///
    /// Returns the first roster or pair problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let roster = self.build_roster()?;
        let (pool_a, pool_b) = self.build_doubles_pools(&roster)?;
        for (court, kind) in [
            ("court1", self.courts.court1),
            ("court2", self.courts.court2),
        ] {
            if kind == MatchKind::Doubles && (pool_a.is_empty() || pool_b.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "{court} defaults to doubles but both teams need configured pairs"
                )));
            }
        }
        Ok(())
    }
}
