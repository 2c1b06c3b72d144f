//! Configuration system for the paint shop solver.
//!
//! Load solver configuration from TOML or YAML files to pick the search
//! strategy and set limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use paintshop_config::{FeasibilityCheck, SearchOrder, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     search_order = "lexicographic"
//!     feasibility_check = "permutation"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     candidate_count_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.search_order, SearchOrder::Lexicographic);
//! assert_eq!(config.feasibility_check, FeasibilityCheck::Permutation);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use paintshop_config::SolverConfig;
//!
//! let config = SolverConfig::load("paintshop.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode controlling self-checks.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Order in which candidate finish vectors are enumerated.
    #[serde(default)]
    pub search_order: SearchOrder,

    /// How a candidate's feasibility is decided.
    #[serde(default)]
    pub feasibility_check: FeasibilityCheck,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, picked by extension.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
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
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.candidate_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "candidate_count_limit must be at least 1".to_string(),
                ));
            }
            let timed =
                termination.seconds_spent_limit.is_some() || termination.minutes_spent_limit.is_some();
            if timed && termination.time_limit().is_none() {
                return Err(ConfigError::Invalid(
                    "time limit must be at least 1 second".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the candidate enumeration order.
    pub fn with_search_order(mut self, order: SearchOrder) -> Self {
        self.search_order = order;
        self
    }

    /// Sets the feasibility check.
    pub fn with_feasibility_check(mut self, check: FeasibilityCheck) -> Self {
        self.feasibility_check = check;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the candidate count limit.
    pub fn with_candidate_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            candidate_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the candidate count limit, if configured.
    pub fn candidate_count_limit(&self) -> Option<u64> {
        self.termination
            .as_ref()
            .and_then(|t| t.candidate_count_limit)
    }
}

/// Environment mode controlling self-checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No self-checks.
    #[default]
    Production,

    /// Checks that the final assignment satisfies every customer.
    FastAssert,

    /// Also re-checks every feasibility verdict with the permutation check.
    FullAssert,
}

impl EnvironmentMode {
    pub fn is_asserted(&self) -> bool {
        !matches!(self, EnvironmentMode::Production)
    }

    pub fn is_fully_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Order in which candidate finish vectors are enumerated.
///
/// Both orders return the same assignment: the lexicographically smallest
/// among the feasible ones with the fewest matte slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    /// Ascending matte count; the first feasible candidate is optimal.
    #[default]
    MatteCount,

    /// Every vector in lexicographic order, keeping the best.
    Lexicographic,
}

/// How a candidate's feasibility is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityCheck {
    /// Augmenting-path bipartite matching.
    #[default]
    Matching,

    /// Enumerates every arrangement of free customers over open slots.
    Permutation,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of candidate vectors to evaluate.
    pub candidate_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self
            .minutes_spent_limit
            .unwrap_or(0)
            .saturating_mul(60)
            .saturating_add(self.seconds_spent_limit.unwrap_or(0));
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}
