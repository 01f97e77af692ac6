//! Configuration for a matchmaking domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CivmatchError, Result, constants};

/// How the greedy warm start tracks which endpoints are already used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialMatching {
    /// Sources and destinations are tracked in separate sets.
    #[default]
    SplitIndexSets,
    /// One set holds both source and destination indices, so a destination
    /// whose index equals an already used source index counts as used.
    /// Kept for replaying older simulations; improvement corrects the
    /// resulting matching either way.
    SharedIndexSet,
}

impl fmt::Display for InitialMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitIndexSets => write!(f, "split_index_sets"),
            Self::SharedIndexSet => write!(f, "shared_index_set"),
        }
    }
}

/// Configuration for one matchmaker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakerConfig {
    /// Label for logs and reports (e.g. "occupancy", "jobs").
    pub domain: String,
    /// Endpoint tracking for the greedy initial matching.
    pub initial_matching: InitialMatching,
}

impl Default for MatchmakerConfig {
    fn default() -> Self {
        Self {
            domain: constants::DEFAULT_DOMAIN.to_string(),
            initial_matching: InitialMatching::default(),
        }
    }
}

impl MatchmakerConfig {
    /// Config for a named domain with default settings.
    #[must_use]
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CivmatchError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.domain.trim().is_empty() {
            return Err(CivmatchError::Configuration(
                "domain must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
