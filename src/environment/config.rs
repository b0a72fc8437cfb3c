//! Session settings: defaults, TOML file, environment overrides and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Environment;
use crate::{Error, Result};

/// Seed used when none is configured.
pub const DEFAULT_SEED: i64 = 2023;
/// Replicate count used when none is configured.
pub const DEFAULT_BOOTSTRAP_REPLICATES: i64 = 1000;

/// Environment variable overriding [`EnvironmentConfig::seed`].
pub const ENV_SEED: &str = "INFERENCIA_SEED";
/// Environment variable overriding [`EnvironmentConfig::bootstrap_replicate_count`].
pub const ENV_BOOTSTRAP_REPLICATES: &str = "INFERENCIA_BOOTSTRAP_REPLICATES";

/// Raw, unvalidated session settings.
///
/// Fields are signed so that nonsensical values coming from files or callers
/// reach [`EnvironmentConfig::validate`] and get rejected there.
///
/// ```toml
/// seed = 2023
/// bootstrap_replicate_count = 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Seed for every randomized procedure of the session.
    #[serde(default = "default_seed")]
    pub seed: i64,

    /// Resamples drawn by bootstrap procedures.
    #[serde(default = "default_replicates")]
    pub bootstrap_replicate_count: i64,
}

fn default_seed() -> i64 {
    DEFAULT_SEED
}

fn default_replicates() -> i64 {
    DEFAULT_BOOTSTRAP_REPLICATES
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bootstrap_replicate_count: DEFAULT_BOOTSTRAP_REPLICATES,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }

    /// Applies [`ENV_SEED`] and [`ENV_BOOTSTRAP_REPLICATES`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    /// Values must be integers; anything else is rejected rather than coerced.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(ENV_SEED) {
            self.seed = parse_integer("seed", &raw)?;
        }
        if let Some(raw) = lookup(ENV_BOOTSTRAP_REPLICATES) {
            self.bootstrap_replicate_count = parse_integer("bootstrap_replicate_count", &raw)?;
        }
        Ok(self)
    }

    /// Checks that both values are positive integers.
    pub fn validate(&self) -> Result<Environment> {
        let seed = positive("seed", self.seed)?;
        let bootstrap_replicate_count =
            positive("bootstrap_replicate_count", self.bootstrap_replicate_count)?;
        Ok(Environment {
            seed,
            bootstrap_replicate_count: usize::try_from(bootstrap_replicate_count).map_err(|_| {
                Error::InvalidConfiguration {
                    field: "bootstrap_replicate_count",
                    reason: format!("{bootstrap_replicate_count} does not fit in usize"),
                }
            })?,
        })
    }
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| Error::InvalidConfiguration {
        field,
        reason: format!("`{raw}` is not an integer"),
    })
}

fn positive(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| Error::InvalidConfiguration {
            field,
            reason: format!("must be a positive integer, got {value}"),
        })
}
