//! Error type shared by every module of the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading capabilities, configuring the
/// environment, reading fixtures or building an estimator.
#[derive(Debug, Error)]
pub enum Error {
    /// A required statistical capability could not be resolved.
    #[error("required capability `{name}` is unavailable")]
    DependencyUnavailable {
        /// Stable name of the missing capability.
        name: &'static str,
    },

    /// A configuration value was rejected during validation.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Configuration key that was rejected.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::EnvironmentConfig`].
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Malformed CSV while importing or exporting the data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure while importing or exporting the data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture table referenced a column that is not part of the course data.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// A label other than `S1` to `S5`.
    #[error("unknown sugar category `{0}` (expected S1..S5)")]
    UnknownCategory(String),

    /// A fixture column is missing values, has extra values, or skips an index.
    #[error("column `{column}` must hold {expected} values, found {found}")]
    ColumnLength {
        /// Offending column key.
        column: &'static str,
        /// Fixed length of the column.
        expected: usize,
        /// Rows present in the table.
        found: usize,
    },

    /// Bad confidence level, prior or distribution parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejects confidence levels outside the open unit interval.
pub(crate) fn check_confidence(confidence: f64) -> Result<f64> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(confidence)
    } else {
        Err(Error::InvalidParameter(format!(
            "confidence must be in (0, 1), got {confidence}"
        )))
    }
}
