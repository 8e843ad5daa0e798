//! Error types for the matside_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for matside_core operations
///
/// Every variant is fatal to a run: the roster is rejected before any
/// matching happens and no result file is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A roster row is too short for the configured column layout
    #[error("Line {line}: missing {column} column (index {index})")]
    MissingColumn {
        line: usize,
        column: &'static str,
        index: usize,
    },

    /// Weight field is not numeric even after stripping units
    #[error("Line {line}: malformed weight {value:?}")]
    MalformedWeight { line: usize, value: String },

    /// Skill label outside the known tiers
    #[error("Line {line}: unknown skill level {label:?}")]
    UnknownSkillLevel { line: usize, label: String },

    /// Effective weight that would make the safety ratio undefined
    #[error("Invalid weight {weight} for {name}: must be a positive number")]
    InvalidWeight { name: String, weight: f64 },
}
