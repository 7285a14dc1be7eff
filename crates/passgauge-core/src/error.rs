//! Error types for passgauge-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// Failed to read the configured dictionary file.
    #[error("failed to read dictionary file {path}")]
    DictionaryFile {
        /// The path that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while evaluating a candidate password.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// The candidate is empty; there is nothing to simulate.
    #[error("candidate password is empty")]
    EmptyCandidate,

    /// The candidate's charset profile has no classified characters.
    /// Unreachable for non-empty candidates; kept as a checked invariant.
    #[error("candidate contains no printable characters")]
    NoPrintableCharacters,
}

/// Result type alias using [`EvaluationError`].
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors that can occur during password generation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Requested length cannot cover one character per required class.
    #[error("password length {length} is too short (minimum: {min})")]
    LengthTooShort {
        /// The requested length.
        length: usize,
        /// The minimum accepted length.
        min: usize,
    },
}
