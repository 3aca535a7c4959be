//! Error types for aichecker-core.

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
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a spelling dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A word-list line could not be parsed.
    #[error("invalid word list entry on line {line}: {content:?}")]
    InvalidEntry {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The word list had no usable entries.
    #[error("word list for '{language}' contains no words")]
    Empty {
        /// Language the list was loaded for.
        language: String,
    },
}

/// Result type alias using [`DictionaryError`].
pub type DictionaryResult<T> = Result<T, DictionaryError>;
