//! Core error types
//!
//! Everything here is fatal at initialization time: a table or pattern set
//! that fails to build is unusable, and scanning itself never fails.

use thiserror::Error;

/// Errors raised while building compound tables and exception patterns
#[derive(Error, Debug)]
pub enum CoreError {
    /// Compound list resource could not be read
    #[error("failed to read compound list {path}: {source}")]
    Io {
        /// Path of the resource that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A compound list line that cannot be parsed into a valid entry
    #[error("malformed compound entry at line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the resource
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Two entries normalize to the same key but disagree on variants
    #[error("conflicting duplicate for compound key '{key}' at line {line}")]
    DuplicateKey {
        /// Normalized canonical key
        key: String,
        /// 1-based line number of the second occurrence
        line: usize,
    },

    /// An exception pattern whose regex does not compile
    #[error("invalid exception pattern at index {index}: {source}")]
    InvalidPattern {
        /// Zero-based index of the pattern in its declaration list
        index: usize,
        /// Regex compilation failure
        #[source]
        source: regex::Error,
    },

    /// Language configuration failed validation or parsing
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No embedded rules exist for the requested language code
    #[error("unknown language code: {code}")]
    UnknownLanguage {
        /// The language code that was requested
        code: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
