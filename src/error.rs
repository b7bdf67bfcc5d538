//! Error types
//!
//! Every failure aborts the whole generation run. The variants mirror the
//! three ways a run can go wrong: bad configuration, a filesystem operation
//! that failed, or the random stream refusing to produce bytes.

use std::path::PathBuf;

/// Error type for generation operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration (size strings, plan values, strict patterns)
    #[error("configuration error: {0}")]
    Config(String),

    /// Directory/file creation or write failure
    #[error("failed to {op} {}: {source}", path.display())]
    Filesystem {
        /// Operation that failed ("create directory", "write file", ...)
        op: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Random stream failure
    #[error("random stream failure: {0}")]
    Randomness(String),

    /// Malformed or unwritable settings document
    #[error("settings document {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a filesystem error for `op` on `path`
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
