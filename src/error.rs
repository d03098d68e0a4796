//! Error types for the survey store.
//!
//! Every failure here is fatal to the service: the store returns it, and the
//! entry point (or the request handler that hit it) shuts the process down.

use std::path::PathBuf;

/// Failures while loading or writing the survey backup.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The backup file could not be read, written, flushed or renamed.
    #[error("backup I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup file exists but is not a valid survey document.
    #[error("backup at {} is not a valid survey: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory survey could not be encoded.
    #[error("failed to encode survey: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
