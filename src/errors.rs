//! Error types for reading calibration input.

use std::io;
use thiserror::Error;

/// Errors raised while obtaining lines from a line source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The configured path does not exist.
    #[error("file not found at {path}")]
    NotFound { path: String },

    /// Any other failure while opening or reading the source.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an I/O error raised for `path`.
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound { path }
        } else {
            SourceError::Read { path, source }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            SourceError::NotFound { path } | SourceError::Read { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Result type for line source operations.
pub type SourceResult<T> = Result<T, SourceError>;
