//! Error types for coverage input generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while encoding a [`CoverageConfig`](super::config::CoverageConfig).
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::ser::Error),

    /// Raised by custom encoders.
    #[error("{0}")]
    Custom(String),
}

impl EncodeError {
    /// Create a custom encode error from a message.
    pub fn custom(msg: impl Into<String>) -> Self {
        EncodeError::Custom(msg.into())
    }
}

/// Error returned by the generators.
///
/// No variant leaves a file behind: anything created before the failure
/// has already been removed when the error is returned.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("failed to create temporary file in {}", dir.display())]
    CreateTemp {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to keep {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
