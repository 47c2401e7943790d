//! Error types for the sketch driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from applying a persisted state snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed state snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("state snapshot must be a JSON object")]
    NotAnObject,
}

/// Errors from driver operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown sketch '{0}'")]
    UnknownSketch(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
