//! Notes-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during note storage operations.
///
/// Read and write failures carry their context in the message but are the
/// same kind; callers that care (see the `check_permissions` binary) handle
/// `NoteError` as a whole.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The notes file exists but could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The notes file could not be written.
    #[error("Cannot write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory note array could not be serialized.
    #[error("Failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}
