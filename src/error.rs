//! Custom error types for republish with improved type safety and error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for publish operations.
#[derive(Error, Debug)]
pub enum PublishError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Input errors
    #[error("File not found: {}", .path.display())]
    NotesFileMissing { path: PathBuf },

    // External tool errors. The exit code is kept for diagnostics; the
    // message carries the tool's captured stderr.
    #[error("Failed to create release: {stderr}")]
    CreateFailed { code: Option<i32>, stderr: String },
}

impl PublishError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing notes file error
    pub fn notes_file_missing(path: impl Into<PathBuf>) -> Self {
        Self::NotesFileMissing { path: path.into() }
    }

    /// Create a failed-create error from captured tool output
    pub fn create_failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::CreateFailed {
            code,
            stderr: stderr.into(),
        }
    }
}
