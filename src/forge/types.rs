//! Common types associated with the release tool boundary
use std::process::Output;

/// Everything required to create a tagged release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReleaseRequest {
    /// Git tag the release is published under.
    pub tag: String,
    /// Human readable release title.
    pub title: String,
    /// Full markdown body for the release notes.
    pub notes: String,
    /// Branch or commitish the tag should point at.
    pub target_branch: String,
}

/// Captured output of a finished release tool invocation.
#[derive(Debug, Clone)]
pub struct CliOutput {
    /// Process exit code, when the process terminated normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// True only when the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for CliOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Result of a pre-publish cleanup attempt.
///
/// Cleanup is best-effort: both variants are terminal, non-fatal states
/// and neither influences the overall publish outcome. [`Skipped`] keeps
/// the reason purely for diagnostics.
///
/// [`Skipped`]: CleanupOutcome::Skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// A previous release existed and was removed.
    Deleted,
    /// Nothing was removed. Carries the reason for logging only.
    Skipped(String),
}
