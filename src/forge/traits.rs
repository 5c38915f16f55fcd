//! Traits related to the external release tool
use crate::{
    forge::types::{CleanupOutcome, CliOutput, CreateReleaseRequest},
    result::Result,
};

#[cfg_attr(test, mockall::automock)]
pub trait Forge {
    /// Best-effort removal of any release already published under `tag`.
    ///
    /// The signature makes the cleanup contract explicit: there is no error
    /// to propagate. A missing prior release, a failed delete, even a
    /// missing tool binary all come back as [`CleanupOutcome::Skipped`].
    fn delete_release(&self, tag: &str) -> CleanupOutcome;

    /// Create a release for `tag`, returning the tool's captured output.
    ///
    /// `Err` means the tool could not be invoked at all; a tool that ran
    /// and failed is `Ok` with a non-zero exit code in the output.
    fn create_release(&self, req: CreateReleaseRequest) -> Result<CliOutput>;
}
