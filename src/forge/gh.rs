//! Release tool implementation backed by the GitHub `gh` CLI.
use color_eyre::eyre::Context;
use std::{ffi::OsString, process::Command};

use crate::{
    forge::{
        traits::Forge,
        types::{CleanupOutcome, CliOutput, CreateReleaseRequest},
    },
    result::Result,
};

/// Program invoked for every release operation.
pub const DEFAULT_GH_PROGRAM: &str = "gh";

/// Shells out to the installed `gh` binary.
///
/// Authentication, network access, and repository resolution are all
/// delegated to `gh` itself, which picks them up from its own
/// configuration and the working directory.
pub struct GhCli {
    program: OsString,
}

impl GhCli {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GH_PROGRAM)
    }

    /// Use an alternate program name or path in place of `gh`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Forge for GhCli {
    fn delete_release(&self, tag: &str) -> CleanupOutcome {
        log::debug!("deleting existing release: tag: {tag}");

        let result = Command::new(&self.program)
            .args(["release", "delete", tag, "--yes"])
            .output();

        match result {
            Ok(output) if output.status.success() => CleanupOutcome::Deleted,
            Ok(output) => CleanupOutcome::Skipped(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ),
            Err(err) => CleanupOutcome::Skipped(err.to_string()),
        }
    }

    fn create_release(&self, req: CreateReleaseRequest) -> Result<CliOutput> {
        log::debug!(
            "creating release: tag: {}, target: {}",
            req.tag,
            req.target_branch
        );

        let output = Command::new(&self.program)
            .arg("release")
            .arg("create")
            .arg(&req.tag)
            .arg("--title")
            .arg(&req.title)
            .arg("--notes")
            .arg(&req.notes)
            .arg("--target")
            .arg(&req.target_branch)
            .output()
            .wrap_err_with(|| {
                format!("failed to execute {}", self.program.to_string_lossy())
            })?;

        Ok(output.into())
    }
}
