//! Core publish workflow: read the notes file, clear any existing
//! release for the tag, then create it again via the release tool.
use std::{fs, path::Path};

use crate::{
    config::Config,
    error::PublishError,
    forge::{
        traits::Forge,
        types::{CleanupOutcome, CreateReleaseRequest},
    },
    result::Result,
};

/// Drives a single publish run against one release descriptor.
pub struct Publisher<'a> {
    config: &'a Config,
    forge: &'a dyn Forge,
}

impl<'a> Publisher<'a> {
    pub fn new(config: &'a Config, forge: &'a dyn Forge) -> Self {
        Self { config, forge }
    }

    /// Execute the full sequence: read notes, delete any stale release,
    /// create the new one, and report the outcome on stdout.
    ///
    /// The delete step is best-effort and never affects the result; the
    /// create step decides success or failure.
    pub fn publish(&self) -> Result<()> {
        let notes = self.read_notes()?;

        println!("\nCreating release...");

        match self.forge.delete_release(&self.config.tag) {
            CleanupOutcome::Deleted => {
                log::debug!(
                    "removed existing release: tag: {}",
                    self.config.tag
                );
            }
            CleanupOutcome::Skipped(reason) => {
                log::debug!("no existing release removed: {reason}");
            }
        }

        let output = self.forge.create_release(CreateReleaseRequest {
            tag: self.config.tag.clone(),
            title: self.config.title.clone(),
            notes,
            target_branch: self.config.target_branch.clone(),
        })?;

        if !output.stdout.is_empty() {
            log::debug!("release tool output: {}", output.stdout.trim());
        }

        if output.success() {
            println!(
                "\n[SUCCESS] Release {} created successfully!",
                self.config.tag
            );
            println!("\nView release: {}", self.config.release_url());
            Ok(())
        } else {
            println!("\n[ERROR] Failed to create release");
            println!("Error: {}", output.stderr);
            Err(PublishError::create_failed(output.code, output.stderr)
                .into())
        }
    }

    fn read_notes(&self) -> Result<String> {
        let path = Path::new(&self.config.notes_file);

        if !path.exists() {
            println!("[ERROR] File not found: {}", self.config.notes_file);
            return Err(PublishError::notes_file_missing(path).into());
        }

        let notes = fs::read_to_string(path)?;
        println!("[OK] Read release notes file");

        Ok(notes)
    }
}
