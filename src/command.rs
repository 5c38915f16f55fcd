//! Command execution for republish.
//!
//! Each command follows the same pattern:
//!
//! 1. Parse and validate CLI arguments
//! 2. Resolve the working directory and load configuration
//! 3. Execute the command-specific workflow
//! 4. Handle errors and provide meaningful feedback
//!
//! All commands use the unified error handling provided by the `result`
//! module, ensuring consistent reporting across failure scenarios.

/// Release publication.
///
/// Implements the publish workflow: read the release notes file that
/// lives next to the binary, remove any existing release for the
/// configured tag, and create it again through the GitHub CLI.
pub mod publish;
