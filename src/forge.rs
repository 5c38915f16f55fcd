//! Boundary to the external release-management CLI.
//!
//! Release deletion and creation are delegated entirely to the GitHub CLI
//! (`gh`); this module wraps those child-process calls behind a common
//! trait so the rest of the tool never touches `std::process` directly.

/// GitHub CLI implementation driving `gh` child processes.
pub mod gh;

/// Common trait for release tool abstraction.
pub mod traits;

/// Shared data types for release requests and captured tool output.
pub mod types;
