//! Error handling and result types for republish.
//!
//! This module provides a unified error handling approach using the
//! `color-eyre` crate, which offers enhanced error reporting with context,
//! suggestions, and colored output.
//!
//! All functions in republish that can fail should return the `Result<T>`
//! type defined in this module, ensuring consistent error handling and
//! reporting across the application.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout republish.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`, providing
/// enhanced error reporting including colorized output, chain-able error
/// context via `.wrap_err()`, and optional stack traces.
pub type Result<T> = EyreResult<T>;
