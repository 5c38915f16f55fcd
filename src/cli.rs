//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

/// Global CLI arguments for release publishing and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// Alternate configuration file. Defaults to republish.toml next to
    /// the binary, falling back to the built-in release descriptor.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
