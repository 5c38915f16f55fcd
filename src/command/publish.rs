//! Release publication command implementation.
use std::env;

use color_eyre::eyre::Context;

use crate::{
    cli, config, forge::gh::GhCli, path_helpers, publisher::Publisher,
    result::Result,
};

/// Execute the publish command: recreate the configured release from the
/// notes file next to the binary.
pub fn execute(args: &cli::Args) -> Result<()> {
    // Resolve an explicit config path before changing directory so paths
    // given on the command line stay relative to the caller.
    let config_path = args
        .config
        .as_deref()
        .map(|path| {
            path.canonicalize().wrap_err_with(|| {
                format!("failed to resolve config file: {}", path.display())
            })
        })
        .transpose()?;

    let workdir = path_helpers::program_dir()?;

    log::debug!("running from: {}", workdir.display());

    env::set_current_dir(&workdir).wrap_err_with(|| {
        format!("failed to change directory to: {}", workdir.display())
    })?;

    let config = config::load(config_path.as_deref())?;
    config.validate()?;

    let forge = GhCli::new();

    Publisher::new(&config, &forge).publish()
}
