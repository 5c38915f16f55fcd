use std::{env, path::PathBuf};

use color_eyre::eyre::{Context, OptionExt};

use crate::result::Result;

/// Directory containing the running executable, with symlinks resolved.
///
/// The publish workflow runs from here so that relative paths in the
/// release descriptor resolve against the binary's location rather than
/// wherever the tool happened to be invoked from.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .wrap_err("unable to determine path of the running executable")?;

    let exe = exe.canonicalize().wrap_err_with(|| {
        format!("unable to resolve executable path: {}", exe.display())
    })?;

    let dir = exe
        .parent()
        .ok_or_eyre("unable to determine directory containing the executable")?;

    Ok(dir.to_path_buf())
}
