//! Configuration loading and parsing for `republish.toml` files.
//!
//! The release descriptor carries built-in defaults for every field, so
//! a bare invocation needs no configuration file at all.
use color_eyre::eyre::Context;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{error::PublishError, result::Result};

/// Default configuration filename, looked up next to the binary.
pub const DEFAULT_CONFIG_FILE: &str = "republish.toml";

/// Release descriptor: everything the external CLI needs to delete and
/// recreate one tagged release.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Tag to delete and recreate.
    pub tag: String,
    /// Human-readable release title.
    pub title: String,
    /// Release notes file, absolute or relative to the binary's directory.
    pub notes_file: String,
    /// Branch the release points at.
    pub target_branch: String,
    /// Repository slug (`owner/name`), used to build the release page link.
    pub repo: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: "vS0005".to_string(),
            title: "vS0005 - 持有成本顯示優化與使用指南增強".to_string(),
            notes_file: "GITHUB_RELEASE_vS0005.md".to_string(),
            target_branch: "main".to_string(),
            repo: "icoolhome/stock-accounting-system".to_string(),
        }
    }
}

impl Config {
    /// Link to the release page for the configured tag.
    pub fn release_url(&self) -> String {
        format!("https://github.com/{}/releases/tag/{}", self.repo, self.tag)
    }

    /// Reject descriptors that cannot produce a valid release.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tag", &self.tag),
            ("notes_file", &self.notes_file),
            ("target_branch", &self.target_branch),
            ("repo", &self.repo),
        ] {
            if value.trim().is_empty() {
                return Err(PublishError::invalid_config(format!(
                    "{field} must not be empty"
                ))
                .into());
            }
        }

        Ok(())
    }
}

/// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in the
/// current directory when no explicit path is given. A missing default file
/// falls back to the built-in release descriptor.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).wrap_err_with(|| {
            format!("failed to read config file: {}", path.display())
        })?;
        let config: Config = toml::from_str(&content).wrap_err_with(|| {
            format!("failed to parse config file: {}", path.display())
        })?;
        return Ok(config);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);

    if !default_path.exists() {
        log::info!(
            "configuration not found: using built-in release descriptor"
        );
        return Ok(Config::default());
    }

    let content = fs::read_to_string(default_path)?;
    let config: Config = toml::from_str(&content)
        .wrap_err("failed to parse republish.toml")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_defaults() {
        let config = Config::default();
        assert_eq!(config.tag, "vS0005");
        assert_eq!(config.notes_file, "GITHUB_RELEASE_vS0005.md");
        assert_eq!(config.target_branch, "main");
        assert!(!config.title.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builds_release_url_from_repo_and_tag() {
        let config = Config::default();
        assert_eq!(
            config.release_url(),
            "https://github.com/icoolhome/stock-accounting-system/releases/tag/vS0005"
        );
    }

    #[test]
    fn loads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
tag = "v1.2.3"
title = "v1.2.3 - bugfixes"
notes_file = "NOTES.md"
target_branch = "release"
repo = "octo/widgets"
"#
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.tag, "v1.2.3");
        assert_eq!(config.title, "v1.2.3 - bugfixes");
        assert_eq!(config.notes_file, "NOTES.md");
        assert_eq!(config.target_branch, "release");
        assert_eq!(
            config.release_url(),
            "https://github.com/octo/widgets/releases/tag/v1.2.3"
        );
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"tag = "v9""#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.tag, "v9");
        assert_eq!(config.notes_file, "GITHUB_RELEASE_vS0005.md");
        assert_eq!(config.target_branch, "main");
    }

    #[test]
    fn errors_on_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn errors_on_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tag = [not toml").unwrap();

        let result = load(Some(file.path()));
        assert!(result.is_err());
    }

    #[test]
    fn missing_default_config_uses_defaults() {
        // No republish.toml exists in the test working directory.
        let config = load(None).unwrap();
        assert_eq!(config.tag, "vS0005");
    }

    #[test]
    fn rejects_empty_required_fields() {
        let config = Config {
            tag: "".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            notes_file: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            target_branch: "".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            repo: "".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
