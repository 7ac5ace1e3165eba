//! Configuration file support.
//!
//! Looked up at `.coverprep/config.toml` in the working directory unless a
//! path is given explicitly. Command-line flags take precedence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::encode::EncodingFormat;

/// Coverprep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package config settings
    pub pkgcfg: PkgcfgConfig,
}

/// Settings for the generated package config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgcfgConfig {
    /// Encoding of the package config file
    pub format: EncodingFormat,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load the explicit config, or the project config if one exists.
    ///
    /// An explicit path must exist. A missing project config means defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = project_config_path(cwd);
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Get the project config path (.coverprep/config.toml).
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(".coverprep").join("config.toml")
}
