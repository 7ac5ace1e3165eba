//! The package configuration record handed to the coverage tool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::fs::clean_join;

/// File name, relative to the output directory, where the coverage tool
/// writes its own runtime state.
pub const OUT_CONFIG_FILE: &str = "coveragecfg";

/// Instrumentation resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One counter per basic block.
    #[default]
    PerBlock,
}

/// Package-level coverage configuration.
///
/// Field names are serialized in PascalCase since the downstream tool
/// matches them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageConfig {
    /// Always `<out_dir>/coveragecfg`.
    pub out_config: PathBuf,

    /// Fully-qualified import path of the instrumented package
    pub pkg_path: String,

    /// Short package name
    pub pkg_name: String,

    pub granularity: Granularity,

    /// Whether counters are process-local. Always false.
    pub local: bool,
}

impl CoverageConfig {
    /// Build the config for a package whose instrumented output lands in `out_dir`.
    pub fn for_package(
        pkg_path: impl Into<String>,
        pkg_name: impl Into<String>,
        out_dir: &Path,
    ) -> Self {
        CoverageConfig {
            out_config: clean_join(out_dir, OUT_CONFIG_FILE),
            pkg_path: pkg_path.into(),
            pkg_name: pkg_name.into(),
            granularity: Granularity::PerBlock,
            local: false,
        }
    }
}
