//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};

use coverprep::util::Config;

pub mod outfilelist;
pub mod pkgcfg;
pub mod prepare;

/// Load the explicit or project config relative to the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    Config::discover(explicit, &cwd)
}
