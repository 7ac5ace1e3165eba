//! Package coverage config generation.

use std::path::{Path, PathBuf};

use crate::core::config::CoverageConfig;
use crate::core::errors::CoverError;
use crate::util::encode::Encoder;
use crate::util::fs::write_temp_file;

/// Prefix of the generated config file.
pub const PKGCFG_PREFIX: &str = "pkgcfg";

/// Encode the coverage config for a package and write it to a new file in
/// `out_dir`.
///
/// Encoding happens in memory first, so an encoder failure creates no file.
/// The returned path is owned by the caller.
pub fn generate_config<E>(
    encoder: &E,
    pkg_path: &str,
    pkg_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, CoverError>
where
    E: Encoder + ?Sized,
{
    let config = CoverageConfig::for_package(pkg_path, pkg_name, out_dir);

    let mut buf = Vec::new();
    encoder.encode(&mut buf, &config)?;

    let path = write_temp_file(out_dir, PKGCFG_PREFIX, &buf)?;
    tracing::debug!(
        path = %path.display(),
        pkg_path,
        "wrote coverage package config"
    );
    Ok(path)
}
