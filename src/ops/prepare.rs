//! Both coverage inputs for one compile step.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::errors::CoverError;
use crate::ops::outfilelist::generate_manifest;
use crate::ops::pkgcfg::generate_config;
use crate::util::encode::Encoder;
use crate::util::fs::remove_file_best_effort;

/// Paths of the generated package config and output file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverInputs {
    pub pkgcfg: PathBuf,
    pub outfilelist: PathBuf,
}

impl CoverInputs {
    /// Flags for the instrumentation tool, in the order it expects them.
    pub fn tool_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-pkgcfg"),
            self.pkgcfg.clone().into_os_string(),
            OsString::from("-outfilelist"),
            self.outfilelist.clone().into_os_string(),
        ]
    }
}

/// Generate the package config and the output file list for a package.
///
/// If the list cannot be written the config file is removed again, so a
/// failed call leaves nothing in `out_dir`.
pub fn prepare<E, S>(
    encoder: &E,
    pkg_path: &str,
    pkg_name: &str,
    sources: &[S],
    out_dir: &Path,
) -> Result<CoverInputs, CoverError>
where
    E: Encoder + ?Sized,
    S: AsRef<Path>,
{
    prepare_with(encoder, pkg_path, pkg_name, out_dir, || {
        generate_manifest(sources, out_dir)
    })
}

fn prepare_with<E, W>(
    encoder: &E,
    pkg_path: &str,
    pkg_name: &str,
    out_dir: &Path,
    write_manifest: W,
) -> Result<CoverInputs, CoverError>
where
    E: Encoder + ?Sized,
    W: FnOnce() -> Result<PathBuf, CoverError>,
{
    let pkgcfg = generate_config(encoder, pkg_path, pkg_name, out_dir)?;
    let outfilelist = match write_manifest() {
        Ok(path) => path,
        Err(e) => {
            remove_file_best_effort(&pkgcfg);
            return Err(e);
        }
    };

    Ok(CoverInputs {
        pkgcfg,
        outfilelist,
    })
}
