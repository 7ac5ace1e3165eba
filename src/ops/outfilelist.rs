//! Output file list generation.

use std::path::{Path, PathBuf};

use crate::core::errors::CoverError;
use crate::core::manifest::Manifest;
use crate::util::fs::write_temp_file;

/// Prefix of the generated file list.
pub const OUTFILELIST_PREFIX: &str = "outfilelist";

/// Write the list of instrumented outputs expected for `sources` to a new
/// file in `out_dir`.
///
/// An empty `sources` is valid and yields just the coverage variables entry.
pub fn generate_manifest<S: AsRef<Path>>(
    sources: &[S],
    out_dir: &Path,
) -> Result<PathBuf, CoverError> {
    let manifest = Manifest::for_sources(sources, out_dir);
    let path = write_temp_file(out_dir, OUTFILELIST_PREFIX, &manifest.render())?;
    tracing::debug!(
        path = %path.display(),
        entries = manifest.len(),
        "wrote coverage output file list"
    );
    Ok(path)
}
