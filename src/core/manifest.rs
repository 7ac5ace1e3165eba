//! The list of files the instrumentation step is expected to produce.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::util::fs::clean_join;

/// Fixed file holding the generated coverage variable declarations.
pub const COVER_VARS_FILE: &str = "covervars.go";

/// Suffix appended to each source's stem.
pub const COVER_SUFFIX: &str = ".cover.go";

/// Ordered list of expected instrumented-output paths.
///
/// The first entry is always `<out_dir>/covervars.go`, followed by one entry
/// per source in input order. Sources sharing a stem produce duplicate
/// entries; keeping names distinct is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<PathBuf>,
}

impl Manifest {
    /// Derive the manifest for `sources` instrumented into `out_dir`.
    pub fn for_sources<S: AsRef<Path>>(sources: &[S], out_dir: &Path) -> Self {
        let mut entries = Vec::with_capacity(sources.len() + 1);
        entries.push(clean_join(out_dir, COVER_VARS_FILE));
        entries.extend(sources.iter().map(|src| {
            let mut name = source_stem(src.as_ref());
            name.push(COVER_SUFFIX);
            clean_join(out_dir, name)
        }));
        Manifest { entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-joined entries with no trailing newline.
    ///
    /// Paths are written byte for byte, so names that are not valid UTF-8
    /// reach the coverage tool unchanged.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(entry.as_os_str().as_encoded_bytes());
        }
        out
    }
}

/// Base name of `src` with its last extension removed.
///
/// Only the final `.` counts, so `foo.pb.go` becomes `foo.pb` and a bare
/// `.go` becomes the empty string.
fn source_stem(src: &Path) -> OsString {
    let name = src.file_name().unwrap_or(src.as_os_str());
    if name.as_encoded_bytes().iter().rposition(|&b| b == b'.') == Some(0) {
        return OsString::new();
    }
    Path::new(name)
        .file_stem()
        .unwrap_or(OsStr::new(""))
        .to_os_string()
}
