//! Filesystem utilities.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::Builder;

use crate::core::errors::CoverError;

/// Write `contents` to a fresh, uniquely named file in `dir`.
///
/// The file name starts with `prefix`. Until the write and close have both
/// succeeded the file is owned by a `NamedTempFile`, so every error exit
/// removes it. On success the guard is released and the caller owns the
/// returned path, cleanup included.
pub fn write_temp_file(dir: &Path, prefix: &str, contents: &[u8]) -> Result<PathBuf, CoverError> {
    write_temp_file_with(dir, prefix, |file| file.write_all(contents))
}

/// Like [`write_temp_file`], with the body produced by `write`.
pub(crate) fn write_temp_file_with<F>(
    dir: &Path,
    prefix: &str,
    write: F,
) -> Result<PathBuf, CoverError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut tmp = Builder::new()
        .prefix(prefix)
        .tempfile_in(dir)
        .map_err(|source| CoverError::CreateTemp {
            dir: dir.to_path_buf(),
            source,
        })?;

    let tmp_path = tmp.path().to_path_buf();
    let write_err = |source| CoverError::Write {
        path: tmp_path.clone(),
        source,
    };
    write(tmp.as_file_mut()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;

    let (file, path) = tmp.keep().map_err(|e| CoverError::Persist {
        path: e.file.path().to_path_buf(),
        source: e.error,
    })?;
    drop(file);

    Ok(path)
}

/// Remove a file, ignoring failures.
pub fn remove_file_best_effort(path: &Path) {
    let _ = fs::remove_file(path);
}

/// Join `name` onto `dir` and clean the result lexically.
pub fn clean_join(dir: &Path, name: impl AsRef<Path>) -> PathBuf {
    clean_path(&dir.join(name))
}

/// Lexically clean a path without touching the filesystem.
///
/// Repeated separators, trailing separators and `.` elements are dropped,
/// and `..` removes the element before it. `..` directly under the root is
/// the root itself. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Normal elements in `out` that a `..` may still remove.
    let mut poppable = 0usize;

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if poppable > 0 {
                    out.pop();
                    poppable -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                poppable += 1;
            }
            Component::RootDir | Component::Prefix(_) => out.push(component.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
