//! Path helpers

use std::io;
use std::path::{Path, PathBuf};

/// Render a relative path with `/` separators regardless of platform.
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Make `path` absolute against the current directory.
///
/// The parent directory is canonicalized when it exists so the result can be
/// compared with paths produced by walking a canonical root. The file itself
/// does not need to exist.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) else {
        return Ok(absolute);
    };
    match parent.canonicalize() {
        Ok(parent) => Ok(parent.join(name)),
        Err(_) => Ok(absolute),
    }
}
