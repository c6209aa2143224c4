//! Recursive file scanner applying the code-extension and excluded-folder rules

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{is_code_extension, is_excluded_folder, FileEntry, ScanStats};
use crate::error::{BundleError, Result};
use crate::utils::normalize_path;

pub struct FileScanner {
    root: PathBuf,
    skip_paths: Vec<PathBuf>,
    stats: ScanStats,
}

impl FileScanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root, skip_paths: Vec::new(), stats: ScanStats::default() }
    }

    /// Never report this absolute path, e.g. the bundle being written.
    pub fn skip_path(mut self, path: PathBuf) -> Self {
        self.skip_paths.push(path);
        self
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Walk the root and return matching files in walk order.
    ///
    /// Directory entries are visited sorted by file name. The root is
    /// canonicalized first so relative paths are stable.
    pub fn scan(&mut self) -> Result<Vec<FileEntry>> {
        let root = self
            .root
            .canonicalize()
            .map_err(|_| BundleError::RootNotFound(self.root.clone()))?;
        if !root.is_dir() {
            return Err(BundleError::RootNotFound(self.root.clone()));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            self.stats.files_scanned += 1;

            let path = entry.path();
            if self.skip_paths.iter().any(|skip| skip == path) {
                debug!("skipping {}: bundle output", path.display());
                continue;
            }

            let relative = path.strip_prefix(&root).unwrap_or(path);
            let extension = extension_of(path);
            if !is_code_extension(&extension) {
                self.stats.files_skipped_extension += 1;
                continue;
            }
            if is_excluded_folder(relative) {
                debug!("skipping {}: excluded folder", relative.display());
                self.stats.files_skipped_folder += 1;
                continue;
            }

            entries.push(FileEntry::new(path.to_path_buf(), normalize_path(relative), extension));
        }

        self.stats.files_included = entries.len();
        Ok(entries)
    }
}

/// Everything from the last dot of the file name, or an empty string.
///
/// A dotfile such as `.py` counts as having the extension `.py`; a trailing
/// dot yields no extension.
fn extension_of(path: &Path) -> String {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[idx..].to_string(),
        _ => String::new(),
    }
}
