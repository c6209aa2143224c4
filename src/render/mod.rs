//! Bundle text rendering
//!
//! The bundle is plain text with `//` comment markers:
//!
//! ```text
//! // Bundle created with the following files:     (with --note)
//! // - a.py (a.py)
//!
//! // Author: Ada                                  (with --author)
//! // Contents of a.py
//! <content>
//!
//!
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::FileEntry;
use crate::error::{BundleError, Result};

pub const NOTE_HEADER: &str = "// Bundle created with the following files:";

/// Writes the sections of a bundle to `out`, attributing failures to `target`.
pub struct BundleWriter<W: Write> {
    out: W,
    target: PathBuf,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W, target: &Path) -> Self {
        Self { out, target: target.to_path_buf() }
    }

    /// List every file that follows, then a blank line.
    pub fn write_note(&mut self, entries: &[FileEntry]) -> Result<()> {
        let mut note = format!("{NOTE_HEADER}\n");
        for entry in entries {
            note.push_str(&format!("// - {} ({})\n", entry.file_name(), entry.relative_path));
        }
        note.push('\n');
        self.write_str(&note)
    }

    /// Skipped when `author` is empty.
    pub fn write_author(&mut self, author: &str) -> Result<()> {
        if author.is_empty() {
            return Ok(());
        }
        self.write_str(&format!("// Author: {author}\n"))
    }

    pub fn write_file(&mut self, entry: &FileEntry, content: &str) -> Result<()> {
        self.write_str(&format!("// Contents of {}\n{content}\n\n\n", entry.relative_path))
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(|source| BundleError::Write { path: self.target.clone(), source })?;
        Ok(self.out)
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.out
            .write_all(s.as_bytes())
            .map_err(|source| BundleError::Write { path: self.target.clone(), source })
    }
}

/// Drop every empty or whitespace-only line; the rest are kept verbatim.
pub fn strip_empty_lines(content: &str) -> String {
    content.split('\n').filter(|line| !line.trim().is_empty()).collect::<Vec<_>>().join("\n")
}
