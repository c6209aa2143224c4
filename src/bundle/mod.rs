//! Bundling: scan, select and write one output file

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::domain::{BundleOptions, BundleReport};
use crate::error::{BundleError, Result};
use crate::render::{strip_empty_lines, BundleWriter};
use crate::scan::FileScanner;
use crate::select::select_entries;
use crate::utils::{absolute_path, read_text_file};

pub struct Bundler {
    root: PathBuf,
    options: BundleOptions,
}

impl Bundler {
    pub fn new(root: impl Into<PathBuf>, options: BundleOptions) -> Self {
        Self { root: root.into(), options }
    }

    /// Write the bundle. Any failure aborts the whole run.
    pub fn run(&self) -> Result<BundleReport> {
        let output = absolute_path(&self.options.output)
            .map_err(|source| BundleError::Write { path: self.options.output.clone(), source })?;

        let mut scanner = FileScanner::new(self.root.clone()).skip_path(output.clone());
        let scanned = scanner.scan()?;
        let stats = scanner.stats().clone();
        debug!(
            "scanned {} files, {} code files ({} in excluded folders)",
            stats.files_scanned, stats.files_included, stats.files_skipped_folder
        );

        let files = select_entries(scanned, &self.options.languages, self.options.sort);
        info!("bundling {} files sorted by {}", files.len(), self.options.sort.as_str());

        let file = File::create(&output)
            .map_err(|source| BundleError::Write { path: output.clone(), source })?;
        let mut writer = BundleWriter::new(BufWriter::new(file), &output);

        if self.options.note {
            writer.write_note(&files)?;
        }
        writer.write_author(&self.options.author)?;

        for entry in &files {
            let content = read_text_file(&entry.path)
                .map_err(|source| BundleError::Read { path: entry.path.clone(), source })?;
            let content =
                if self.options.remove_empty_lines { strip_empty_lines(&content) } else { content };
            writer.write_file(entry, &content)?;
        }
        writer.finish()?;

        Ok(BundleReport { output, files, stats })
    }
}
