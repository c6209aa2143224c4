//! Expansion of `@path` arguments into the contents of a response file

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BundleError, Result};

/// Replace every `@path` argument with the arguments stored in that file.
///
/// Other arguments pass through untouched. Response files do not nest.
pub fn expand_response_files<I>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expanded = Vec::new();
    for arg in args {
        match arg.to_str().and_then(|s| s.strip_prefix('@')).filter(|p| !p.is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                let parsed = parse_response_file(&path)?;
                debug!("expanded {} into {} arguments", path.display(), parsed.len());
                expanded.extend(parsed.into_iter().map(OsString::from));
            }
            None => expanded.push(arg),
        }
    }
    Ok(expanded)
}

/// Read a response file into arguments.
pub fn parse_response_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|source| BundleError::ResponseFile { path: path.to_path_buf(), source })?;
    Ok(parse_response_text(&text))
}

/// Each line is a flag followed by at most one value; the value is
/// everything after the first run of whitespace, so it may contain spaces.
/// Blank lines and `#` comments are skipped.
fn parse_response_text(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(char::is_whitespace) {
            Some((flag, value)) => {
                args.push(flag.to_string());
                let value = value.trim();
                if !value.is_empty() {
                    args.push(value.to_string());
                }
            }
            None => args.push(line.to_string()),
        }
    }
    args
}
