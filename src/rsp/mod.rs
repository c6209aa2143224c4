//! Response files: interactive creation and `@file` expansion

mod expand;

pub use expand::{expand_response_files, parse_response_file};

use console::style;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};

/// Name of the response file written by `create-rsp`.
pub const RESPONSE_FILE_NAME: &str = "bundle.rsp";

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a free-form value. End of input counts as an empty answer.
    pub fn value(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} {prompt}: ", style("?").cyan().bold()).map_err(BundleError::Prompt)?;
        self.output.flush().map_err(BundleError::Prompt)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(BundleError::Prompt)?;
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only `y` or `Y` is yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.value(&format!("{prompt} (y/n)"))?.eq_ignore_ascii_case("y"))
    }
}

/// Answers collected for one `bundle` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFile {
    pub output: String,
    pub languages: String,
    pub note: bool,
    pub sort: String,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl ResponseFile {
    /// Prompt for every option in canonical order.
    pub fn prompt<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Self> {
        Ok(Self {
            output: prompter.value("Enter the output file path and name")?,
            languages: prompter
                .value("Enter the list of programming languages (comma-separated, or 'all')")?,
            note: prompter.confirm("List the bundled files in a header note")?,
            sort: prompter.value("Enter the sort order for copying code files ('name' or 'type')")?,
            remove_empty_lines: prompter.confirm("Remove empty lines from source code")?,
            author: prompter.value("Enter the name of the file creator")?,
        })
    }

    /// One `--flag value` line per option.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("--output {}", self.output),
            format!("--languages {}", self.languages),
            format!("--note {}", self.note),
            format!("--sort {}", self.sort),
            format!("--remove-empty-lines {}", self.remove_empty_lines),
            format!("--author {}", self.author),
        ]
    }

    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    /// Write [`RESPONSE_FILE_NAME`] into `dir`, replacing any existing one.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(RESPONSE_FILE_NAME);
        fs::write(&path, self.render())
            .map_err(|source| BundleError::Write { path: path.clone(), source })?;
        Ok(path)
    }
}
