//! code-bundle: bundle the code files of a directory into a single file
//!
//! Walks a directory, keeps source files for the requested languages and
//! concatenates them with provenance comments.

use anyhow::Result;

fn main() -> Result<()> {
    code_bundle::cli::run()
}
