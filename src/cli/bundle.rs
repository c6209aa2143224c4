//! Bundle command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;

use super::utils::{non_empty, parse_csv, report_error};
use crate::bundle::Bundler;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{BundleOptions, BundleReport, SortMode};

#[derive(Args)]
pub struct BundleArgs {
    /// Directory to bundle (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// File path and name of the bundle
    #[arg(short, long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
    pub output: Option<String>,

    /// Languages to include (comma-separated extensions such as 'py,js', or 'all')
    #[arg(short, long, value_name = "LANGS", num_args = 0..=1, default_missing_value = "")]
    pub languages: Option<String>,

    /// List the bundled files in a comment header
    #[arg(short, long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub note: Option<bool>,

    /// Sort order for copying code files: 'name' or 'type'
    #[arg(short, long, value_name = "ORDER", num_args = 0..=1, default_missing_value = "")]
    pub sort: Option<String>,

    /// Remove empty and whitespace-only lines from source code
    #[arg(short, long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub remove_empty_lines: Option<bool>,

    /// Name of the file creator
    #[arg(short, long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    pub author: Option<String>,

    /// Path to config file (code-bundle.toml or .code-bundle.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: BundleArgs) -> Result<()> {
    match execute(args) {
        Ok(report) => println!(
            "{} Output saved to: {}",
            style("Packaging successful!").green().bold(),
            report.output.display()
        ),
        Err(err) => report_error(&err),
    }
    Ok(())
}

fn execute(args: BundleArgs) -> Result<BundleReport> {
    let root = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let file_config = load_config(&root, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        output: non_empty(args.output).map(PathBuf::from),
        languages: parse_csv(&non_empty(args.languages)),
        note: args.note,
        sort: non_empty(args.sort).map(SortMode::from),
        remove_empty_lines: args.remove_empty_lines,
        author: non_empty(args.author),
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);
    let options = BundleOptions::try_from(merged)?;

    let report = Bundler::new(root, options).run()?;
    Ok(report)
}
