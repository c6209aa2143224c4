//! Command-line interface for code-bundle
//!
//! Provides `bundle` and `create-rsp` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::rsp::expand_response_files;

mod bundle;
mod create_rsp;
mod utils;

/// Bundle the source files of a directory into a single file
#[derive(Parser)]
#[command(name = "code-bundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle code files under a directory into a single file
    Bundle(bundle::BundleArgs),

    /// Create a response file for the bundle command options
    CreateRsp(create_rsp::CreateRspArgs),
}

pub fn run() -> Result<()> {
    let args = expand_response_files(std::env::args_os())?;
    let cli = Cli::parse_from(args);

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
        EnvFilter::default().add_directive(level.into())
    });
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Bundle(args) => bundle::run(args),
        Commands::CreateRsp(args) => create_rsp::run(args),
    }
}
