//! Error type shared by the scanner, bundler, config loader and response files

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Could not find a part of the path '{}'", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Option '{0}' is required")]
    MissingOption(&'static str),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Could not read response file '{}': {source}", path.display())]
    ResponseFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read answer: {0}")]
    Prompt(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BundleError>;
