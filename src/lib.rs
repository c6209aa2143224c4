//! code-bundle: concatenate the source files of a directory tree
//!
//! This library scans a directory for code files, filters them by language,
//! orders them and writes a single annotated bundle. It also creates response
//! files that replay the bundle options.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod rsp;
pub mod scan;
pub mod select;
pub mod utils;

pub use bundle::Bundler;
pub use domain::{BundleOptions, BundleReport, FileEntry, LanguageFilter, SortMode};
pub use error::{BundleError, Result};
