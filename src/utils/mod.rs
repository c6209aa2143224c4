//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{decode_text, read_text_file};
pub use paths::{absolute_path, normalize_path};
