//! Directory scanning

pub mod scanner;

pub use scanner::FileScanner;
