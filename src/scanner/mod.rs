//! Source file discovery

pub mod file_scanner;

pub use file_scanner::{collect_source_files, CheckResult, SOURCE_EXTENSIONS};
