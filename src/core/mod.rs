//! Formatter invocation and dependency management

pub mod formatter;
pub mod installer;

pub use formatter::{check_file, format_file, format_files, verify_files};
pub use installer::{ensure_formatter, formatter_available};
