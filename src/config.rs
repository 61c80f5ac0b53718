//! Run configuration shared by both entry points

use std::path::{Path, PathBuf};

/// Formatter executable used when none is configured.
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Directories to scan and the formatter to run over them.
///
/// Either directory may be unset; unset or missing roots are skipped
/// during collection rather than treated as errors.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub src_dir: Option<PathBuf>,
    pub include_dir: Option<PathBuf>,
    pub formatter: String,
}

impl FormatConfig {
    /// The configured roots, in scan order.
    pub fn roots(&self) -> Vec<&Path> {
        [self.src_dir.as_deref(), self.include_dir.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            src_dir: None,
            include_dir: None,
            formatter: DEFAULT_FORMATTER.to_string(),
        }
    }
}
