//! Source file scanning and collection

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffixes recognized as C/C++ sources and headers.
///
/// Matching is case-sensitive; `.CPP` is not a recognized suffix.
pub const SOURCE_EXTENSIONS: &[&str] =
    &[".c", ".cpp", ".h", ".hpp", ".cc", ".cxx", ".hxx", ".hh"];

/// Result of checking a single source file against the canonical style
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub path: PathBuf,
    pub is_clean: bool,
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}

/// Collect all C/C++ source files under the given roots
///
/// # Arguments
/// * `roots` - Root directories to scan recursively; roots that do not
///   exist are silently skipped
///
/// # Returns
/// Sorted vector of matching file paths, each path at most once even
/// when roots overlap
pub fn collect_source_files(roots: &[&Path]) -> Result<Vec<PathBuf>> {
    let mut source_files = BTreeSet::new();

    for root in roots {
        if !root.exists() {
            continue;
        }

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_file() && is_source_file(entry.path()) {
                source_files.insert(entry.path().to_path_buf());
            }
        }
    }

    Ok(source_files.into_iter().collect())
}
