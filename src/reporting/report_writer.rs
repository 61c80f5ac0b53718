//! Report writing functionality

use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::scanner::file_scanner::CheckResult;

/// Write verification results to a file
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `results` - Check results to write
pub fn write_report(output_path: &Path, results: &[CheckResult]) -> Result<()> {
    let mut file = File::create(output_path)?;

    let now = std::time::SystemTime::now();
    writeln!(file, "Formatting Verification Report")?;
    writeln!(file, "==============================")?;
    writeln!(file, "Generated: {:?}", now)?;
    writeln!(file)?;

    let clean_count = results.iter().filter(|r| r.is_clean).count();
    let failing_count = results.len() - clean_count;

    writeln!(file, "Summary Statistics:")?;
    writeln!(file, "-------------------")?;
    writeln!(file, "  Total files checked: {}", results.len())?;
    writeln!(file, "  Clean files: {}", clean_count)?;
    writeln!(file, "  Files needing formatting: {}", failing_count)?;
    writeln!(file)?;

    if failing_count > 0 {
        writeln!(file, "Files Needing Formatting:")?;
        writeln!(file, "-------------------------")?;
        for result in results.iter().filter(|r| !r.is_clean) {
            writeln!(file, "  {}", result.path.display())?;
        }
        writeln!(file)?;
    }

    writeln!(file, "Clean Files:")?;
    writeln!(file, "------------")?;
    for result in results.iter().filter(|r| r.is_clean) {
        writeln!(file, "  {}", result.path.display())?;
    }

    Ok(())
}
