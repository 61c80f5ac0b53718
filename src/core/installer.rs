//! On-demand installation of the external formatter

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Probe for the formatter by running its `--version`.
pub fn formatter_available(formatter: &str) -> bool {
    Command::new(formatter)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Ensure the formatter can be invoked, installing it via pip when missing.
///
/// File operations must never start with a missing tool, so any
/// installation failure aborts the whole run.
pub fn ensure_formatter(formatter: &str) -> Result<()> {
    println!("Checking for {}...", formatter);
    if formatter_available(formatter) {
        return Ok(());
    }

    println!("{} not found, installing...", formatter);
    let status = Command::new("python3")
        .args(["-m", "pip", "install", "clang-format"])
        .status()
        .context("failed to run pip")?;
    if !status.success() {
        bail!("Failed to install clang-format.");
    }
    if !formatter_available(formatter) {
        bail!("{} is still not runnable after installation", formatter);
    }

    Ok(())
}
