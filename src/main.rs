use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Import from our modularized library
use source_formatter_rs::prelude::*;

#[derive(Parser)]
#[command(name = "source_formatter_rs")]
#[command(about = "Formats and verifies C/C++ sources with clang-format", long_about = None)]
struct Cli {
    /// Source directory scanned for files to process
    #[arg(long, default_value = "src")]
    src_dir: PathBuf,

    /// Include directory scanned for headers
    #[arg(long, default_value = "include")]
    include_dir: PathBuf,

    /// Formatter executable to invoke
    #[arg(long, default_value = DEFAULT_FORMATTER)]
    formatter: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite source files in place to the canonical style
    Format,
    /// Check formatting without touching files; fails on any violation
    Verify {
        /// Write a detailed report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FormatConfig {
        src_dir: Some(cli.src_dir),
        include_dir: Some(cli.include_dir),
        formatter: cli.formatter,
    };

    ensure_formatter(&config.formatter)?;

    let files = collect_source_files(&config.roots())?;

    match cli.command {
        Commands::Format => {
            if files.is_empty() {
                println!("No source files found to format.");
                return Ok(());
            }
            format_files(&config, &files)?;
        }
        Commands::Verify { output } => {
            if files.is_empty() {
                println!("No source files found to verify.");
                return Ok(());
            }

            let results = verify_files(&config, &files)?;

            if let Some(report_path) = output {
                write_report(&report_path, &results)?;
                println!("Report saved to: {}", report_path.display());
            }

            let failing_count = results.iter().filter(|r| !r.is_clean).count();
            println!();
            if failing_count > 0 {
                println!("FAILED: {} file(s) need formatting.", failing_count);
                println!("Run 'source_formatter_rs format' to fix them.");
                std::process::exit(1);
            }
            println!("SUCCESS: All files are formatted correctly.");
        }
    }

    Ok(())
}
