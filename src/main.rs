//! ntfs-namecheck - Entry Point
//!
//! Lists, and optionally renames, files and directories whose names are
//! invalid on NTFS.

use clap::Parser;
use log::debug;
use std::process::ExitCode;

use ntfs_namecheck::cli::Cli;
use ntfs_namecheck::config::ScanConfig;
use ntfs_namecheck::error::AppError;
use ntfs_namecheck::error::handlers::{exit_code, handle_error};
use ntfs_namecheck::report::console_sink;
use ntfs_namecheck::scan::{ScanSummary, scan};
use ntfs_namecheck::utils::logging::setup_logging;

fn run(cli: &Cli) -> Result<ScanSummary, AppError> {
    let config = ScanConfig::load(cli)?;
    let mut sink = console_sink(config.quiet);
    Ok(scan(&config, sink.as_mut())?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(&cli) {
        Ok(summary) => {
            debug!(
                "Done: {} invalid, {} renamed",
                summary.invalid_found, summary.renamed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            handle_error(&e);
            ExitCode::from(exit_code(&e))
        }
    }
}
