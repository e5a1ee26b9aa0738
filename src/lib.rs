//! Find and fix file and directory names that are invalid on NTFS.
//!
//! [`naming`] holds the pure rules, [`scan`] walks a tree and renames
//! offenders, reporting through an injected [`report::EventSink`].

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod report;
pub mod scan;
pub mod utils;

pub use config::ScanConfig;
pub use error::{AppError, ConfigError, ScanError};
pub use naming::{curated_name, is_invalid_name};
pub use report::{EventSink, ScanEvent};
pub use scan::{ScanSummary, scan};
