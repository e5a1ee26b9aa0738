//! Tree scan
//!
//! Walks a directory tree, classifies every base name and renames the
//! offending entries.

pub mod entry;
pub mod operations;
pub mod results;
pub mod walker;

pub use entry::{PathEntry, RenamePlan};
pub use operations::{rename_entry, scan};
pub use results::ScanSummary;
pub use walker::{collect_entries, collect_invalid_entries};
