//! Scan operations
//!
//! Walks the tree, reports every invalid name and, unless running dry, renames
//! the offending entries.
//!
//! Invalid entries are collected in pre-order before anything is touched and
//! then processed in reverse. Every descendant is therefore handled before its
//! ancestors, so the collected path of an entry is still valid when its turn
//! comes.

use log::debug;
use std::fs;
use std::path::Path;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::report::{EventSink, ScanEvent};
use crate::scan::entry::RenamePlan;
use crate::scan::results::ScanSummary;
use crate::scan::walker::collect_invalid_entries;

/// Scan `config.base_path` and report through `sink`.
///
/// Any rename failure aborts the scan; renames already performed are kept.
pub fn scan(config: &ScanConfig, sink: &mut dyn EventSink) -> Result<ScanSummary, ScanError> {
    let root = config.base_path.as_path();
    check_root(root)?;

    debug!(
        "Scanning {} (dry_run: {}, replacement: {:?})",
        root.display(),
        config.dry_run(),
        config.replacement
    );

    let invalid = collect_invalid_entries(root)?;

    let mut summary = ScanSummary {
        invalid_found: 0,
        renamed: 0,
        dry_run: config.dry_run(),
    };

    for entry in invalid.iter().rev() {
        sink.emit(&ScanEvent::InvalidPath(entry.full_path()));
        summary.invalid_found += 1;

        if config.dry_run() {
            continue;
        }

        let plan = RenamePlan::for_entry(entry, &config.replacement);
        rename_entry(&plan)?;
        sink.emit(&ScanEvent::Renamed {
            from: plan.source(),
            to: plan.target(),
        });
        summary.renamed += 1;
    }

    sink.emit(&ScanEvent::Summary {
        invalid_found: summary.invalid_found,
    });

    Ok(summary)
}

/// Rename a single entry to its curated name.
///
/// Refuses to overwrite an existing entry: `rename(2)` would silently replace
/// a file.
pub fn rename_entry(plan: &RenamePlan) -> Result<(), ScanError> {
    let source = plan.source();
    let source_str = source.display().to_string();

    if plan.curated_name.is_empty() {
        return Err(ScanError::EmptyCuratedName(source_str));
    }

    let target = plan.target();
    if target.symlink_metadata().is_ok() {
        return Err(ScanError::RenameCollision {
            from: source_str,
            to: target.display().to_string(),
        });
    }

    fs::rename(&source, &target).map_err(|e| ScanError::from_io(&source_str, e))?;

    debug!("Renamed {} -> {}", source.display(), target.display());
    Ok(())
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScanError::InvalidRootPath(root.display().to_string()));
        }
        Err(e) => return Err(ScanError::from_io(&root.display().to_string(), e)),
    };

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.display().to_string()));
    }

    Ok(())
}
