//! Scan result types

/// Outcome of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Entries whose base name broke the naming rules
    pub invalid_found: usize,
    /// Entries actually renamed (always 0 in dry-run)
    pub renamed: usize,
    pub dry_run: bool,
}
