//! Scan events
//!
//! Everything a scan wants to tell the user is expressed as a `ScanEvent`.

use std::fmt;
use std::path::PathBuf;

/// A user-facing event emitted during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// An entry whose base name breaks the naming rules
    InvalidPath(PathBuf),
    /// An entry that was renamed to its curated name
    Renamed { from: PathBuf, to: PathBuf },
    /// Emitted once when the scan finishes
    Summary { invalid_found: usize },
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanEvent::InvalidPath(path) => write!(f, "Invalid path: '{}'", path.display()),
            ScanEvent::Renamed { to, .. } => write!(f, "Renamed to '{}'", to.display()),
            ScanEvent::Summary { invalid_found } => {
                write!(f, "Found {} invalid name(s)", invalid_found)
            }
        }
    }
}
