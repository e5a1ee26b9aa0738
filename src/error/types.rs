//! Error types
//!
//! Defines the errors raised while loading configuration and scanning a tree.

use std::fmt;
use std::io;

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    Load(config::ConfigError),
    Message(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Failed to load configuration: {}", e),
            ConfigError::Message(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Load(error)
    }
}

/// Scan and rename errors
#[derive(Debug)]
pub enum ScanError {
    InvalidRootPath(String),
    NotADirectory(String),
    RenameCollision { from: String, to: String },
    PermissionDenied(String),
    EmptyCuratedName(String),
    EntryVanished(String),
    Walk(String),
    IoError { path: String, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidRootPath(p) => write!(f, "Base path does not exist: {}", p),
            ScanError::NotADirectory(p) => write!(f, "Base path is not a directory: {}", p),
            ScanError::RenameCollision { from, to } => {
                write!(f, "Cannot rename '{}': '{}' already exists", from, to)
            }
            ScanError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            ScanError::EmptyCuratedName(p) => {
                write!(f, "Sanitizing '{}' leaves an empty name", p)
            }
            ScanError::EntryVanished(p) => write!(f, "Entry disappeared during scan: {}", p),
            ScanError::Walk(msg) => write!(f, "Directory walk failed: {}", msg),
            ScanError::IoError { path, source } => write!(f, "IO error on {}: {}", path, source),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ScanError {
    /// Classify an IO failure on `path` into the matching variant
    pub fn from_io(path: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_string()),
            io::ErrorKind::NotFound => ScanError::EntryVanished(path.to_string()),
            _ => ScanError::IoError {
                path: path.to_string(),
                source: error,
            },
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(error: walkdir::Error) -> Self {
        let path = error
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        match error.io_error().map(io::Error::kind) {
            Some(io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
            _ => ScanError::Walk(error.to_string()),
        }
    }
}

/// Top-level error for the command line tool
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Scan(ScanError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Scan(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<ScanError> for AppError {
    fn from(error: ScanError) -> Self {
        AppError::Scan(error)
    }
}
