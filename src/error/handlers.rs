//! Error handlers
//!
//! Reports fatal errors and maps them to process exit codes.

use crate::error::types::{AppError, ScanError};
use log::error;

/// Report a fatal error
pub fn handle_error(err: &AppError) {
    error!("{}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 2,
        AppError::Scan(ScanError::InvalidRootPath(_)) => 3,
        AppError::Scan(ScanError::NotADirectory(_)) => 3,
        AppError::Scan(ScanError::RenameCollision { .. }) => 4,
        AppError::Scan(ScanError::PermissionDenied(_)) => 5,
        AppError::Scan(_) => 1,
    }
}
