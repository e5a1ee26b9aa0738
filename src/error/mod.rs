//! Error handling
//!
//! Defines error types and exit-code mapping for the scanner.

pub mod handlers;
pub mod types;

pub use types::*;
