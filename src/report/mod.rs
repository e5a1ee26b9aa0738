//! Scan reporting
//!
//! Event types and the sinks that receive them.

pub mod events;
pub mod sink;

pub use events::ScanEvent;
pub use sink::{EventSink, LogSink, NullSink, RecordingSink, console_sink};
