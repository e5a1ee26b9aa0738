//! Event sinks
//!
//! The scan receives its sink explicitly, so quiet mode is a choice of sink
//! rather than a change to process-wide logger state.

use log::info;

use crate::report::events::ScanEvent;

/// Receiver of scan events
pub trait EventSink {
    fn emit(&mut self, event: &ScanEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&ScanEvent),
{
    fn emit(&mut self, event: &ScanEvent) {
        self(event)
    }
}

/// Forwards every event to the `log` facade at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &ScanEvent) {
        info!("{}", event);
    }
}

/// Discards every event
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &ScanEvent) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ScanEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths reported as invalid, in emission order
    pub fn invalid_paths(&self) -> Vec<&std::path::Path> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ScanEvent::InvalidPath(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ScanEvent) {
        self.events.push(event.clone());
    }
}

/// Pick the console sink for the requested verbosity
pub fn console_sink(quiet: bool) -> Box<dyn EventSink> {
    if quiet {
        Box::new(NullSink)
    } else {
        Box::new(LogSink)
    }
}
