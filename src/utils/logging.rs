//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env, Logger, Target};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Routes error records to stderr and everything else to stdout
pub struct SplitLogger {
    stdout: Logger,
    stderr: Logger,
}

impl SplitLogger {
    pub fn new() -> Self {
        Self {
            stdout: builder(Target::Stdout).build(),
            stderr: builder(Target::Stderr).build(),
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.stdout.filter().max(self.stderr.filter())
    }

    fn target_for(&self, level: Level) -> &Logger {
        if level == Level::Error {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    #[cfg(test)]
    fn writes_to_stderr(&self, level: Level) -> bool {
        std::ptr::eq(self.target_for(level), &self.stderr)
    }
}

impl Default for SplitLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.target_for(metadata.level()).enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.target_for(record.level()).log(record);
    }

    fn flush(&self) {
        self.stdout.flush();
        self.stderr.flush();
    }
}

fn builder(target: Target) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(target)
        .format(|buf, record| writeln!(buf, "{} - {}", buf.timestamp(), record.args()));
    builder
}

/// Setup logging for the scanner.
///
/// Lines are written as `<timestamp> - <message>`: errors to stderr, the rest
/// to stdout. The level defaults to `info` and can be changed with
/// `RUST_LOG`.
pub fn setup_logging() {
    let logger = SplitLogger::new();
    let max_level = logger.max_level();
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
}
