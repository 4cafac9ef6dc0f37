//! Where finished lines go. The log file is the main sink; the terminal carries diagnostics.
//! The `Output` trait lets tests and embedders swap either one out.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::{Stream, TerminalOutput};

use crate::level::LogType;

/// A rendered line plus the classification it was rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub log_type: LogType,
    /// Finished text, no trailing newline.
    pub line: String,
}

impl LogRecord {
    #[must_use]
    pub fn new(log_type: LogType, line: impl Into<String>) -> Self {
        Self {
            log_type,
            line: line.into(),
        }
    }
}

/// `Send + Sync` so one logger can be shared across threads.
pub trait Output: Send + Sync {
    /// Writes one record as one line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
