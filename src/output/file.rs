//! Append-only log file.

use super::{LogRecord, Output};
use crate::internal;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Default file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Opens, appends and closes on every record. Nothing is held open between calls, so there
/// is nothing to flush and nothing to tear down.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    /// Serializes open-append-close so lines from concurrent callers never interleave.
    lock: Mutex<()>,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl FileOutput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        // The guard protects no data; a poisoned lock is still usable
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Missing parent directories are an error, not something to create
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Single write so the newline never lands apart from its line
        let mut content = String::with_capacity(record.line.len() + 1);
        content.push_str(&record.line);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        internal::info("FILE", &format!("Appended to {}", self.path.display()));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
