//! Stepwise construction so callers only name what differs from the defaults.

use super::Logger;
use crate::config::Settings;
use crate::output::{FileOutput, Output};
use std::path::PathBuf;

#[derive(Default)]
pub struct LoggerBuilder {
    pub(super) settings: Settings,
    pub(super) output: Option<Box<dyn Output>>,
    pub(super) diagnostics: Option<Box<dyn Output>>,
}

impl LoggerBuilder {
    /// Fallback settings, `app.log` in the working directory, diagnostics on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Appends to the file at `path`.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.output(FileOutput::new(path))
    }

    /// Replaces the log destination.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Receives one record per failed write instead of stderr.
    #[must_use]
    pub fn diagnostics(mut self, output: impl Output + 'static) -> Self {
        self.diagnostics = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            settings: self.settings,
            output: self
                .output
                .unwrap_or_else(|| Box::new(FileOutput::default())),
            diagnostics: self.diagnostics,
        }
    }
}
