//! The logger renders each entry with the configured [`Settings`] and appends it to its
//! output. It is immutable after build, so a shared reference is enough for every caller.

mod builder;
mod context;
mod from_config;

pub use builder::LoggerBuilder;
pub use context::{EntryContext, current_user};

use crate::config::Settings;
use crate::internal;
use crate::level::LogType;
use crate::output::{LogRecord, Output};

pub struct Logger {
    settings: Settings,
    output: Box<dyn Output>,
    /// `None` routes write failures to the internal stderr channel.
    diagnostics: Option<Box<dyn Output>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Renders the line `log_type` and `message` would produce right now.
    #[must_use]
    pub fn render(&self, log_type: LogType, message: &str) -> String {
        self.settings
            .format_entry(log_type, message, &EntryContext::now())
    }

    /// Renders with explicit time and user, then writes.
    ///
    /// # Errors
    /// Whatever the output returns, typically an I/O error from the append.
    pub fn try_log_with(
        &self,
        log_type: LogType,
        message: &str,
        context: &EntryContext,
    ) -> Result<(), crate::Error> {
        let line = self.settings.format_entry(log_type, message, context);
        self.output.write(&LogRecord::new(log_type, line))
    }

    /// # Errors
    /// Whatever the output returns, typically an I/O error from the append.
    pub fn try_log(&self, log_type: LogType, message: &str) -> Result<(), crate::Error> {
        self.try_log_with(log_type, message, &EntryContext::now())
    }

    /// Writes one entry. A failed write is reported once as a diagnostic and never reaches
    /// the caller beyond the `false` return.
    pub fn log(&self, log_type: LogType, message: &str) -> bool {
        match self.try_log(log_type, message) {
            Ok(()) => true,
            Err(e) => {
                self.report(&format!("Failed to write log entry: {e}"));
                false
            }
        }
    }

    fn report(&self, msg: &str) {
        match &self.diagnostics {
            Some(output) => {
                let line = internal::format_diagnostic(LogType::Error, "LOG", msg);
                let _ = output.write(&LogRecord::new(LogType::Error, line));
            }
            None => internal::error("LOG", msg),
        }
    }

    pub fn error(&self, message: &str) -> bool {
        self.log(LogType::Error, message)
    }

    pub fn exception(&self, message: &str) -> bool {
        self.log(LogType::Exception, message)
    }

    pub fn test(&self, message: &str) -> bool {
        self.log(LogType::Test, message)
    }

    pub fn info(&self, message: &str) -> bool {
        self.log(LogType::Info, message)
    }

    pub fn warning(&self, message: &str) -> bool {
        self.log(LogType::Warning, message)
    }

    /// # Errors
    /// Returns the output's flush error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}
