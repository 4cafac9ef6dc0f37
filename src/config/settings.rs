//! Typed view of a [`Config`]: the four field switches plus the parsed template.

use super::{Config, keys};
use crate::fmt::{FormatTemplate, FormatValues, finish_line};
use crate::internal;
use crate::level::LogType;
use crate::logger::EntryContext;

/// What the formatter needs from the configuration, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub date_time: bool,
    pub log_type: bool,
    pub user_name: bool,
    pub message: bool,
    pub template: FormatTemplate,
}

impl Settings {
    /// A switch is on only when its value is exactly `"true"`.
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingKey`] when `Format` is absent.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let format = config.require(keys::FORMAT)?;
        Ok(Self::with_template(config, FormatTemplate::parse(format)))
    }

    /// Like [`Settings::from_config`], but a missing `Format` is reported and replaced by
    /// the fallback template. The field switches still come from `config`.
    #[must_use]
    pub fn from_config_or_fallback(config: &Config) -> Self {
        match config.require(keys::FORMAT) {
            Ok(format) => Self::with_template(config, FormatTemplate::parse(format)),
            Err(e) => {
                internal::error("CONFIG", &format!("{e}; using default format"));
                Self::with_template(config, FormatTemplate::default())
            }
        }
    }

    fn with_template(config: &Config, template: FormatTemplate) -> Self {
        Self {
            date_time: config.is_enabled(keys::DATE_TIME),
            log_type: config.is_enabled(keys::LOG_TYPE),
            user_name: config.is_enabled(keys::USER_NAME),
            message: config.is_enabled(keys::MESSAGE),
            template,
        }
    }

    /// Builds the substitution values; disabled fields are left empty.
    #[must_use]
    pub fn values(
        &self,
        log_type: LogType,
        message: &str,
        context: &EntryContext,
    ) -> FormatValues {
        let mut values = FormatValues::new();
        if self.date_time {
            values = values.date_time(&context.date_time);
        }
        if self.log_type {
            values = values.log_type(log_type.bracketed());
        }
        if self.user_name {
            values = values.user_name(&context.user_name);
        }
        if self.message {
            values = values.message(message);
        }
        values
    }

    /// One finished log line, without the trailing newline. Pure: the same inputs always
    /// give the same line.
    #[must_use]
    pub fn format_entry(
        &self,
        log_type: LogType,
        message: &str,
        context: &EntryContext,
    ) -> String {
        let rendered = self
            .template
            .render(&self.values(log_type, message, context));
        finish_line(&rendered)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_time: true,
            log_type: true,
            user_name: true,
            message: true,
            template: FormatTemplate::default(),
        }
    }
}
