//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::{Config, Settings};
use crate::internal;
use std::path::Path;

impl Logger {
    /// Resolves `config` into settings and appends to `log_path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingKey`] when the config has no `Format`.
    pub fn from_config(config: &Config, log_path: &Path) -> Result<Self, crate::Error> {
        let settings = Settings::from_config(config)?;
        let s = &settings;
        internal::info(
            "LOGGER",
            &format!(
                "Fields: DateTime={}, LogType={}, UserName={}, Message={}",
                s.date_time, s.log_type, s.user_name, s.message
            ),
        );
        internal::info("LOGGER", &format!("Writing to {}", log_path.display()));

        Ok(LoggerBuilder::new()
            .settings(settings)
            .file(log_path)
            .build())
    }

    /// Like [`Logger::from_config`], but a config without `Format` is reported and falls
    /// back to the default template. Field switches are kept as configured.
    #[must_use]
    pub fn from_config_or_fallback(config: &Config, log_path: &Path) -> Self {
        LoggerBuilder::new()
            .settings(Settings::from_config_or_fallback(config))
            .file(log_path)
            .build()
    }
}
