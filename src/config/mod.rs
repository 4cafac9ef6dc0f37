//! Line-oriented `key=value` configuration for the logger.
//!
//! The file is read once at startup. Loading is split in two so callers can choose: the
//! fallible [`Config::load_from`] surfaces the I/O error, while [`Config::load_or_fallback`]
//! reports it and hands back the built-in defaults so the logger always has something to run on.

mod settings;

pub use settings::Settings;

use crate::internal;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Template used when no configuration file can be read.
pub const FALLBACK_FORMAT: &str = "[{DateTime}] {LogType} {UserName}: {Message}";

/// Recognized option names. Case-sensitive.
pub mod keys {
    pub const DATE_TIME: &str = "DateTime";
    pub const LOG_TYPE: &str = "LogType";
    pub const USER_NAME: &str = "UserName";
    pub const MESSAGE: &str = "Message";
    pub const FORMAT: &str = "Format";
}

/// Option name → value, exactly as read (trimmed). Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// Parses config text. Blank lines and lines starting with `;` are skipped, as is any
    /// line that does not split into exactly two parts on `=` (section headers like
    /// `[Settings]`, or values that themselves contain `=`). Later keys win.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();

        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with(';') {
                continue;
            }

            let parts: Vec<&str> = line.split('=').collect();
            if let [key, value] = parts.as_slice() {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { values }
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be read.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        internal::info("CONFIG", &format!("Loading {}", path.display()));
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content);
        internal::info("CONFIG", &format!("Loaded {} keys", config.len()));
        Ok(config)
    }

    /// Like [`Config::load_from`], but an unreadable file is reported as a diagnostic and
    /// replaced by [`Config::fallback`]. Never fails.
    #[must_use]
    pub fn load_or_fallback(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            internal::error(
                "CONFIG",
                &format!("Failed to load {}: {e}; using defaults", path.display()),
            );
            Self::fallback()
        })
    }

    /// Every field enabled with the default template.
    #[must_use]
    pub fn fallback() -> Self {
        let values = [
            (keys::DATE_TIME, "true"),
            (keys::LOG_TYPE, "true"),
            (keys::USER_NAME, "true"),
            (keys::MESSAGE, "true"),
            (keys::FORMAT, FALLBACK_FORMAT),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { values }
    }

    /// Writes the sample file the menu program starts from: a `[Settings]` header
    /// followed by every field enabled and the default template.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be written.
    pub fn write_sample(path: &Path) -> Result<(), crate::Error> {
        let content = format!(
            "[Settings]\n\
             {}=true\n\
             {}=true\n\
             {}=true\n\
             {}=true\n\
             {}={FALLBACK_FORMAT}\n",
            keys::DATE_TIME,
            keys::LOG_TYPE,
            keys::USER_NAME,
            keys::MESSAGE,
            keys::FORMAT,
        );
        fs::write(path, content)?;
        internal::info("CONFIG", &format!("Sample written to {}", path.display()));
        Ok(())
    }

    /// Writes the sample only when nothing exists at `path`, so a user's own file is never
    /// replaced. Returns whether the sample was written.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be written.
    pub fn write_sample_if_missing(path: &Path) -> Result<bool, crate::Error> {
        if path.exists() {
            internal::info("CONFIG", &format!("Keeping existing {}", path.display()));
            return Ok(false);
        }
        Self::write_sample(path)?;
        Ok(true)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Lookup for keys the caller cannot do without.
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingKey`] when the key is absent.
    pub fn require(&self, key: &str) -> Result<&str, crate::Error> {
        self.get(key)
            .ok_or_else(|| crate::Error::MissingKey(key.to_string()))
    }

    /// Only the exact string `"true"` enables a field; `"True"`, `"1"` or a missing key do not.
    #[must_use]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_must_start_the_line() {
        let config = Config::parse(";a=b\n  ;c=d\n");
        assert_eq!(config.get("a"), None);
        assert_eq!(config.get(";c"), Some("d"));
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let config = Config::parse("Message=true\r\nFormat={Message}\r\n");
        assert_eq!(config.get("Message"), Some("true"));
        assert_eq!(config.get("Format"), Some("{Message}"));
    }

    #[test]
    fn empty_key_and_value_are_kept() {
        let config = Config::parse("=\n");
        assert_eq!(config.get(""), Some(""));
    }
}
