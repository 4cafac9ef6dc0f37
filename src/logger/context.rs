//! The two values that change between calls: wall-clock time and the invoking user.

use crate::fmt;
use chrono::{DateTime, Local};

/// Environment variables consulted for the user name, in order.
const USER_VARS: &[&str] = &["USER", "USERNAME", "LOGNAME"];

/// Volatile inputs of one entry. Freezing them makes formatting reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    /// Already formatted as `YYYY-MM-DD HH:MM:SS`.
    pub date_time: String,
    pub user_name: String,
}

impl EntryContext {
    #[must_use]
    pub fn new(date_time: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            date_time: date_time.into(),
            user_name: user_name.into(),
        }
    }

    /// Captures the current local time and user.
    #[must_use]
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    #[must_use]
    pub fn at(time: &DateTime<Local>) -> Self {
        Self::new(fmt::timestamp(time), current_user())
    }
}

/// Login name of the invoking user, falling back to the home directory's name, then `unknown`.
#[must_use]
pub fn current_user() -> String {
    USER_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.trim().is_empty())
        .or_else(home_dir_name)
        .unwrap_or_else(|| "unknown".to_string())
}

fn home_dir_name() -> Option<String> {
    let dirs = directories::UserDirs::new()?;
    dirs.home_dir()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
