//! Closed set of entry classifications written into every log line.

use std::fmt;
use std::str::FromStr;

/// What kind of event an entry records. Printed into the `{LogType}` slot as `[Label]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogType {
    /// A failure that stopped the current operation.
    Error,
    /// An unexpected fault caught at a boundary.
    Exception,
    /// Output produced while exercising the program.
    Test,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Non-fatal anomalies that may need attention.
    Warning,
}

impl LogType {
    /// Label as it appears in log files, capitalized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Exception => "Exception",
            Self::Test => "Test",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }

    /// The `{LogType}` substitution: the label wrapped in square brackets.
    #[must_use]
    pub fn bracketed(self) -> String {
        format!("[{}]", self.as_str())
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Error,
            Self::Exception,
            Self::Test,
            Self::Info,
            Self::Warning,
        ]
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown log type" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogTypeError(pub(crate) String);

impl fmt::Display for ParseLogTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log type: '{}'", self.0)
    }
}

impl std::error::Error for ParseLogTypeError {}

impl FromStr for LogType {
    type Err = ParseLogTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "exception" | "exc" => Ok(Self::Exception),
            "test" => Ok(Self::Test),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            _ => Err(ParseLogTypeError(s.to_string())),
        }
    }
}
