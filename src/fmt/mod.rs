//! Turning an entry into text: template parsing, value substitution and the timestamp shape.

mod format;

pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder, finish_line};

use chrono::{DateTime, Local};

/// strftime pattern for the `{DateTime}` field: 24-hour, zero-padded local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `now` in the `{DateTime}` shape, e.g. `2024-03-01 09:05:07`.
#[must_use]
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
