//! Menu entry 1: a few sample entries of different types.

use crate::level::LogType;
use crate::logger::Logger;
use std::path::Path;

const SAMPLE_ENTRIES: &[(LogType, &str)] = &[
    (LogType::Info, "Program started"),
    (LogType::Warning, "This is a test warning"),
    (LogType::Error, "An error occurred"),
];

/// Failed entries are reported by the logger itself, one diagnostic each, so this never
/// fails; the confirmation line is printed only when every entry made it.
///
/// # Errors
/// None; the signature matches the other menu handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn cmd_log_demo(logger: &Logger, log_path: &Path) -> Result<(), crate::Error> {
    let failed = SAMPLE_ENTRIES
        .iter()
        .filter(|(log_type, message)| !logger.log(*log_type, message))
        .count();

    if failed == 0 {
        println!("Log entries written to {}", log_path.display());
    }
    Ok(())
}
