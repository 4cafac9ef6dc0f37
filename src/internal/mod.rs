//! loglet's own diagnostic channel. Config fallbacks, failed writes and failed XML jobs
//! are reported here, on stderr, never in the log file being written.
//!
//! Uses `OnceLock` so the verbosity is fixed exactly once; the first diagnostic before an
//! explicit `init` locks in the quiet default.

use crate::level::LogType;
use crate::output::{LogRecord, Output, TerminalOutput};
use std::sync::OnceLock;

struct Diagnostics {
    /// Info-level chatter (config loaded, files written) only shows with `--verbose`.
    verbose: bool,
    output: TerminalOutput,
}

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

/// Later calls are no-ops.
pub fn init(verbose: bool) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| build(verbose));
    if !was_init {
        info("INTERNAL", "Diagnostics ready");
    }
}

fn build(verbose: bool) -> Diagnostics {
    Diagnostics {
        verbose,
        output: TerminalOutput::stderr(),
    }
}

/// `[Warning] CONFIG: message`, same bracketed label as the `{LogType}` field.
#[must_use]
pub fn format_diagnostic(log_type: LogType, scope: &str, msg: &str) -> String {
    format!("{} {scope}: {msg}", log_type.bracketed())
}

fn log(log_type: LogType, scope: &str, msg: &str) {
    let diagnostics = DIAGNOSTICS.get_or_init(|| build(false));
    if log_type == LogType::Info && !diagnostics.verbose {
        return;
    }

    let record = LogRecord::new(log_type, format_diagnostic(log_type, scope, msg));
    // Nowhere left to report a failing stderr.
    let _ = diagnostics.output.write(&record);
}

/// Visible only with `--verbose`.
pub fn info(scope: &str, msg: &str) {
    log(LogType::Info, scope, msg);
}

/// Recovered anomalies: fallbacks, skipped input.
pub fn warn(scope: &str, msg: &str) {
    log(LogType::Warning, scope, msg);
}

/// Failed operations: unwritable log file, broken XML, failed transform.
pub fn error(scope: &str, msg: &str) {
    log(LogType::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_uses_bracketed_label() {
        assert_eq!(
            format_diagnostic(LogType::Warning, "CONFIG", "using defaults"),
            "[Warning] CONFIG: using defaults"
        );
    }
}
