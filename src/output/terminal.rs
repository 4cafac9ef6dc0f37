//! Operator-facing output. Diagnostics default to stderr so they never mix with piped stdout.

use super::{LogRecord, Output};
use std::io::{self, Write};

/// Which standard stream to write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Clone, Default)]
pub struct TerminalOutput {
    stream: Stream,
}

impl TerminalOutput {
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", record.line)?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", record.line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
