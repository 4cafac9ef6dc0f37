//! `loglet` - configurable text logger with small XML utilities.
//!
//! The logger reads a line-oriented `key=value` file once, then renders every entry through a
//! template such as `[{DateTime}] {LogType} {UserName}: {Message}` and appends it to a log file.
//! Failures never take the host down: fallible steps return `Result`, and the convenience
//! entry points report problems on stderr and carry on.
//!
//! # Example
//!
//! ```no_run
//! use loglet::{Config, Logger, LogType};
//! use std::path::Path;
//!
//! let config = Config::load_or_fallback(Path::new("logger.ini"));
//! let logger = Logger::from_config_or_fallback(&config, Path::new("app.log"));
//!
//! logger.info("Application started");
//! logger.log(LogType::Warning, "Disk almost full");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `loglet` menu binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod xml;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, Settings};
pub use error::Error;
pub use fmt::{FormatTemplate, FormatValues, Placeholder};
pub use level::LogType;
pub use logger::{EntryContext, Logger, LoggerBuilder};
pub use output::{FileOutput, LogRecord, Output, TerminalOutput};
