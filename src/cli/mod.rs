//! Menu-driven front end: parse flags, pick one demo, run it.

pub mod commands;
pub mod util;

use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// loglet - configurable logger and XML utilities.
#[derive(Parser, Debug)]
#[command(
    name = "loglet",
    version,
    about = "Configurable logger and XML utilities"
)]
pub struct Cli {
    /// Logger configuration file; a sample is written here when it does not exist
    #[arg(long, value_name = "PATH", default_value = "logger.ini")]
    pub config: String,
    /// File that log entries are appended to
    #[arg(long, value_name = "PATH", default_value = "app.log")]
    pub log_file: String,
    /// Directory for the XML, style sheet and HTML files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: String,
    /// Menu choice (1-5); prompts when omitted
    #[arg(long)]
    pub choice: Option<String>,
    /// Show info-level diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

/// The five demos, numbered as on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Logger,
    ExchangeRates,
    Orders,
    Transform,
    ReadXml,
}

impl Choice {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Logger => 1,
            Self::ExchangeRates => 2,
            Self::Orders => 3,
            Self::Transform => 4,
            Self::ReadXml => 5,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Logger => "Logger",
            Self::ExchangeRates => "Export exchange rates to XML",
            Self::Orders => "Save orders to XML",
            Self::Transform => "Transform orders XML to HTML",
            Self::ReadXml => "Read orders XML",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Logger,
            Self::ExchangeRates,
            Self::Orders,
            Self::Transform,
            Self::ReadXml,
        ]
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.description())
    }
}

impl FromStr for Choice {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::all()
            .into_iter()
            .find(|c| input == c.number().to_string())
            .ok_or_else(|| crate::Error::InvalidChoice(input.to_string()))
    }
}

/// Where the XML demos read and write their files.
#[derive(Debug, Clone)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn exchange_rates_xml(&self) -> PathBuf {
        self.dir.join("exchange_rates.xml")
    }

    #[must_use]
    pub fn orders_xml(&self) -> PathBuf {
        self.dir.join("orders.xml")
    }

    #[must_use]
    pub fn orders_xslt(&self) -> PathBuf {
        self.dir.join("orders.xslt")
    }

    #[must_use]
    pub fn orders_html(&self) -> PathBuf {
        self.dir.join("orders.html")
    }
}

pub use commands::{
    cmd_export_orders, cmd_export_rates, cmd_log_demo, cmd_read_xml, cmd_transform, dispatch,
};
pub use util::{expand_path, print_menu, prompt_choice};
