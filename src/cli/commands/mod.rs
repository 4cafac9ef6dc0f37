//! One file per menu entry. Each handler returns `Result`; [`dispatch`] decides that a
//! failed demo is reported and the program carries on.

mod log;
mod orders;
mod rates;
mod read;
mod transform;

pub use log::cmd_log_demo;
pub use orders::cmd_export_orders;
pub use rates::cmd_export_rates;
pub use read::cmd_read_xml;
pub use transform::cmd_transform;

use super::{Choice, Workspace};
use crate::internal;
use crate::logger::Logger;
use crate::xml::Xsltproc;
use std::path::Path;

/// Runs `choice`. Failures become diagnostics; `false` tells the caller something failed.
pub fn dispatch(choice: Choice, logger: &Logger, log_path: &Path, workspace: &Workspace) -> bool {
    let result = match choice {
        Choice::Logger => cmd_log_demo(logger, log_path),
        Choice::ExchangeRates => cmd_export_rates(workspace),
        Choice::Orders => cmd_export_orders(workspace),
        Choice::Transform => cmd_transform(workspace, &Xsltproc::new()),
        Choice::ReadXml => cmd_read_xml(workspace),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            internal::error(scope(choice), &format!("{}: {e}", failure_message(choice)));
            false
        }
    }
}

const fn scope(choice: Choice) -> &'static str {
    match choice {
        Choice::Logger => "LOG",
        Choice::ExchangeRates | Choice::Orders | Choice::ReadXml => "XML",
        Choice::Transform => "XSLT",
    }
}

const fn failure_message(choice: Choice) -> &'static str {
    match choice {
        Choice::Logger => "Log demo failed",
        Choice::ExchangeRates => "Exchange rate export failed",
        Choice::Orders => "Saving orders failed",
        Choice::Transform => "XSLT transform failed",
        Choice::ReadXml => "Reading XML failed",
    }
}
