//! Menu entry 2.

use crate::cli::Workspace;
use crate::xml::{export_exchange_rates, sample_exchange_rates};

/// # Errors
/// Returns the I/O or XML error from the export.
pub fn cmd_export_rates(workspace: &Workspace) -> Result<(), crate::Error> {
    let path = workspace.exchange_rates_xml();
    export_exchange_rates(&sample_exchange_rates(), &path)?;
    println!("Exchange rates saved to {}", path.display());
    Ok(())
}
