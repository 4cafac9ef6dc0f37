//! Menu entry 3: sample orders dated today and yesterday.

use crate::cli::Workspace;
use crate::xml::{export_orders, sample_orders};
use chrono::Local;

/// # Errors
/// Returns the I/O or XML error from the export.
pub fn cmd_export_orders(workspace: &Workspace) -> Result<(), crate::Error> {
    let path = workspace.orders_xml();
    export_orders(&sample_orders(Local::now().date_naive()), &path)?;
    println!("Orders saved to {}", path.display());
    Ok(())
}
