//! Menu entry 4: writes the orders style sheet, then transforms `orders.xml` into HTML.
//! Expects entry 3 to have produced `orders.xml` already.

use crate::cli::Workspace;
use crate::xml::{StyleSheetTransform, write_orders_stylesheet};

/// # Errors
/// Returns the I/O error writing the style sheet or the transform error.
pub fn cmd_transform(
    workspace: &Workspace,
    transformer: &dyn StyleSheetTransform,
) -> Result<(), crate::Error> {
    let stylesheet = workspace.orders_xslt();
    let output = workspace.orders_html();

    write_orders_stylesheet(&stylesheet)?;
    transformer.transform(&workspace.orders_xml(), &stylesheet, &output)?;
    println!("HTML document created: {}", output.display());
    Ok(())
}
