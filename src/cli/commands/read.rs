//! Menu entry 5: prints `orders.xml` twice, once as a tree and once as a token stream.

use crate::cli::Workspace;
use crate::xml::{Document, read_tokens_from_path};

/// # Errors
/// Returns the I/O or XML error from either reader.
pub fn cmd_read_xml(workspace: &Workspace) -> Result<(), crate::Error> {
    let path = workspace.orders_xml();

    println!("\nReading XML as a tree:");
    let document = Document::load(&path)?;
    println!("{}", document.to_xml_string());

    println!("\nReading XML as a token stream:");
    for token in read_tokens_from_path(&path)? {
        println!("{token}");
    }
    Ok(())
}
