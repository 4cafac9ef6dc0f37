//! Style-sheet driven XML → HTML. The XSLT engine itself is external; this module only
//! knows how to hand it a source, a style sheet and a destination.

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Anything that can apply a style sheet to a document and write the result.
pub trait StyleSheetTransform {
    /// # Errors
    /// Returns [`crate::Error::Transform`] when the transform cannot run or fails.
    fn transform(
        &self,
        source: &Path,
        stylesheet: &Path,
        output: &Path,
    ) -> Result<(), crate::Error>;
}

/// Runs `xsltproc -o <output> <stylesheet> <source>`.
#[derive(Debug, Clone)]
pub struct Xsltproc {
    program: PathBuf,
}

impl Default for Xsltproc {
    fn default() -> Self {
        Self {
            program: PathBuf::from("xsltproc"),
        }
    }
}

impl Xsltproc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable with the same command line.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl StyleSheetTransform for Xsltproc {
    fn transform(
        &self,
        source: &Path,
        stylesheet: &Path,
        output: &Path,
    ) -> Result<(), crate::Error> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-o").arg(output).arg(stylesheet).arg(source);
        internal::info("XSLT", &format!("Running {cmd:?}"));

        let result = cmd.output().map_err(|e| {
            crate::Error::Transform(format!("cannot run {}: {e}", self.program.display()))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(crate::Error::Transform(format!(
                "{} exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        internal::info("XSLT", &format!("Wrote {}", output.display()));
        Ok(())
    }
}

/// Renders the document written by `export_orders` as an HTML page: one bordered block per
/// order with its customer, date and a product table.
pub const ORDERS_STYLESHEET: &str = r#"<?xml version="1.0"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/">
    <html>
      <body>
        <h2>Orders</h2>
        <xsl:for-each select="Orders/Order">
          <div style="border:1px solid #ccc; margin:10px; padding:10px;">
            <h3>Order #<xsl:value-of select="@Id"/></h3>
            <p>Customer: <xsl:value-of select="Customer"/></p>
            <p>Date: <xsl:value-of select="Date"/></p>
            <table border="1">
              <tr><th>Product</th><th>Price</th><th>Quantity</th></tr>
              <xsl:for-each select="Products/Product">
                <tr>
                  <td><xsl:value-of select="Name"/></td>
                  <td><xsl:value-of select="Price"/></td>
                  <td><xsl:value-of select="Quantity"/></td>
                </tr>
              </xsl:for-each>
            </table>
          </div>
        </xsl:for-each>
      </body>
    </html>
  </xsl:template>
</xsl:stylesheet>
"#;

/// # Errors
/// Returns the I/O error if the file cannot be written.
pub fn write_orders_stylesheet(path: &Path) -> Result<(), crate::Error> {
    fs::write(path, ORDERS_STYLESHEET)?;
    Ok(())
}
