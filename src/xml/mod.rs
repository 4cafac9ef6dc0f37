//! XML utilities: exporting record sets, style-sheet transforms and reading documents back.
//!
//! Each function is independent and stateless. All of them return `Result` and leave
//! reporting to the caller; a failed export may leave a truncated file behind.

mod export;
mod read;
mod records;
mod transform;
mod tree;

pub use export::{
    DATE_FORMAT, export_exchange_rates, export_orders, write_exchange_rates, write_orders,
};
pub use read::{XmlToken, read_tokens, read_tokens_from_path};
pub use records::{ExchangeRate, Order, Product, sample_exchange_rates, sample_orders};
pub use transform::{ORDERS_STYLESHEET, StyleSheetTransform, Xsltproc, write_orders_stylesheet};
pub use tree::{Document, XmlElement, XmlNode};
