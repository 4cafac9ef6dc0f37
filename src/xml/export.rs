//! Record sets to indented XML documents.
//!
//! The `write_*` functions target any `Write` so tests can render into memory; the
//! `export_*` wrappers create the file. A failure halfway leaves whatever was already
//! written in place.

use super::records::{ExchangeRate, Order};
use crate::internal;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Date layout of `<Date>` elements.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const INDENT_SIZE: usize = 2;

/// `<ExchangeRates><Bank><Name/><BuyRate/><SellRate/></Bank>…</ExchangeRates>`
///
/// # Errors
/// Returns the underlying XML or I/O error.
pub fn write_exchange_rates<W: Write>(
    rates: &[ExchangeRate],
    destination: W,
) -> Result<W, crate::Error> {
    let mut writer = Writer::new_with_indent(destination, b' ', INDENT_SIZE);
    start_document(&mut writer)?;
    start(&mut writer, BytesStart::new("ExchangeRates"))?;

    for rate in rates {
        start(&mut writer, BytesStart::new("Bank"))?;
        text_element(&mut writer, "Name", &rate.bank)?;
        text_element(&mut writer, "BuyRate", &rate.buy.to_string())?;
        text_element(&mut writer, "SellRate", &rate.sell.to_string())?;
        end(&mut writer, "Bank")?;
    }

    end(&mut writer, "ExchangeRates")?;
    Ok(writer.into_inner())
}

/// `<Orders><Order Id="n"><Date/><Customer/><Products>…</Products></Order>…</Orders>`, each
/// `<Product>` holding `<Name/>`, `<Price/>` and `<Quantity/>`.
///
/// # Errors
/// Returns the underlying XML or I/O error.
pub fn write_orders<W: Write>(orders: &[Order], destination: W) -> Result<W, crate::Error> {
    let mut writer = Writer::new_with_indent(destination, b' ', INDENT_SIZE);
    start_document(&mut writer)?;
    start(&mut writer, BytesStart::new("Orders"))?;

    for order in orders {
        let id = order.id.to_string();
        let mut element = BytesStart::new("Order");
        element.push_attribute(("Id", id.as_str()));
        start(&mut writer, element)?;

        let date = order.date.format(DATE_FORMAT).to_string();
        text_element(&mut writer, "Date", &date)?;
        text_element(&mut writer, "Customer", &order.customer)?;

        start(&mut writer, BytesStart::new("Products"))?;
        for product in &order.products {
            start(&mut writer, BytesStart::new("Product"))?;
            text_element(&mut writer, "Name", &product.name)?;
            text_element(&mut writer, "Price", &product.price.to_string())?;
            text_element(&mut writer, "Quantity", &product.quantity.to_string())?;
            end(&mut writer, "Product")?;
        }
        end(&mut writer, "Products")?;

        end(&mut writer, "Order")?;
    }

    end(&mut writer, "Orders")?;
    Ok(writer.into_inner())
}

/// Writes the exchange-rate document to `path`, replacing any existing file.
///
/// # Errors
/// Returns the I/O error from creating the file or the XML error from writing it.
pub fn export_exchange_rates(rates: &[ExchangeRate], path: &Path) -> Result<(), crate::Error> {
    let file = BufWriter::new(File::create(path)?);
    write_exchange_rates(rates, file)?.flush()?;
    internal::info(
        "XML",
        &format!(
            "{} exchange rates written to {}",
            rates.len(),
            path.display()
        ),
    );
    Ok(())
}

/// Writes the orders document to `path`, replacing any existing file.
///
/// # Errors
/// Returns the I/O error from creating the file or the XML error from writing it.
pub fn export_orders(orders: &[Order], path: &Path) -> Result<(), crate::Error> {
    let file = BufWriter::new(File::create(path)?);
    write_orders(orders, file)?.flush()?;
    internal::info(
        "XML",
        &format!("{} orders written to {}", orders.len(), path.display()),
    );
    Ok(())
}

fn start_document<W: Write>(writer: &mut Writer<W>) -> Result<(), crate::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    Ok(())
}

fn start<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<(), crate::Error> {
    writer.write_event(Event::Start(element))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), crate::Error> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<name>text</name>` on one line; text is escaped.
fn text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), crate::Error> {
    start(writer, BytesStart::new(name))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}
