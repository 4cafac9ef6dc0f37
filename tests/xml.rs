//! Tests for the XML utilities against real files.

use chrono::NaiveDate;
use loglet::xml::{
    Document, XmlToken, export_exchange_rates, export_orders, read_tokens, read_tokens_from_path,
    sample_exchange_rates, sample_orders,
};
use std::fs;
use tempfile::TempDir;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn sample_orders_are_dated_today_and_yesterday() {
    let orders = sample_orders(day());
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].date, day());
    assert_eq!(
        orders[1].date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(orders[0].products.len(), 2);
    assert_eq!(orders[1].products.len(), 1);
}

#[test]
fn exported_rates_load_as_document() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("exchange_rates.xml");

    export_exchange_rates(&sample_exchange_rates(), &path).unwrap();
    let doc = Document::load(&path).unwrap();

    assert_eq!(doc.root.name, "ExchangeRates");
    let banks: Vec<_> = doc.root.elements().collect();
    assert_eq!(banks.len(), 3);
    assert_eq!(banks[1].child("Name").unwrap().text(), "Oschadbank");
    assert_eq!(banks[1].child("SellRate").unwrap().text(), "28");
}

#[test]
fn exported_orders_round_trip_through_tree() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("orders.xml");

    export_orders(&sample_orders(day()), &path).unwrap();
    let doc = Document::load(&path).unwrap();

    let orders: Vec<_> = doc.root.elements().collect();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].attribute("Id"), Some("1"));
    assert_eq!(orders[0].child("Date").unwrap().text(), "2024-03-01");
    assert_eq!(orders[1].child("Date").unwrap().text(), "2024-02-29");

    let products: Vec<_> = orders[0].child("Products").unwrap().elements().collect();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].child("Price").unwrap().text(), "25000");
    assert_eq!(products[1].child("Quantity").unwrap().text(), "2");
}

#[test]
fn outer_xml_drops_indentation() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("orders.xml");
    export_orders(&sample_orders(day()), &path).unwrap();

    let outer = Document::load(&path).unwrap().to_xml_string();
    assert!(outer.starts_with(r#"<?xml version="1.0" encoding="utf-8"?><Orders>"#));
    assert!(outer.contains(r#"<Orders><Order Id="1"><Date>2024-03-01</Date>"#));
    assert!(!outer.contains('\n'));
}

#[test]
fn tokens_follow_document_order() {
    let xml = concat!(
        r#"<Orders><Order Id="7" Kind="web">"#,
        "<Customer>Ann</Customer><Note/></Order></Orders>"
    );
    let tokens = read_tokens(xml.as_bytes()).unwrap();

    assert_eq!(
        tokens,
        vec![
            XmlToken::Element {
                name: "Orders".to_string(),
                attributes: vec![],
            },
            XmlToken::Element {
                name: "Order".to_string(),
                attributes: vec![
                    ("Id".to_string(), "7".to_string()),
                    ("Kind".to_string(), "web".to_string()),
                ],
            },
            XmlToken::Element {
                name: "Customer".to_string(),
                attributes: vec![],
            },
            XmlToken::Text("Ann".to_string()),
            XmlToken::Element {
                name: "Note".to_string(),
                attributes: vec![],
            },
        ]
    );
}

#[test]
fn token_display_matches_printer_layout() {
    let element = XmlToken::Element {
        name: "Order".to_string(),
        attributes: vec![("Id".to_string(), "1".to_string())],
    };
    assert_eq!(element.to_string(), "Element: Order\n  Attribute: Id=1");
    assert_eq!(XmlToken::Text("x".to_string()).to_string(), "  Value: x");
}

#[test]
fn token_reader_skips_indentation() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("orders.xml");
    export_orders(&sample_orders(day()), &path).unwrap();

    let tokens = read_tokens_from_path(&path).unwrap();
    let blank_text = tokens
        .iter()
        .any(|t| matches!(t, XmlToken::Text(s) if s.trim().is_empty()));
    assert!(!blank_text);
    let elements = tokens
        .iter()
        .filter(|t| matches!(t, XmlToken::Element { .. }))
        .count();
    // Orders + 2 × (Order, Date, Customer, Products) + 3 × (Product, Name, Price, Quantity)
    assert_eq!(elements, 1 + 2 * 4 + 3 * 4);
}

#[test]
fn missing_file_is_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("missing.xml");
    assert!(matches!(Document::load(&path), Err(loglet::Error::Io(_))));
    assert!(matches!(
        read_tokens_from_path(&path),
        Err(loglet::Error::Io(_))
    ));
}

#[test]
fn mismatched_end_tag_is_xml_error() {
    let result = read_tokens("<a><b></a>".as_bytes());
    assert!(matches!(result, Err(loglet::Error::Xml(_))));
}

#[test]
fn export_into_missing_directory_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nope").join("orders.xml");
    assert!(export_orders(&sample_orders(day()), &path).is_err());
    assert!(!fs::exists(&path).unwrap());
}
