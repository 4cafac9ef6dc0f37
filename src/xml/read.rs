//! Token-stream reading for printing a document's structure.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What the printer cares about. Comments, processing instructions, closing tags and
/// whitespace-only text are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlToken {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

impl fmt::Display for XmlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element { name, attributes } => {
                write!(f, "Element: {name}")?;
                for (key, value) in attributes {
                    write!(f, "\n  Attribute: {key}={value}")?;
                }
                Ok(())
            }
            Self::Text(value) => write!(f, "  Value: {value}"),
        }
    }
}

/// Streams `source` into tokens in document order. Empty elements (`<a/>`) count as elements.
///
/// # Errors
/// Returns the XML error for malformed input or mismatched end tags.
pub fn read_tokens<R: BufRead>(source: R) -> Result<Vec<XmlToken>, crate::Error> {
    let mut reader = Reader::from_reader(source);
    reader.trim_text(true);

    let mut tokens = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => tokens.push(element_token(&e)?),
            Event::Text(e) => {
                let text = e.unescape()?;
                if !text.trim().is_empty() {
                    tokens.push(XmlToken::Text(text.into_owned()));
                }
            }
            Event::CData(e) => {
                tokens.push(XmlToken::Text(String::from_utf8_lossy(&e).into_owned()));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(tokens)
}

/// # Errors
/// Returns the I/O error opening `path` or the XML error reading it.
pub fn read_tokens_from_path(path: &Path) -> Result<Vec<XmlToken>, crate::Error> {
    read_tokens(BufReader::new(File::open(path)?))
}

fn element_token(element: &BytesStart<'_>) -> Result<XmlToken, crate::Error> {
    Ok(XmlToken::Element {
        name: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
        attributes: attributes(element)?,
    })
}

/// Name/value pairs in source order, values unescaped.
pub(super) fn attributes(element: &BytesStart<'_>) -> Result<Vec<(String, String)>, crate::Error> {
    let mut pairs = Vec::new();
    for attr in element.attributes() {
        let attr = attr?;
        pairs.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            attr.unescape_value()?.into_owned(),
        ));
    }
    Ok(pairs)
}
