//! Whole-document reading into an element tree, and rendering it back as compact XML.

use super::read::attributes;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, crate::Error> {
        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes: attributes(start)?,
            children: Vec::new(),
        })
    }

    /// First direct child element called `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.elements().find(|e| e.name == name)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of this element and its descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => out.push_str(&e.text()),
            }
        }
        out
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for node in &self.children {
            match node {
                XmlNode::Text(t) => out.push_str(&escape(t)),
                XmlNode::Element(e) => e.write_xml(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// A parsed document. Whitespace between elements is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Declaration body, e.g. `xml version="1.0" encoding="utf-8"`.
    pub declaration: Option<String>,
    pub root: XmlElement,
}

impl Document {
    /// # Errors
    /// Returns the XML error for malformed input, or [`crate::Error::Document`] when the
    /// input has no root, several roots, or unclosed elements.
    pub fn parse<R: BufRead>(source: R) -> Result<Self, crate::Error> {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);

        let mut declaration = None;
        let mut root = None;
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Decl(d) => declaration = Some(String::from_utf8_lossy(&d).into_owned()),
                Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
                Event::Empty(e) => attach(&mut stack, &mut root, XmlElement::from_start(&e)?)?,
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    if let Some(parent) = stack.last_mut()
                        && !text.trim().is_empty()
                    {
                        parent.children.push(XmlNode::Text(text.into_owned()));
                    }
                }
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&e).into_owned();
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(crate::Error::Document(format!(
                "unclosed element <{}>",
                open.name
            )));
        }
        let root = root.ok_or_else(|| crate::Error::Document("no root element".to_string()))?;

        Ok(Self { declaration, root })
    }

    /// # Errors
    /// Returns the I/O error opening `path`, or any error from [`Document::parse`].
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        Self::parse(BufReader::new(File::open(path)?))
    }

    /// The whole document on one line, declaration included.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        if let Some(decl) = &self.declaration {
            out.push_str("<?");
            out.push_str(decl);
            out.push_str("?>");
        }
        self.root.write_xml(&mut out);
        out
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), crate::Error> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(crate::Error::Document(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Orders>
  <Order Id="1">
    <Customer>A &amp; B</Customer>
    <Products />
  </Order>
</Orders>
"#;

    #[test]
    fn parse_builds_nested_tree() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc.root.name, "Orders");

        let order = doc.root.child("Order").unwrap();
        assert_eq!(order.attribute("Id"), Some("1"));
        assert_eq!(order.child("Customer").unwrap().text(), "A & B");
        assert!(order.child("Products").unwrap().children.is_empty());
    }

    #[test]
    fn outer_xml_is_compact_and_escaped() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            doc.to_xml_string(),
            r#"<?xml version="1.0" encoding="utf-8"?><Orders><Order Id="1"><Customer>A &amp; B</Customer><Products /></Order></Orders>"#
        );
    }

    #[test]
    fn unclosed_element_is_an_error() {
        let err = Document::parse("<a><b></b>".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Document(_) | crate::Error::Xml(_)
        ));
    }

    #[test]
    fn two_roots_are_an_error() {
        let err = Document::parse("<a/><b/>".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::Error::Document(_)));
    }

    #[test]
    fn empty_input_has_no_root() {
        let err = Document::parse("".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::Error::Document(_)));
    }
}
