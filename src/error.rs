//! Unified error type for all loglet operations.

use crate::level::ParseLogTypeError;

/// Error type for loglet operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// A configuration key the caller relies on is absent.
    MissingKey(String),
    /// XML reading or writing error.
    Xml(quick_xml::Error),
    /// Well-formed XML that still does not make a document (no root, several roots, unclosed).
    Document(String),
    /// The external style-sheet processor failed or could not be started.
    Transform(String),
    /// Menu input that is not one of the known choices.
    InvalidChoice(String),
    /// Unknown log type name.
    UnknownLogType(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingKey(key) => write!(f, "missing config key: {key}"),
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Document(s) => write!(f, "malformed document: {s}"),
            Self::Transform(s) => write!(f, "transform error: {s}"),
            Self::InvalidChoice(s) => write!(f, "invalid choice: '{s}'"),
            Self::UnknownLogType(s) => write!(f, "unknown log type: '{s}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(quick_xml::Error::InvalidAttr(e))
    }
}

impl From<ParseLogTypeError> for Error {
    fn from(e: ParseLogTypeError) -> Self {
        Self::UnknownLogType(e.0)
    }
}
