//! Text and integer readers shared by the element builders.

use smol_str::SmolStr;

use crate::error::{ParseError, Result};
use crate::xml::XmlElement;

/// `TAG name` for error context, falling back to the bare tag.
pub fn describe(elem: &XmlElement) -> String {
    match elem.text_at("SHORT-NAME") {
        Some(name) => format!("{} {}", elem.tag(), name),
        None => elem.tag().to_string(),
    }
}

/// Text at `path`, if the element exists and has text.
pub fn optional_text(elem: &XmlElement, path: &str) -> Option<String> {
    elem.text_at(path).map(str::to_string)
}

/// Text at `path`; absent element or empty text is an error.
pub fn require_text<'a>(elem: &'a XmlElement, path: &str) -> Result<&'a str> {
    elem.text_at(path)
        .ok_or_else(|| ParseError::missing(path, describe(elem)))
}

/// The element's `SHORT-NAME`.
pub fn short_name(elem: &XmlElement) -> Result<SmolStr> {
    require_text(elem, "SHORT-NAME").map(SmolStr::new)
}

/// Integer at `path`, if present.
pub fn optional_int(elem: &XmlElement, path: &str) -> Result<Option<u32>> {
    elem.text_at(path).map(|text| parse_int(path, text)).transpose()
}

/// Integer at `path`; absent or non-numeric text is an error.
pub fn require_int(elem: &XmlElement, path: &str) -> Result<u32> {
    parse_int(path, require_text(elem, path)?)
}

fn parse_int(path: &str, text: &str) -> Result<u32> {
    text.trim().parse().map_err(|_| ParseError::InvalidInteger {
        path: path.to_string(),
        value: text.to_string(),
    })
}
