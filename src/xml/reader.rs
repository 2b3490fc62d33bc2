//! Building an [`XmlElement`] tree from `quick-xml` events.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::tree::XmlElement;
use crate::error::{ParseError, Result};

/// A parsed XML document.
#[derive(Clone, Debug)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Parse a document from bytes.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(start_element(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    let element = start_element(e)?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| ParseError::xml("Unbalanced end tag"))?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| ParseError::xml(format!("Text error: {e}")))?;
                    if let Some(current) = stack.last_mut() {
                        current.append_text(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    let text = std::str::from_utf8(e)
                        .map_err(|e| ParseError::xml(format!("Invalid UTF-8 in CDATA: {e}")))?;
                    if let Some(current) = stack.last_mut() {
                        current.append_text(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParseError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(ParseError::xml(format!(
                "Unexpected end of document inside <{}>",
                stack.last().map(XmlElement::tag).unwrap_or_default()
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| ParseError::xml("Document has no root element"))
    }

    /// Parse a document from a string.
    pub fn parse_str(input: &str) -> Result<Self> {
        Self::parse(input.as_bytes())
    }

    /// The document's root element.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Consume the document and return its root element.
    pub fn into_root(self) -> XmlElement {
        self.root
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement> {
    let name_bytes = e.name();
    let tag_name = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|e| ParseError::xml(format!("Invalid tag name: {e}")))?;
    let mut element = XmlElement::new(tag_name);

    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| ParseError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ParseError::xml(format!("Attribute key error: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::xml(format!("Attribute value error: {e}")))?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(ParseError::xml("Multiple root elements")),
    }
    Ok(())
}
