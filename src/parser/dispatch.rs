//! Top-level element dispatch.
//!
//! Each schema family has its own tag vocabulary. A tag outside the
//! vocabulary of the parser's version is not an error here; the caller
//! gets [`Dispatch::NotSupported`] and decides.

use super::component::ComponentTag;
use super::parser::ComponentTypeParser;
use crate::base::{RefPath, SchemaVersion};
use crate::error::Result;
use crate::model::{ComponentType, SwcImplementation};
use crate::workspace::Workspace;
use crate::xml::XmlElement;

const V3_TAGS: &[&str] = &[
    "APPLICATION-SOFTWARE-COMPONENT-TYPE",
    "COMPLEX-DEVICE-DRIVER-COMPONENT-TYPE",
    "SWC-IMPLEMENTATION",
    "COMPOSITION-TYPE",
    "CALPRM-COMPONENT-TYPE",
    "SERVICE-COMPONENT-TYPE",
];

const V4_TAGS: &[&str] = &["APPLICATION-SW-COMPONENT-TYPE", "SWC-IMPLEMENTATION"];

/// Top-level tags the dispatcher routes to a builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementTag {
    Component(ComponentTag),
    Implementation,
}

impl ElementTag {
    /// Classify `tag` against the vocabulary of `version`.
    pub fn parse(tag: &str, version: SchemaVersion) -> Option<Self> {
        if !Self::supported_tags(version).contains(&tag) {
            return None;
        }
        match tag {
            "SWC-IMPLEMENTATION" => Some(Self::Implementation),
            other => ComponentTag::parse(other).map(Self::Component),
        }
    }

    /// Tags handled for `version`.
    pub fn supported_tags(version: SchemaVersion) -> &'static [&'static str] {
        if version.is_v4() { V4_TAGS } else { V3_TAGS }
    }
}

/// An entity built from a top-level element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedElement {
    Component(ComponentType),
    Implementation(SwcImplementation),
}

impl ParsedElement {
    pub fn ref_path(&self) -> RefPath {
        match self {
            ParsedElement::Component(c) => c.ref_path(),
            ParsedElement::Implementation(i) => i.ref_path(),
        }
    }
}

/// Outcome of [`ComponentTypeParser::parse_element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled(ParsedElement),
    NotSupported,
}

impl ComponentTypeParser {
    /// Route a top-level element to its builder.
    ///
    /// The built entity is returned, not registered; registering it in the
    /// workspace is the caller's job. `workspace` is only consulted for
    /// implementations.
    pub fn parse_element(
        &mut self,
        elem: &XmlElement,
        parent: Option<&RefPath>,
        workspace: Option<&mut Workspace>,
    ) -> Result<Dispatch> {
        let Some(tag) = ElementTag::parse(elem.tag(), self.version()) else {
            tracing::trace!("No handler for <{}> in schema {}", elem.tag(), self.version());
            return Ok(Dispatch::NotSupported);
        };
        tracing::trace!("Dispatching <{}> as {tag:?}", elem.tag());

        let parsed = match tag {
            ElementTag::Component(_) => ParsedElement::Component(self.parse_component_type(elem, parent)?),
            ElementTag::Implementation => {
                ParsedElement::Implementation(self.parse_swc_implementation(elem, parent, workspace)?)
            }
        };
        Ok(Dispatch::Handled(parsed))
    }
}
