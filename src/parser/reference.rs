//! Matching ComSpec references against the owning port's interface.
//!
//! A ComSpec names its data element or operation by full path, e.g.
//! `/PortInterfaces/Speed_I/speed`. The leaf is only accepted as the
//! ComSpec's name when the remaining prefix is exactly the interface the
//! port declares. The comparison is purely textual; nothing is resolved.

use smol_str::SmolStr;

use crate::base::split_ref;
use crate::xml::XmlElement;

/// Child holding a data element reference.
pub const DATA_ELEMENT_REF: &str = "DATA-ELEMENT-REF";
/// Child holding an operation reference.
pub const OPERATION_REF: &str = "OPERATION-REF";

/// Outcome of matching one reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefMatch {
    /// The prefix equals the interface reference; carries the leaf name.
    Matched(SmolStr),
    /// A reference exists but belongs to another interface.
    Mismatched { reference: String },
    /// No usable reference child.
    Absent,
}

impl RefMatch {
    pub fn name(&self) -> Option<SmolStr> {
        match self {
            RefMatch::Matched(name) => Some(name.clone()),
            RefMatch::Mismatched { .. } | RefMatch::Absent => None,
        }
    }
}

/// Match the reference stored in `elem`'s `ref_tag` child against
/// `interface_ref`.
pub fn match_reference(elem: &XmlElement, ref_tag: &str, interface_ref: &str) -> RefMatch {
    let Some(reference) = elem.child(ref_tag).and_then(XmlElement::text) else {
        return RefMatch::Absent;
    };
    match leaf_if_owned_by(reference, interface_ref) {
        Some(name) => RefMatch::Matched(SmolStr::new(name)),
        None if split_ref(reference).is_empty() => RefMatch::Absent,
        None => RefMatch::Mismatched {
            reference: reference.to_string(),
        },
    }
}

/// The last segment of `reference`, when the segments before it joined as
/// `/a/b` equal `interface_ref`.
pub fn leaf_if_owned_by<'a>(reference: &'a str, interface_ref: &str) -> Option<&'a str> {
    let mut segments = split_ref(reference);
    let leaf = segments.pop()?;
    let prefix = format!("/{}", segments.join("/"));
    (prefix == interface_ref).then_some(leaf)
}
