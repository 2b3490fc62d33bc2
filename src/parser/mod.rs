//! Element-dispatch parser for software component descriptions.
//!
//! Works on an already-read [`XmlElement`](crate::xml::XmlElement) tree:
//!
//! ```text
//! XmlElement (top-level, e.g. APPLICATION-SW-COMPONENT-TYPE)
//!     ↓
//! parse_element → ElementTag (per schema version)
//!     ↓
//! builder (component / composition / implementation)
//!     ↓
//! ParsedElement + Diagnostics
//! ```
//!
//! Problems that make the result meaningless are [`ParseError`](crate::ParseError)s.
//! Anything merely skipped or left unresolved is a [`Diagnostic`].

#[allow(clippy::module_inception)]
mod parser;

mod behavior;
mod component;
mod composition;
mod comspec;
mod diagnostics;
mod dispatch;
pub mod helpers;
mod implementation;
mod options;
mod port;
mod reference;

pub use behavior::{BehaviorParser, SwcBehaviorParser};
pub use component::ComponentTag;
pub use composition::{parse_components, parse_connectors};
pub use comspec::ComSpecTag;
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use dispatch::{Dispatch, ElementTag, ParsedElement};
pub use options::ParserOptions;
pub use parser::ComponentTypeParser;
pub use reference::{DATA_ELEMENT_REF, OPERATION_REF, RefMatch, leaf_if_owned_by, match_reference};
