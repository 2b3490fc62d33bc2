//! # arxml-base
//!
//! Core library for parsing AUTOSAR software component descriptions
//! (schema 3.x and 4.x) into a cross-referenced component model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → File loading, version detection, package walk
//!   ↓
//! parser    → Element dispatch, component/port/ComSpec builders, diagnostics
//!   ↓
//! workspace → Entity arena + reference-path index
//!   ↓
//! model     → ComponentType, Port, ComSpec, composition, implementation
//!   ↓
//! xml       → Owned element tree over quick-xml
//!   ↓
//! base      → Primitives (RefPath, SchemaVersion)
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → model → workspace → parser → project)
// ============================================================================

/// Foundation types: reference paths, schema versions
pub mod base;

/// Owned XML element tree with path lookup
pub mod xml;

/// Software component model
pub mod model;

/// Registry of parsed entities
pub mod workspace;

/// Element-dispatch parser and builders
pub mod parser;

/// Document loading into a workspace
pub mod project;

mod error;

pub use error::{ParseError, Result};

// Re-export commonly needed items
pub use base::{RefPath, SchemaVersion};
pub use parser::{ComponentTypeParser, Diagnostic, Dispatch, ParsedElement, ParserOptions};
pub use project::ArxmlLoader;
pub use workspace::Workspace;
