//! Foundation types for the arxml toolchain.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`SchemaVersion`] - AUTOSAR schema revision a document follows
//! - [`RefPath`] - Slash-delimited reference path (`/Pkg/Component/Port`)
//! - [`split_ref`] - Reference path splitting
//!
//! This module has NO dependencies on other arxml modules.

mod path;
mod version;

pub use path::{RefPath, split_ref};
pub use version::SchemaVersion;
