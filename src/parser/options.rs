//! Parser options

use crate::base::SchemaVersion;

/// Options for component parsing
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Schema revision the document follows
    pub version: SchemaVersion,
    /// Record hint diagnostics for unmatched ComSpec references and
    /// unresolved registry lookups
    pub record_reference_hints: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            version: SchemaVersion::default(),
            record_reference_hints: true,
        }
    }
}

impl ParserOptions {
    /// Options for the given schema version, other settings at default
    pub fn for_version(version: SchemaVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}
