use crate::base::SchemaVersion;
use crate::xml::XmlElement;

/// Schema version declared on a document root.
///
/// Tries `xsi:schemaLocation` first, then `xmlns`.
pub fn detect_version(root: &XmlElement) -> Option<SchemaVersion> {
    let from_location = root
        .attribute("xsi:schemaLocation")
        .and_then(SchemaVersion::from_schema_location);
    from_location.or_else(|| root.attribute("xmlns").and_then(SchemaVersion::from_namespace))
}
