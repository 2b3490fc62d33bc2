//! AUTOSAR schema revisions.
//!
//! The 3.x and 4.x schema families use different tag vocabularies for the
//! same concepts, so every parser is constructed for one version.

use std::fmt;

/// Schema revision a document conforms to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::V4_0
    }
}

impl SchemaVersion {
    pub const V3_0: Self = Self::new(3, 0, 0);
    pub const V4_0: Self = Self::new(4, 0, 0);

    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted or dashed version string (`"4.2.2"`, `"3-0-2"`, `"3.0"`).
    ///
    /// Missing minor/patch components default to zero.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split(['.', '-']);
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }

    /// Schema 4.0 or later.
    pub fn is_v4(&self) -> bool {
        self.major >= 4
    }

    /// Schema 3.x.
    pub fn is_v3(&self) -> bool {
        self.major == 3
    }

    /// Detect the version from an `xsi:schemaLocation` attribute value.
    ///
    /// Recognises `AUTOSAR_4-2-2.xsd` / `autosar_3-0-2.xsd` style file names
    /// and the numbered release schemas (`AUTOSAR_00046.xsd`), which are all 4.x.
    pub fn from_schema_location(location: &str) -> Option<Self> {
        let file = location.split_whitespace().last()?;
        let stem = file.strip_suffix(".xsd").unwrap_or(file);
        let (prefix, rest) = stem.split_once('_')?;
        if !prefix.eq_ignore_ascii_case("autosar") {
            return None;
        }
        if rest.len() == 5 && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Self::V4_0);
        }
        Self::parse(rest)
    }

    /// Detect the version from the default `xmlns` of the root element.
    ///
    /// `http://autosar.org/3.0.2` carries a full version, while
    /// `http://autosar.org/schema/r4.0` only names the major revision.
    pub fn from_namespace(namespace: &str) -> Option<Self> {
        let tail = namespace.trim_end_matches('/').rsplit('/').next()?;
        let tail = tail.strip_prefix('r').unwrap_or(tail);
        Self::parse(tail)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
