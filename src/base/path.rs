//! Reference paths.
//!
//! AUTOSAR documents refer to other elements by absolute, slash-delimited
//! paths built from `SHORT-NAME`s, e.g. `/ComponentTypes/Engine/SpeedPort`.
//! Paths are stored as plain strings; resolving them is the job of the
//! [`Workspace`](crate::workspace::Workspace).

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Split a reference path into its segments.
///
/// Empty segments (leading slash, doubled slashes) are dropped, so
/// `"/pkg/IFace/elem"` yields `["pkg", "IFace", "elem"]`.
pub fn split_ref(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// An absolute reference path.
///
/// Cheap to clone; the underlying string is shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefPath(Arc<str>);

impl RefPath {
    /// Create a path from a string, used as-is.
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// The root path (`/`), owner of top-level packages.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Append a child name to this path.
    pub fn join(&self, name: &str) -> Self {
        if self.0.ends_with('/') {
            Self(format!("{}{}", self.0, name).into())
        } else {
            Self(format!("{}/{}", self.0, name).into())
        }
    }

    /// The parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let segments = split_ref(&self.0);
        if segments.is_empty() {
            return None;
        }
        Some(Self(format!("/{}", segments[..segments.len() - 1].join("/")).into()))
    }

    /// The last segment of the path.
    pub fn name(&self) -> Option<&str> {
        split_ref(&self.0).pop()
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RefPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RefPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for RefPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RefPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RefPath {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for RefPath {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
