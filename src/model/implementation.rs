use smol_str::SmolStr;

use crate::base::RefPath;

/// Implementation of a component's internal behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwcImplementation {
    pub name: SmolStr,
    /// Path of the implemented behavior (unresolved).
    pub behavior_ref: RefPath,
    /// Path of the owning package.
    pub parent: Option<RefPath>,
}

impl SwcImplementation {
    pub fn new(name: impl Into<SmolStr>, behavior_ref: impl Into<RefPath>) -> Self {
        Self {
            name: name.into(),
            behavior_ref: behavior_ref.into(),
            parent: None,
        }
    }

    /// This implementation's own reference path.
    pub fn ref_path(&self) -> RefPath {
        match &self.parent {
            Some(parent) => parent.join(&self.name),
            None => RefPath::root().join(&self.name),
        }
    }
}
