//! Internal behavior, as far as the component parser needs it.

use smol_str::SmolStr;

use crate::base::RefPath;

/// The runnable description owned by one component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalBehavior {
    pub name: SmolStr,
    /// Path of the owning component.
    pub component_ref: RefPath,
    pub multiple_instance: bool,
    pub runnables: Vec<RunnableEntity>,
}

impl InternalBehavior {
    pub fn new(name: impl Into<SmolStr>, component_ref: RefPath) -> Self {
        Self {
            name: name.into(),
            component_ref,
            multiple_instance: false,
            runnables: Vec::new(),
        }
    }

    /// This behavior's own reference path.
    pub fn ref_path(&self) -> RefPath {
        self.component_ref.join(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunnableEntity {
    pub name: SmolStr,
    pub symbol: Option<String>,
}
