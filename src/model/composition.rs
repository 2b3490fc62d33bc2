//! Composition structure: component prototypes and connectors.

use smol_str::SmolStr;

use crate::base::RefPath;

/// An instance of a component type inside a composition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentPrototype {
    pub name: SmolStr,
    /// Path of the instantiated component type (unresolved).
    pub type_ref: RefPath,
    /// Path of the owning composition.
    pub parent: Option<RefPath>,
}

impl ComponentPrototype {
    pub fn new(name: impl Into<SmolStr>, type_ref: impl Into<RefPath>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            parent: None,
        }
    }
}

/// A port of a specific component prototype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortInstanceRef {
    pub component_ref: RefPath,
    pub port_ref: RefPath,
}

impl PortInstanceRef {
    pub fn new(component_ref: impl Into<RefPath>, port_ref: impl Into<RefPath>) -> Self {
        Self {
            component_ref: component_ref.into(),
            port_ref: port_ref.into(),
        }
    }
}

/// Wiring between two sibling prototypes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblyConnector {
    pub name: SmolStr,
    pub provider: PortInstanceRef,
    pub requester: PortInstanceRef,
}

/// Wiring between an inner prototype port and the composition's own port.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelegationConnector {
    pub name: SmolStr,
    pub inner: PortInstanceRef,
    pub outer_port_ref: RefPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connector {
    Assembly(AssemblyConnector),
    Delegation(DelegationConnector),
}

impl Connector {
    pub fn name(&self) -> &str {
        match self {
            Connector::Assembly(c) => &c.name,
            Connector::Delegation(c) => &c.name,
        }
    }
}

/// The parts only a composition has.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionBody {
    /// Prototypes in document order.
    pub components: Vec<ComponentPrototype>,
    /// Connectors of both kinds, interleaved in document order.
    pub connectors: Vec<Connector>,
}

impl CompositionBody {
    pub fn assembly_connectors(&self) -> impl Iterator<Item = &AssemblyConnector> {
        self.connectors.iter().filter_map(|c| match c {
            Connector::Assembly(a) => Some(a),
            Connector::Delegation(_) => None,
        })
    }

    pub fn delegation_connectors(&self) -> impl Iterator<Item = &DelegationConnector> {
        self.connectors.iter().filter_map(|c| match c {
            Connector::Delegation(d) => Some(d),
            Connector::Assembly(_) => None,
        })
    }

    /// Find a prototype by name.
    pub fn component(&self, name: &str) -> Option<&ComponentPrototype> {
        self.components.iter().find(|c| c.name == name)
    }
}
