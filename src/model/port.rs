//! Ports.

use smol_str::SmolStr;

use super::comspec::ComSpec;
use crate::base::RefPath;

/// Whether a port consumes (require) or offers (provide) its interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortDirection {
    Require,
    Provide,
}

impl PortDirection {
    /// The port element's tag.
    pub fn port_tag(&self) -> &'static str {
        match self {
            PortDirection::Require => "R-PORT-PROTOTYPE",
            PortDirection::Provide => "P-PORT-PROTOTYPE",
        }
    }

    /// The child holding the interface reference.
    pub fn interface_tag(&self) -> &'static str {
        match self {
            PortDirection::Require => "REQUIRED-INTERFACE-TREF",
            PortDirection::Provide => "PROVIDED-INTERFACE-TREF",
        }
    }

    /// The child grouping the port's ComSpecs.
    pub fn com_specs_tag(&self) -> &'static str {
        match self {
            PortDirection::Require => "REQUIRED-COM-SPECS",
            PortDirection::Provide => "PROVIDED-COM-SPECS",
        }
    }

    pub fn from_port_tag(tag: &str) -> Option<Self> {
        match tag {
            "R-PORT-PROTOTYPE" => Some(PortDirection::Require),
            "P-PORT-PROTOTYPE" => Some(PortDirection::Provide),
            _ => None,
        }
    }
}

/// A named interaction point on a component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Port {
    pub name: SmolStr,
    pub direction: PortDirection,
    /// Path of the port interface, e.g. `/PortInterfaces/VehicleSpeed_I`.
    pub interface_ref: RefPath,
    /// ComSpecs in document order.
    pub com_specs: Vec<ComSpec>,
    /// Path of the owning component.
    pub parent: Option<RefPath>,
}

impl Port {
    pub fn new(
        name: impl Into<SmolStr>,
        direction: PortDirection,
        interface_ref: impl Into<RefPath>,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            interface_ref: interface_ref.into(),
            com_specs: Vec::new(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: RefPath) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn is_require(&self) -> bool {
        self.direction == PortDirection::Require
    }

    pub fn is_provide(&self) -> bool {
        self.direction == PortDirection::Provide
    }

    /// Find a ComSpec by operation/data element name.
    pub fn com_spec(&self, name: &str) -> Option<&ComSpec> {
        self.com_specs.iter().find(|c| c.name() == Some(name))
    }
}
