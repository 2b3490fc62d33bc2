//! Component types.

use smol_str::SmolStr;

use super::behavior::InternalBehavior;
use super::composition::CompositionBody;
use super::port::{Port, PortDirection};
use crate::base::RefPath;

/// The component type variant.
///
/// Only compositions carry extra structure; the atomic variants differ in
/// semantic role alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    Application,
    ComplexDeviceDriver,
    Service,
    Parameter,
    Composition(CompositionBody),
}

impl ComponentKind {
    pub fn is_composition(&self) -> bool {
        matches!(self, ComponentKind::Composition(_))
    }

    /// Human-readable kind name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Application => "application component",
            ComponentKind::ComplexDeviceDriver => "complex device driver component",
            ComponentKind::Service => "service component",
            ComponentKind::Parameter => "parameter component",
            ComponentKind::Composition(_) => "composition component",
        }
    }
}

/// A reusable unit of software architecture exposing ports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentType {
    pub name: SmolStr,
    /// Path of the owning package.
    pub parent: Option<RefPath>,
    pub kind: ComponentKind,
    pub require_ports: Vec<Port>,
    pub provide_ports: Vec<Port>,
    pub behavior: Option<InternalBehavior>,
    /// Path of the implementation linked to this component's behavior.
    pub implementation: Option<RefPath>,
}

impl ComponentType {
    pub fn new(name: impl Into<SmolStr>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            parent: None,
            kind,
            require_ports: Vec::new(),
            provide_ports: Vec::new(),
            behavior: None,
            implementation: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<RefPath>) -> Self {
        self.parent = parent;
        self
    }

    /// This component's own reference path.
    pub fn ref_path(&self) -> RefPath {
        match &self.parent {
            Some(parent) => parent.join(&self.name),
            None => RefPath::root().join(&self.name),
        }
    }

    /// Append a port to the list matching its direction.
    pub fn add_port(&mut self, port: Port) {
        match port.direction {
            PortDirection::Require => self.require_ports.push(port),
            PortDirection::Provide => self.provide_ports.push(port),
        }
    }

    /// Find a port of either direction by name.
    pub fn find_port(&self, name: &str) -> Option<&Port> {
        self.require_ports
            .iter()
            .chain(self.provide_ports.iter())
            .find(|p| p.name == name)
    }

    pub fn composition(&self) -> Option<&CompositionBody> {
        match &self.kind {
            ComponentKind::Composition(body) => Some(body),
            _ => None,
        }
    }

    pub fn composition_mut(&mut self) -> Option<&mut CompositionBody> {
        match &mut self.kind {
            ComponentKind::Composition(body) => Some(body),
            _ => None,
        }
    }
}
