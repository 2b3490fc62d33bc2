//! Composition builder: prototypes and connectors.
//!
//! Unlike atomic components, every child of a composition must be
//! handled; an unknown tag aborts the parse.

use super::helpers::{describe, require_text, short_name};
use super::parser::ComponentTypeParser;
use crate::base::RefPath;
use crate::error::{ParseError, Result};
use crate::model::{
    AssemblyConnector, ComponentKind, ComponentPrototype, ComponentType, CompositionBody,
    Connector, DelegationConnector, PortInstanceRef,
};
use crate::xml::XmlElement;

/// Direct children a composition may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CompositionChild {
    ShortName,
    Ports,
    Components,
    Connectors,
}

impl CompositionChild {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "SHORT-NAME" => Some(Self::ShortName),
            "PORTS" => Some(Self::Ports),
            "COMPONENTS" => Some(Self::Components),
            "CONNECTORS" => Some(Self::Connectors),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConnectorTag {
    Assembly,
    Delegation,
}

impl ConnectorTag {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ASSEMBLY-CONNECTOR-PROTOTYPE" => Some(Self::Assembly),
            "DELEGATION-CONNECTOR-PROTOTYPE" => Some(Self::Delegation),
            _ => None,
        }
    }
}

impl ComponentTypeParser {
    /// Build a `COMPOSITION-TYPE`.
    pub fn parse_composition_type(
        &mut self,
        elem: &XmlElement,
        parent: Option<&RefPath>,
    ) -> Result<ComponentType> {
        let mut swc = ComponentType::new(
            short_name(elem)?,
            ComponentKind::Composition(CompositionBody::default()),
        )
        .with_parent(parent.cloned());
        let path = swc.ref_path();

        for child in elem.children() {
            let kind = CompositionChild::parse(child.tag())
                .ok_or_else(|| ParseError::unsupported(child.tag(), describe(elem)))?;
            match kind {
                CompositionChild::ShortName => {}
                CompositionChild::Ports => self.parse_ports(child, &mut swc)?,
                CompositionChild::Components => {
                    let components = parse_components(child, &path)?;
                    if let Some(body) = swc.composition_mut() {
                        body.components.extend(components);
                    }
                }
                CompositionChild::Connectors => {
                    let connectors = parse_connectors(child)?;
                    if let Some(body) = swc.composition_mut() {
                        body.connectors.extend(connectors);
                    }
                }
            }
        }
        Ok(swc)
    }
}

/// Build the prototypes under `COMPONENTS`.
pub fn parse_components(elem: &XmlElement, composition: &RefPath) -> Result<Vec<ComponentPrototype>> {
    elem.children()
        .map(|child| match child.tag() {
            "COMPONENT-PROTOTYPE" => {
                let mut prototype =
                    ComponentPrototype::new(short_name(child)?, require_text(child, "TYPE-TREF")?);
                prototype.parent = Some(composition.clone());
                Ok(prototype)
            }
            other => Err(ParseError::unsupported(other, format!("COMPONENTS of {composition}"))),
        })
        .collect()
}

/// Build the connectors under `CONNECTORS`, in document order.
pub fn parse_connectors(elem: &XmlElement) -> Result<Vec<Connector>> {
    elem.children()
        .map(|child| {
            let tag = ConnectorTag::parse(child.tag())
                .ok_or_else(|| ParseError::unsupported(child.tag(), describe(elem)))?;
            let name = short_name(child)?;
            Ok(match tag {
                ConnectorTag::Assembly => Connector::Assembly(AssemblyConnector {
                    name,
                    provider: instance_ref(
                        child,
                        "PROVIDER-IREF/COMPONENT-PROTOTYPE-REF",
                        "PROVIDER-IREF/P-PORT-PROTOTYPE-REF",
                    )?,
                    requester: instance_ref(
                        child,
                        "REQUESTER-IREF/COMPONENT-PROTOTYPE-REF",
                        "REQUESTER-IREF/R-PORT-PROTOTYPE-REF",
                    )?,
                }),
                ConnectorTag::Delegation => Connector::Delegation(DelegationConnector {
                    name,
                    inner: instance_ref(
                        child,
                        "INNER-PORT-IREF/COMPONENT-PROTOTYPE-REF",
                        "INNER-PORT-IREF/PORT-PROTOTYPE-REF",
                    )?,
                    outer_port_ref: RefPath::from(require_text(child, "OUTER-PORT-REF")?),
                }),
            })
        })
        .collect()
}

fn instance_ref(elem: &XmlElement, component_path: &str, port_path: &str) -> Result<PortInstanceRef> {
    Ok(PortInstanceRef::new(
        require_text(elem, component_path)?,
        require_text(elem, port_path)?,
    ))
}
