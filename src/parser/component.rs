//! Component type builder.

use tracing::warn;

use super::diagnostics::Diagnostic;
use super::helpers::{describe, short_name};
use super::parser::ComponentTypeParser;
use crate::base::RefPath;
use crate::error::{ParseError, Result};
use crate::model::{ComponentKind, ComponentType};
use crate::xml::XmlElement;

const INTERNAL_BEHAVIOR: &str = "SWC-INTERNAL-BEHAVIOR";

/// Tags that build a [`ComponentType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    /// `APPLICATION-SOFTWARE-COMPONENT-TYPE` (3.x) or
    /// `APPLICATION-SW-COMPONENT-TYPE` (4.x).
    Application,
    ComplexDeviceDriver,
    Service,
    Parameter,
    Composition,
}

impl ComponentTag {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "APPLICATION-SOFTWARE-COMPONENT-TYPE" | "APPLICATION-SW-COMPONENT-TYPE" => {
                Some(Self::Application)
            }
            "COMPLEX-DEVICE-DRIVER-COMPONENT-TYPE" => Some(Self::ComplexDeviceDriver),
            "SERVICE-COMPONENT-TYPE" => Some(Self::Service),
            "CALPRM-COMPONENT-TYPE" => Some(Self::Parameter),
            "COMPOSITION-TYPE" => Some(Self::Composition),
            _ => None,
        }
    }

    /// Kind for the atomic tags; `None` for compositions.
    fn atomic_kind(self) -> Option<ComponentKind> {
        match self {
            Self::Application => Some(ComponentKind::Application),
            Self::ComplexDeviceDriver => Some(ComponentKind::ComplexDeviceDriver),
            Self::Service => Some(ComponentKind::Service),
            Self::Parameter => Some(ComponentKind::Parameter),
            Self::Composition => None,
        }
    }
}

/// Direct children an atomic component handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ComponentChild {
    ShortName,
    Ports,
    InternalBehaviors,
}

impl ComponentChild {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "SHORT-NAME" => Some(Self::ShortName),
            "PORTS" => Some(Self::Ports),
            "INTERNAL-BEHAVIORS" => Some(Self::InternalBehaviors),
            _ => None,
        }
    }
}

impl ComponentTypeParser {
    /// Build a component type of any supported variant.
    ///
    /// `parent` is the path of the owning package.
    pub fn parse_component_type(
        &mut self,
        elem: &XmlElement,
        parent: Option<&RefPath>,
    ) -> Result<ComponentType> {
        let tag = ComponentTag::parse(elem.tag()).ok_or_else(|| {
            ParseError::unsupported(elem.tag(), parent.map_or_else(|| "/".to_string(), |p| p.to_string()))
        })?;
        match tag.atomic_kind() {
            Some(kind) => self.parse_atomic_component(elem, kind, parent),
            None => self.parse_composition_type(elem, parent),
        }
    }

    fn parse_atomic_component(
        &mut self,
        elem: &XmlElement,
        kind: ComponentKind,
        parent: Option<&RefPath>,
    ) -> Result<ComponentType> {
        let mut swc = ComponentType::new(short_name(elem)?, kind).with_parent(parent.cloned());
        let path = swc.ref_path();

        for child in elem.children() {
            match ComponentChild::parse(child.tag()) {
                Some(ComponentChild::ShortName) => {}
                Some(ComponentChild::Ports) => self.parse_ports(child, &mut swc)?,
                Some(ComponentChild::InternalBehaviors) => {
                    let mut behaviors = child.children_named(INTERNAL_BEHAVIOR);
                    let Some(first) = behaviors.next() else {
                        continue;
                    };
                    if behaviors.next().is_some() || swc.behavior.is_some() {
                        return Err(ParseError::MultipleInternalBehaviors {
                            component: path.to_string(),
                        });
                    }
                    swc.behavior = Some(self.behavior_parser.parse_internal_behavior(first, &path)?);
                }
                None => {
                    warn!("Unhandled tag: {} in {}", child.tag(), describe(elem));
                    self.report(
                        Diagnostic::unhandled_tag(child.tag(), elem.tag()).with_context(path.clone()),
                    );
                }
            }
        }
        Ok(swc)
    }
}
