//! Port builder.

use tracing::warn;

use super::diagnostics::Diagnostic;
use super::helpers::{describe, require_text, short_name};
use super::parser::ComponentTypeParser;
use crate::base::RefPath;
use crate::error::Result;
use crate::model::{ComponentType, Port, PortDirection};
use crate::xml::XmlElement;

impl ComponentTypeParser {
    /// Build every port under one `PORTS` element and append each to the
    /// component's require or provide list.
    pub fn parse_ports(&mut self, ports: &XmlElement, component: &mut ComponentType) -> Result<()> {
        let component_path = component.ref_path();
        for child in ports.children() {
            match PortDirection::from_port_tag(child.tag()) {
                Some(direction) => {
                    let port = self.parse_port(child, direction, &component_path)?;
                    component.add_port(port);
                }
                None => {
                    warn!("Unhandled tag: {} in PORTS of {component_path}", child.tag());
                    self.report(
                        Diagnostic::unhandled_tag(child.tag(), "PORTS")
                            .with_context(component_path.clone()),
                    );
                }
            }
        }
        Ok(())
    }

    /// Build one `R-PORT-PROTOTYPE` or `P-PORT-PROTOTYPE`.
    pub fn parse_port(
        &mut self,
        elem: &XmlElement,
        direction: PortDirection,
        component_path: &RefPath,
    ) -> Result<Port> {
        let name = short_name(elem)?;
        let interface_ref = RefPath::from(require_text(elem, direction.interface_tag())?);
        let port_path = component_path.join(&name);
        let mut port = Port::new(name, direction, interface_ref.clone())
            .with_parent(component_path.clone());

        for spec_group in elem.children_named(direction.com_specs_tag()) {
            for spec in spec_group.children() {
                if let Some(com_spec) =
                    self.parse_com_spec(spec, direction, &interface_ref, &port_path)?
                {
                    port.com_specs.push(com_spec);
                }
            }
        }

        tracing::trace!(
            "Built {} with {} com spec(s)",
            describe(elem),
            port.com_specs.len()
        );
        Ok(port)
    }
}
