//! ComSpec builder.
//!
//! Which spec tags are legal depends on the port direction; the two
//! vocabularies do not overlap.

use tracing::debug;

use super::diagnostics::Diagnostic;
use super::helpers::{describe, optional_int, optional_text, require_int};
use super::parser::ComponentTypeParser;
use super::reference::{DATA_ELEMENT_REF, OPERATION_REF, RefMatch, match_reference};
use crate::base::RefPath;
use crate::error::{ParseError, Result};
use crate::model::{ComSpec, DataElementComSpec, OperationComSpec, PortDirection};
use crate::xml::XmlElement;

/// Every spec tag either vocabulary knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComSpecTag {
    // Require-port vocabulary
    Client,
    NonqueuedReceiver,
    QueuedReceiver,
    ModeSwitchReceiver,
    ParameterRequire,
    // Provide-port vocabulary
    Server,
    NonqueuedSender,
    QueuedSender,
}

impl ComSpecTag {
    /// Classify a spec tag for a port of the given direction.
    ///
    /// Returns `None` for tags outside that direction's vocabulary.
    pub fn parse(tag: &str, direction: PortDirection) -> Option<Self> {
        match direction {
            PortDirection::Require => match tag {
                "CLIENT-COM-SPEC" => Some(Self::Client),
                "UNQUEUED-RECEIVER-COM-SPEC" | "NONQUEUED-RECEIVER-COM-SPEC" => {
                    Some(Self::NonqueuedReceiver)
                }
                "QUEUED-RECEIVER-COM-SPEC" => Some(Self::QueuedReceiver),
                "MODE-SWITCH-RECEIVER-COM-SPEC" => Some(Self::ModeSwitchReceiver),
                "PARAMETER-REQUIRE-COM-SPEC" => Some(Self::ParameterRequire),
                _ => None,
            },
            PortDirection::Provide => match tag {
                "SERVER-COM-SPEC" => Some(Self::Server),
                "UNQUEUED-SENDER-COM-SPEC" | "NONQUEUED-SENDER-COM-SPEC" => {
                    Some(Self::NonqueuedSender)
                }
                "QUEUED-SENDER-COM-SPEC" => Some(Self::QueuedSender),
                _ => None,
            },
        }
    }

    /// Recognised but not modelled; produces no ComSpec.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::ModeSwitchReceiver | Self::ParameterRequire)
    }
}

impl ComponentTypeParser {
    /// Build the ComSpec for one child of a port's spec group.
    ///
    /// `Ok(None)` means the tag is recognised but deferred.
    pub fn parse_com_spec(
        &mut self,
        elem: &XmlElement,
        direction: PortDirection,
        interface_ref: &RefPath,
        port_path: &RefPath,
    ) -> Result<Option<ComSpec>> {
        let tag = ComSpecTag::parse(elem.tag(), direction).ok_or_else(|| {
            ParseError::unsupported(elem.tag(), format!("{} {port_path}", direction.port_tag()))
        })?;

        let com_spec = match tag {
            ComSpecTag::Client => {
                let name = self.reference_name(elem, OPERATION_REF, interface_ref, port_path);
                ComSpec::Operation(OperationComSpec::new(name))
            }
            ComSpecTag::Server => {
                let name = self.reference_name(elem, OPERATION_REF, interface_ref, port_path);
                let mut spec = OperationComSpec::new(name);
                spec.queue_length = Some(require_int(elem, "QUEUE-LENGTH")?);
                ComSpec::Operation(spec)
            }
            ComSpecTag::NonqueuedReceiver => {
                let name = self.reference_name(elem, DATA_ELEMENT_REF, interface_ref, port_path);
                let mut spec = DataElementComSpec::new(name);
                spec.alive_timeout = optional_text(elem, "ALIVE-TIMEOUT");
                spec.init_value_ref = self.init_value_ref(elem);
                ComSpec::DataElement(spec)
            }
            ComSpecTag::QueuedReceiver => {
                let name = self.reference_name(elem, DATA_ELEMENT_REF, interface_ref, port_path);
                let mut spec = DataElementComSpec::new(name);
                spec.queue_length = optional_int(elem, "QUEUE-LENGTH")?;
                ComSpec::DataElement(spec)
            }
            ComSpecTag::NonqueuedSender => {
                let name = self.reference_name(elem, DATA_ELEMENT_REF, interface_ref, port_path);
                let mut spec = DataElementComSpec::new(name);
                spec.init_value_ref = self.init_value_ref(elem);
                spec.can_invalidate = elem
                    .child("CAN-INVALIDATE")
                    .map(|flag| flag.text() == Some("true"));
                ComSpec::DataElement(spec)
            }
            ComSpecTag::QueuedSender => {
                let name = self.reference_name(elem, DATA_ELEMENT_REF, interface_ref, port_path);
                ComSpec::DataElement(DataElementComSpec::new(name))
            }
            ComSpecTag::ModeSwitchReceiver | ComSpecTag::ParameterRequire => {
                debug!("Skipping deferred {} in {port_path}", describe(elem));
                self.report(Diagnostic::deferred_com_spec(elem.tag()).with_context(port_path.clone()));
                return Ok(None);
            }
        };

        Ok(Some(com_spec))
    }

    fn reference_name(
        &mut self,
        elem: &XmlElement,
        ref_tag: &str,
        interface_ref: &RefPath,
        port_path: &RefPath,
    ) -> Option<smol_str::SmolStr> {
        let matched = match_reference(elem, ref_tag, interface_ref.as_str());
        if let RefMatch::Mismatched { reference } = &matched {
            self.report(
                Diagnostic::unmatched_reference(reference, interface_ref.as_str())
                    .with_context(port_path.clone()),
            );
        }
        matched.name()
    }

    /// Constant reference used as initial value.
    ///
    /// Schema 4.x wraps it as `INIT-VALUE/CONSTANT-REFERENCE/CONSTANT-REF`;
    /// 3.x has `INIT-VALUE-REF` directly under the spec.
    fn init_value_ref(&self, elem: &XmlElement) -> Option<String> {
        if self.options.version.is_v4() {
            elem.child("INIT-VALUE")?;
            optional_text(elem, "INIT-VALUE/CONSTANT-REFERENCE/CONSTANT-REF")
        } else {
            optional_text(elem, "INIT-VALUE-REF")
        }
    }
}
