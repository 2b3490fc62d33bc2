//! Implementation builder and behavior back-reference linking.

use super::diagnostics::Diagnostic;
use super::helpers::{require_text, short_name};
use super::parser::ComponentTypeParser;
use crate::base::RefPath;
use crate::error::{ParseError, Result};
use crate::model::SwcImplementation;
use crate::workspace::{Found, Workspace};
use crate::xml::XmlElement;

impl ComponentTypeParser {
    /// Build an `SWC-IMPLEMENTATION` and link it to its component.
    ///
    /// The behavior named by `BEHAVIOR-REF` and the component owning it
    /// must already be registered in `workspace`; when either lookup misses,
    /// the implementation is still returned and an unresolved-reference
    /// hint is recorded.
    pub fn parse_swc_implementation(
        &mut self,
        elem: &XmlElement,
        parent: Option<&RefPath>,
        workspace: Option<&mut Workspace>,
    ) -> Result<SwcImplementation> {
        let workspace = workspace.ok_or_else(|| ParseError::WorkspaceUnavailable {
            element: elem.tag().to_string(),
        })?;

        let mut implementation =
            SwcImplementation::new(short_name(elem)?, require_text(elem, "BEHAVIOR-REF")?);
        implementation.parent = parent.cloned();
        let impl_path = implementation.ref_path();

        let component_ref = match workspace.find(implementation.behavior_ref.as_str()) {
            Some(Found::Behavior(behavior)) => behavior.component_ref.clone(),
            _ => {
                self.report(
                    Diagnostic::unresolved_reference(implementation.behavior_ref.as_str())
                        .with_context(impl_path),
                );
                return Ok(implementation);
            }
        };

        match workspace.component_mut(component_ref.as_str()) {
            Some(component) => {
                tracing::trace!("Linked {impl_path} to {component_ref}");
                component.implementation = Some(impl_path);
            }
            None => self.report(
                Diagnostic::unresolved_reference(component_ref.as_str()).with_context(impl_path),
            ),
        }
        Ok(implementation)
    }
}
