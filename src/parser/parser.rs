//! Parser state shared by the element builders.
//!
//! The builders themselves live in sibling modules as `impl` blocks on
//! [`ComponentTypeParser`]:
//!
//! ```text
//! dispatch        parse_element          (tag + version -> builder)
//!   component     parse_component_type   (variant, ports, behavior)
//!     composition parse_composition_type (prototypes, connectors)
//!     port        parse_ports            (R/P ports)
//!       comspec   parse_com_spec         (one ComSpec per spec tag)
//!   implementation parse_swc_implementation (+ workspace back-reference)
//! ```

use super::behavior::{BehaviorParser, SwcBehaviorParser};
use super::diagnostics::{Diagnostic, DiagnosticCode};
use super::options::ParserOptions;
use crate::base::SchemaVersion;

/// Builds component-model entities from ARXML elements.
///
/// One parser handles one schema version. Non-fatal findings accumulate
/// as [`Diagnostic`]s until drained with [`take_diagnostics`](Self::take_diagnostics).
pub struct ComponentTypeParser {
    pub(super) options: ParserOptions,
    pub(super) behavior_parser: Box<dyn BehaviorParser>,
    diagnostics: Vec<Diagnostic>,
}

impl ComponentTypeParser {
    pub fn new(version: SchemaVersion) -> Self {
        Self::with_options(ParserOptions::for_version(version))
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            behavior_parser: Box::new(SwcBehaviorParser),
            diagnostics: Vec::new(),
        }
    }

    /// Replace the internal-behavior collaborator.
    pub fn with_behavior_parser(mut self, parser: impl BehaviorParser + 'static) -> Self {
        self.behavior_parser = Box::new(parser);
        self
    }

    pub fn version(&self) -> SchemaVersion {
        self.options.version
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub(super) fn report(&mut self, diagnostic: Diagnostic) {
        let is_hint = matches!(
            diagnostic.code,
            DiagnosticCode::UnmatchedReference | DiagnosticCode::UnresolvedReference
        );
        if is_hint && !self.options.record_reference_hints {
            return;
        }
        self.diagnostics.push(diagnostic);
    }
}

impl std::fmt::Debug for ComponentTypeParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentTypeParser")
            .field("options", &self.options)
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}
