//! Diagnostics: non-fatal parse findings.
//!
//! Fatal problems abort the parse as a [`ParseError`](crate::ParseError).
//! Everything else leaves the model silently incomplete or unnamed, and is
//! recorded here so callers can tell a clean document from a lenient one.

use std::fmt;
use std::sync::Arc;

use crate::base::RefPath;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Info,
    Hint,
}

/// What a diagnostic is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A child element with no handler was skipped.
    UnhandledTag,
    /// A ComSpec reference did not match its port's interface.
    UnmatchedReference,
    /// A registry lookup found nothing.
    UnresolvedReference,
    /// A recognised ComSpec kind that is not modelled yet.
    DeferredComSpec,
}

impl DiagnosticCode {
    /// Short code string (e.g., "W0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnhandledTag => "W0001",
            DiagnosticCode::UnmatchedReference => "H0001",
            DiagnosticCode::UnresolvedReference => "H0002",
            DiagnosticCode::DeferredComSpec => "I0001",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::UnhandledTag => Severity::Warning,
            DiagnosticCode::DeferredComSpec => Severity::Info,
            DiagnosticCode::UnmatchedReference | DiagnosticCode::UnresolvedReference => {
                Severity::Hint
            }
        }
    }
}

/// A diagnostic message with the element it was raised for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Path of the element being built when the diagnostic was raised.
    pub context: Option<RefPath>,
}

impl Diagnostic {
    /// Create a diagnostic; severity follows from the code.
    pub fn new(code: DiagnosticCode, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            context: None,
        }
    }

    pub fn unhandled_tag(tag: &str, parent: &str) -> Self {
        Self::new(
            DiagnosticCode::UnhandledTag,
            format!("Unhandled tag <{tag}> in {parent}"),
        )
    }

    pub fn unmatched_reference(reference: &str, interface_ref: &str) -> Self {
        Self::new(
            DiagnosticCode::UnmatchedReference,
            format!("Reference {reference} does not belong to port interface {interface_ref}"),
        )
    }

    pub fn unresolved_reference(reference: &str) -> Self {
        Self::new(
            DiagnosticCode::UnresolvedReference,
            format!("Reference {reference} not found in workspace"),
        )
    }

    pub fn deferred_com_spec(tag: &str) -> Self {
        Self::new(
            DiagnosticCode::DeferredComSpec,
            format!("<{tag}> is recognised but not modelled"),
        )
    }

    /// Set the element context.
    pub fn with_context(mut self, context: RefPath) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)?;
        if let Some(context) = &self.context {
            write!(f, " (at {context})")?;
        }
        Ok(())
    }
}
