//! Error types for ARXML parsing.

use thiserror::Error;

/// Errors that abort a parse.
///
/// Every variant is fatal to the surrounding parse call. Conditions that
/// only leave the model incomplete are reported as
/// [`Diagnostic`](crate::parser::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while reading a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An element tag has no handler in a context that requires one.
    #[error("Unsupported element <{tag}> in {context}")]
    UnsupportedElement { tag: String, context: String },

    /// A component declares more than one internal behavior.
    #[error("{component}: an SWC cannot have multiple internal behaviors")]
    MultipleInternalBehaviors { component: String },

    /// A required child element (or its text) is absent.
    #[error("Missing required element {path} in {context}")]
    MissingElement { path: String, context: String },

    /// A child element that must hold an integer holds something else.
    #[error("Invalid integer in {path}: {value:?}")]
    InvalidInteger { path: String, value: String },

    /// The element needs registry access but the parse has no workspace.
    #[error("Element {element} requires a workspace but none is attached")]
    WorkspaceUnavailable { element: String },

    /// The schema version could not be determined or predates 3.0.
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(String),
}

impl ParseError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an unsupported-element error.
    pub fn unsupported(tag: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnsupportedElement {
            tag: tag.into(),
            context: context.into(),
        }
    }

    /// Create a missing-element error.
    pub fn missing(path: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            path: path.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;
