//! Public error types for the TLisp API.
//!
//! Only host-level failures are errors here. Anything that goes wrong while
//! evaluating a program comes back as a `Value::Error` instead.

use crate::parser::{ParseError, Span};

/// Public error type for all TLisp operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source text could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Invalid API usage (e.g., defining an empty name).
    #[error("API error: {0}")]
    Api(String),
}

impl Error {
    /// Diagnostics for rendering, one per problem.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse(err) => vec![err.to_diagnostic()],
            Error::Api(message) => vec![Diagnostic {
                message: message.clone(),
                span: Span(0..0),
                related: vec![],
                help: vec![],
                code: None,
            }],
        }
    }

    /// The source text the error refers to, when there is one.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Error::Parse(err) => Some(&err.source),
            Error::Api(_) => None,
        }
    }
}

/// An error message with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help lines suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Related information for a diagnostic (e.g., "opened here").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}
