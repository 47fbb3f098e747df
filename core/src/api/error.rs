//! Facade-level errors and diagnostics.

use std::fmt;

use thiserror::Error;

use crate::introspection::ConfigurationError;
use crate::parser::{ParseError, Span};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("namespace `{namespace}` is already registered")]
    DuplicateNamespace { namespace: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A renderable diagnostic, decoupled from the error that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
    pub help: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
