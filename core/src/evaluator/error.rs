//! Runtime evaluation errors.
//!
//! # Error categories
//!
//! - **Runtime errors**: validation/logic failures during evaluation
//!   (division by zero, undefined variables in strict mode, unresolvable
//!   properties). Silent mode suppresses these.
//!
//! - **Resource exceeded errors**: fatal limit violations (evaluation depth).
//!   These propagate even in silent mode so resource exhaustion is never
//!   hidden.

use std::fmt;

use thiserror::Error;

use crate::parser::Span;

/// An evaluation failure, with optional source location context.
///
/// The span is attached by the evaluator; the source text is attached by
/// [`CompiledExpression::evaluate`] when the engine's debug flag is set.
///
/// [`CompiledExpression::evaluate`]: crate::api::CompiledExpression::evaluate
#[derive(Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
    pub source: Option<String>,
}

#[derive(Debug, Error)]
pub enum EvalErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("evaluation depth {depth} exceeds maximum of {max_depth}")]
    ResourceExceeded { depth: usize, max_depth: usize },
}

/// Runtime errors that silent mode suppresses.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("null operand in {operation}")]
    NullOperand { operation: &'static str },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("unresolvable property `{key}` on {container}")]
    UnresolvableProperty { key: String, container: String },

    #[error("index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("unknown namespace `{namespace}`")]
    UnknownNamespace { namespace: String },

    #[error("unknown function `{namespace}:{function}`")]
    UnknownFunction {
        namespace: String,
        function: String,
    },

    #[error("no method `{method}` on {type_name}")]
    UnknownMethod { method: String, type_name: String },

    #[error("`{function}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("cannot assign through {target}")]
    InvalidAssignment { target: String },

    #[error("{message}")]
    Function { message: String },
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            span: None,
            source: None,
        }
    }

    /// Whether silent mode may suppress this error.
    pub fn is_runtime(&self) -> bool {
        matches!(self.kind, EvalErrorKind::Runtime(_))
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub(crate) fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.0.start, span.0.end)?;
        }
        if let Some(source) = &self.source {
            write!(f, " in `{source}`")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        EvalError::new(EvalErrorKind::Runtime(e))
    }
}
