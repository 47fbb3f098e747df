//! Expression evaluation.
//!
//! Evaluation walks the parsed tree directly against a [`Context`] and the
//! owning engine's configuration. Strictness, silence and introspection
//! behavior all come from the engine; the same tree evaluates differently
//! under different engine generations.
//!
//! [`Context`]: crate::context::Context

mod error;
mod eval;
pub(crate) mod operators;


pub use error::{EvalError, EvalErrorKind, RuntimeError};

use crate::api::Engine;
use crate::context::Context;
use crate::parser::Expr;
use crate::values::Value;

/// Recursion limit for a single evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

pub fn eval(engine: &Engine, expr: &Expr, context: &mut Context) -> Result<Value, EvalError> {
    eval::Evaluator::new(engine, context).eval(expr)
}
