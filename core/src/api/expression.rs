//! Compiled expressions.

use std::rc::Rc;
use std::sync::Arc;

use tracing::warn;

use crate::context::Context;
use crate::evaluator::{self, EvalError};
use crate::parser::Expr;
use crate::values::Value;

use super::engine::Engine;

/// A parsed expression bound to the engine generation that compiled it.
///
/// Cloning is cheap and shares the parse tree. The binding is permanent:
/// reconfiguring the factory never changes how an already-compiled
/// expression evaluates.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    inner: Arc<ExpressionInner>,
}

#[derive(Debug)]
struct ExpressionInner {
    engine: Arc<Engine>,
    ast: Rc<Expr>,
    source: String,
}

impl CompiledExpression {
    pub(crate) fn new(engine: Arc<Engine>, ast: Rc<Expr>, source: &str) -> Self {
        Self {
            inner: Arc::new(ExpressionInner {
                engine,
                ast,
                source: source.to_string(),
            }),
        }
    }

    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// The engine generation this expression is bound to.
    pub fn generation(&self) -> u64 {
        self.inner.engine.generation()
    }

    /// Whether two handles share the same compilation.
    pub fn ptr_eq(a: &CompiledExpression, b: &CompiledExpression) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub(crate) fn ast(&self) -> &Rc<Expr> {
        &self.inner.ast
    }

    /// Evaluate against a context.
    ///
    /// Under the engine's silent option, runtime errors are logged and
    /// yield null; resource errors always propagate. Under the debug
    /// option, errors carry the source text.
    pub fn evaluate(&self, context: &mut Context) -> Result<Value, EvalError> {
        let engine = &self.inner.engine;
        match evaluator::eval(engine, &self.inner.ast, context) {
            Ok(value) => Ok(value),
            Err(e) if engine.options().silent && e.is_runtime() => {
                warn!(source = %self.inner.source, error = %e, "suppressed runtime error");
                Ok(Value::Null)
            }
            Err(e) if engine.options().debug => Err(e.with_source(&self.inner.source)),
            Err(e) => Err(e),
        }
    }
}
