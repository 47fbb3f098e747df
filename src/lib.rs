//! Quill - an embeddable expression engine.
//!
//! # Overview
//!
//! Quill evaluates small dynamically typed expressions against host data.
//! Common use cases include:
//!
//! - Report templates pulling fields out of records
//! - Filter and routing rules
//! - Computed columns and derived values
//!
//! The entry point is the [`ExpressionFactory`]: a thread-agnostic facade
//! that owns the engine configuration, the namespace registry, and a cache
//! of compiled expressions. Reconfiguring the factory builds a fresh engine
//! generation; expressions already compiled keep the settings they were
//! born with.
//!
//! # Quick Start
//!
//! ```
//! use quill::{Context, ExpressionFactory, Value};
//!
//! let factory = ExpressionFactory::new();
//!
//! let mut context = Context::new();
//! context.set(
//!     "order",
//!     Value::map(vec![(Value::str("total"), Value::Float(40.0))]),
//! );
//!
//! let expr = factory.compile("order.total * 1.25").unwrap();
//! assert_eq!(expr.evaluate(&mut context).unwrap(), Value::Float(50.0));
//! ```
//!
//! # Custom functions
//!
//! Hosts extend the language through namespaces:
//!
//! ```
//! use std::rc::Rc;
//! use quill::{Context, ExpressionFactory, NativeFunctions, Value};
//!
//! let factory = ExpressionFactory::new();
//! let math = NativeFunctions::new().with("square", |args| {
//!     let x = args[0].as_number().unwrap_or(0.0);
//!     Ok(Value::Float(x * x))
//! });
//! factory.register_functions("math", Rc::new(math)).unwrap();
//!
//! let expr = factory.compile("math:square(4)").unwrap();
//! assert_eq!(
//!     expr.evaluate(&mut Context::new()).unwrap(),
//!     Value::Float(16.0)
//! );
//! ```

// Re-export the public API from quill_core.
pub use quill_core::api::{
    CompiledExpression, Diagnostic, Engine, EngineBuilder, EngineOptions, Error,
    ExpressionFactory, NamespaceRegistry, Severity,
};

pub use quill_core::context::Context;
pub use quill_core::evaluator::{EvalError, EvalErrorKind, RuntimeError};
pub use quill_core::introspection::{
    AccessOperator, Introspector, PermissionSet, ResolutionStrategy, ResolverKind,
    mapping_aware,
};
pub use quill_core::parser::{ParseError, Span};
pub use quill_core::stdlib::{AGGREGATE_NAMESPACE, CORE_NAMESPACE};
pub use quill_core::values::{
    FunctionProvider, NativeFn, NativeFunctions, ObjectLike, Value, ValueMap,
};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
