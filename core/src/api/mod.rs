//! The embedding surface.
//!
//! Hosts interact with three things: the [`ExpressionFactory`] facade for
//! configuration, namespaces and compilation; [`CompiledExpression`] handles
//! for evaluation; and [`Context`] for variable bindings.
//!
//! [`Context`]: crate::context::Context

mod engine;
mod error;
mod expression;
mod factory;
mod options;
mod registry;


pub use engine::{Engine, EngineBuilder};
pub use error::{Diagnostic, Error, Severity};
pub use expression::CompiledExpression;
pub use factory::ExpressionFactory;
pub use options::EngineOptions;
pub use registry::NamespaceRegistry;
