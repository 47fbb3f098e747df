//! Dynamic runtime values.
//!
//! Quill is dynamically typed: every expression evaluates to a [`Value`].
//! Host applications extend the value space at two seams:
//!
//! - [`ObjectLike`] — host objects with properties, fields and methods,
//!   resolved through the introspector's resolver chain.
//! - [`FunctionProvider`] — callable functions exposed under a namespace.

mod function;
mod object;
mod value;

#[cfg(test)]
mod value_test;

pub use function::{FunctionProvider, NativeFn, NativeFunctions};
pub use object::ObjectLike;
pub use value::{Value, ValueMap};
