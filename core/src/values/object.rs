//! The host-object seam.

use crate::evaluator::RuntimeError;

use super::value::Value;

/// A host object exposed to expressions.
///
/// The introspector resolves unqualified property and index access against
/// this surface, in the order chosen by the active resolution strategy:
///
/// - [`get_property`](ObjectLike::get_property) /
///   [`set_property`](ObjectLike::set_property) — declared accessors, the
///   object's published property surface.
/// - [`get_field`](ObjectLike::get_field) /
///   [`set_field`](ObjectLike::set_field) — raw field access, typically a
///   superset of the property surface.
/// - [`call_method`](ObjectLike::call_method) — method dispatch; the
///   duck-typed resolver calls `get(key)` / `put(key, value)` through it.
///
/// Every access is optional: the default implementations resolve nothing,
/// so implementors opt in to exactly the surface they want. Mutating
/// accessors take `&self`; implementors use interior mutability.
pub trait ObjectLike: std::fmt::Debug {
    /// Runtime type name, for diagnostics.
    fn type_name(&self) -> &str;

    fn get_property(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Returns true if the property exists and was written.
    fn set_property(&self, _name: &str, _value: Value) -> bool {
        false
    }

    fn get_field(&self, _name: &str) -> Option<Value> {
        None
    }

    fn set_field(&self, _name: &str, _value: Value) -> bool {
        false
    }

    /// Dispatch a method call. `None` means the method does not exist;
    /// `Some(Err(_))` means it exists and failed.
    fn call_method(&self, _name: &str, _args: &[Value]) -> Option<Result<Value, RuntimeError>> {
        None
    }
}
