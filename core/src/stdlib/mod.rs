//! Built-in function namespaces.
//!
//! Every engine starts with two registered namespaces:
//!
//! - [`AGGREGATE_NAMESPACE`] (`agg`): reductions over argument lists.
//! - [`CORE_NAMESPACE`] (`quill`): general-purpose helpers.

mod agg;
mod helpers;

pub use agg::AggregateFunctions;
pub use helpers::CoreFunctions;

pub const AGGREGATE_NAMESPACE: &str = "agg";
pub const CORE_NAMESPACE: &str = "quill";
