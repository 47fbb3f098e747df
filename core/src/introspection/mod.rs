//! Property and index resolution.
//!
//! Unqualified access in an expression (`order.total`, `items[2]`) does not
//! name a concrete resolver. This module decides which resolvers run, and in
//! what order:
//!
//! - [`ResolverKind`] names the individual resolvers.
//! - [`ResolutionStrategy`] maps an access site (operator plus operand) to an
//!   ordered resolver list. [`mapping_aware`] is the default strategy.
//! - [`PermissionSet`] subtracts resolvers a host does not want reachable.
//! - [`Introspector`] combines the two and performs the actual reads and
//!   writes.

mod introspector;
mod permissions;
mod strategy;


use thiserror::Error;

pub use introspector::Introspector;
pub use permissions::PermissionSet;
pub use strategy::{
    AccessOperator, MAPPING_FIRST, PROPERTY_FIRST, ResolutionStrategy, ResolverKind,
    mapping_aware,
};

/// Errors raised while assembling an engine's introspection machinery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The permission set denies every resolver kind, so no access could
    /// ever resolve.
    #[error("permission set denies every resolver; at least one must be permitted")]
    NoResolversPermitted,
}
