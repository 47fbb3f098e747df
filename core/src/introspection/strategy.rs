//! Resolution strategies.

use crate::values::Value;

/// The individual resolvers an access can be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolverKind {
    /// Key lookup in a map value.
    MapAccess,
    /// Integer index into an array value.
    SeqAccess,
    /// Duck-typed `get`/`put` method dispatch on host objects.
    DuckMethod,
    /// Declared property access on host objects.
    Property,
    /// Raw field access on host objects.
    Field,
    /// Structural fallbacks: character indexing into strings, stringified
    /// key lookup in maps.
    Container,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 6] = [
        ResolverKind::MapAccess,
        ResolverKind::SeqAccess,
        ResolverKind::DuckMethod,
        ResolverKind::Property,
        ResolverKind::Field,
        ResolverKind::Container,
    ];
}

/// The syntactic operator behind an access, when there is one.
///
/// Dotted property access (`a.b`) carries no operator; bracketed access
/// carries [`IndexGet`](AccessOperator::IndexGet) or
/// [`IndexSet`](AccessOperator::IndexSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOperator {
    IndexGet,
    IndexSet,
}

/// Map and sequence resolvers ahead of object resolvers.
pub const MAPPING_FIRST: &[ResolverKind] = &[
    ResolverKind::MapAccess,
    ResolverKind::SeqAccess,
    ResolverKind::DuckMethod,
    ResolverKind::Property,
    ResolverKind::Field,
    ResolverKind::Container,
];

/// Object property resolution ahead of map and sequence resolvers.
pub const PROPERTY_FIRST: &[ResolverKind] = &[
    ResolverKind::Property,
    ResolverKind::MapAccess,
    ResolverKind::SeqAccess,
    ResolverKind::DuckMethod,
    ResolverKind::Field,
    ResolverKind::Container,
];

/// Chooses the resolver order for one access site.
///
/// Called with the access operator (if any) and the operand being accessed.
/// Strategies are plain function pointers so an engine configuration stays
/// `Copy`-cheap and comparable by pointer.
pub type ResolutionStrategy = fn(Option<AccessOperator>, &Value) -> &'static [ResolverKind];

/// The default strategy.
///
/// Bracketed access always resolves mapping-first. Dotted access resolves
/// mapping-first only when the operand is a map, so `order.total` prefers a
/// declared property but `row.total` on a map row finds the entry.
pub fn mapping_aware(operator: Option<AccessOperator>, operand: &Value) -> &'static [ResolverKind] {
    match operator {
        Some(_) => MAPPING_FIRST,
        None if operand.is_map() => MAPPING_FIRST,
        None => PROPERTY_FIRST,
    }
}
