use std::collections::BTreeSet;

use super::strategy::ResolverKind;

/// The set of resolvers an engine is allowed to use.
///
/// Stored as a deny-set: everything is permitted unless denied. Strategies
/// produce resolver orders independently of permissions; the introspector
/// skips denied kinds when walking an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    denied: BTreeSet<ResolverKind>,
}

impl PermissionSet {
    /// Every resolver permitted.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Host-object internals closed off: denies raw field access and
    /// duck-typed method dispatch, leaving declared properties and the
    /// structural resolvers.
    pub fn sandboxed() -> Self {
        Self::default()
            .deny(ResolverKind::Field)
            .deny(ResolverKind::DuckMethod)
    }

    pub fn deny(mut self, kind: ResolverKind) -> Self {
        self.denied.insert(kind);
        self
    }

    pub fn allow(mut self, kind: ResolverKind) -> Self {
        self.denied.remove(&kind);
        self
    }

    pub fn permits(&self, kind: ResolverKind) -> bool {
        !self.denied.contains(&kind)
    }

    pub fn permits_any(&self) -> bool {
        self.denied.len() < ResolverKind::ALL.len()
    }
}
