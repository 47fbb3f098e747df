use tracing::debug;

use crate::values::Value;

use super::strategy::{AccessOperator, ResolutionStrategy, ResolverKind};
use super::{ConfigurationError, PermissionSet};

/// Resolves property and index access against runtime values.
///
/// Holds the engine's [`ResolutionStrategy`] and [`PermissionSet`]. For each
/// access the strategy picks an ordered resolver list; the introspector walks
/// it, skipping denied kinds, and the first resolver that produces a result
/// wins.
#[derive(Debug, Clone)]
pub struct Introspector {
    strategy: ResolutionStrategy,
    permissions: PermissionSet,
}

impl Introspector {
    pub fn new(
        strategy: ResolutionStrategy,
        permissions: PermissionSet,
    ) -> Result<Self, ConfigurationError> {
        if !permissions.permits_any() {
            return Err(ConfigurationError::NoResolversPermitted);
        }
        debug!(?permissions, "introspector configured");
        Ok(Self {
            strategy,
            permissions,
        })
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// The resolver order for one access site, permissions applied.
    pub fn resolver_order(
        &self,
        operator: Option<AccessOperator>,
        operand: &Value,
    ) -> Vec<ResolverKind> {
        (self.strategy)(operator, operand)
            .iter()
            .copied()
            .filter(|kind| self.permissions.permits(*kind))
            .collect()
    }

    /// Resolve a read. `None` means no permitted resolver produced a value.
    pub fn get(
        &self,
        operator: Option<AccessOperator>,
        container: &Value,
        key: &Value,
    ) -> Option<Value> {
        for kind in (self.strategy)(operator, container) {
            if !self.permissions.permits(*kind) {
                continue;
            }
            if let Some(value) = try_get(*kind, container, key) {
                return Some(value);
            }
        }
        None
    }

    /// Resolve a write. Returns true if some permitted resolver accepted it.
    pub fn set(
        &self,
        operator: Option<AccessOperator>,
        container: &Value,
        key: &Value,
        value: &Value,
    ) -> bool {
        for kind in (self.strategy)(operator, container) {
            if !self.permissions.permits(*kind) {
                continue;
            }
            if try_set(*kind, container, key, value) {
                return true;
            }
        }
        false
    }
}

fn try_get(kind: ResolverKind, container: &Value, key: &Value) -> Option<Value> {
    match kind {
        ResolverKind::MapAccess => container.as_map()?.borrow().get(key),
        ResolverKind::SeqAccess => {
            let items = container.as_array()?.borrow();
            let index = key.as_int()?;
            usize::try_from(index).ok().and_then(|i| items.get(i).cloned())
        }
        ResolverKind::DuckMethod => {
            let object = container.as_object()?;
            match object.call_method("get", std::slice::from_ref(key))? {
                Ok(value) => Some(value),
                Err(_) => None,
            }
        }
        ResolverKind::Property => {
            let object = container.as_object()?;
            object.get_property(key.as_str()?)
        }
        ResolverKind::Field => {
            let object = container.as_object()?;
            object.get_field(key.as_str()?)
        }
        ResolverKind::Container => match container {
            Value::Str(s) => {
                let index = usize::try_from(key.as_int()?).ok()?;
                s.chars().nth(index).map(|c| Value::str(c.to_string()))
            }
            Value::Map(map) => map.borrow().get(&Value::str(key.to_string())),
            _ => None,
        },
    }
}

fn try_set(kind: ResolverKind, container: &Value, key: &Value, value: &Value) -> bool {
    match kind {
        ResolverKind::MapAccess => match container.as_map() {
            Some(map) => {
                map.borrow_mut().insert(key.clone(), value.clone());
                true
            }
            None => false,
        },
        ResolverKind::SeqAccess => {
            let Some(items) = container.as_array() else {
                return false;
            };
            let Some(index) = key.as_int().and_then(|i| usize::try_from(i).ok()) else {
                return false;
            };
            let mut items = items.borrow_mut();
            match items.get_mut(index) {
                Some(slot) => {
                    *slot = value.clone();
                    true
                }
                None => false,
            }
        }
        ResolverKind::DuckMethod => {
            let Some(object) = container.as_object() else {
                return false;
            };
            matches!(
                object.call_method("put", &[key.clone(), value.clone()]),
                Some(Ok(_))
            )
        }
        ResolverKind::Property => {
            let Some(object) = container.as_object() else {
                return false;
            };
            key.as_str()
                .is_some_and(|name| object.set_property(name, value.clone()))
        }
        ResolverKind::Field => {
            let Some(object) = container.as_object() else {
                return false;
            };
            key.as_str()
                .is_some_and(|name| object.set_field(name, value.clone()))
        }
        ResolverKind::Container => false,
    }
}
