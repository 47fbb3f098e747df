//! The namespace registry.

use std::collections::HashMap;
use std::rc::Rc;

use crate::stdlib::{AGGREGATE_NAMESPACE, AggregateFunctions, CORE_NAMESPACE, CoreFunctions};
use crate::values::FunctionProvider;

use super::error::Error;

/// Maps namespace names to function providers.
///
/// Registration is first-wins: a duplicate namespace is rejected and the
/// original provider keeps serving.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    providers: HashMap<String, Rc<dyn FunctionProvider>>,
}

impl NamespaceRegistry {
    /// A registry pre-populated with the built-in namespaces.
    pub fn builtins() -> Self {
        let mut registry = Self::default();
        registry
            .providers
            .insert(AGGREGATE_NAMESPACE.to_string(), Rc::new(AggregateFunctions));
        registry
            .providers
            .insert(CORE_NAMESPACE.to_string(), Rc::new(CoreFunctions));
        registry
    }

    pub fn register(
        &mut self,
        namespace: &str,
        provider: Rc<dyn FunctionProvider>,
    ) -> Result<(), Error> {
        if self.providers.contains_key(namespace) {
            return Err(Error::DuplicateNamespace {
                namespace: namespace.to_string(),
            });
        }
        self.providers.insert(namespace.to_string(), provider);
        Ok(())
    }

    pub fn get(&self, namespace: &str) -> Option<&Rc<dyn FunctionProvider>> {
        self.providers.get(namespace)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.providers.contains_key(namespace)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn snapshot(&self) -> HashMap<String, Rc<dyn FunctionProvider>> {
        self.providers.clone()
    }
}
