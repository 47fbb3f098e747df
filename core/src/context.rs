//! Variable bindings for evaluation.

use std::collections::HashMap;

use crate::values::Value;

/// The variables visible to an expression.
///
/// Contexts are independent of any engine: the same context can be passed to
/// expressions compiled by different engine generations, and assignments made
/// during evaluation land here.
#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: HashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }
}
