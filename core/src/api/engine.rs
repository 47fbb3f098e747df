//! Engine construction and the engine itself.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use crate::introspection::{
    ConfigurationError, Introspector, PermissionSet, ResolutionStrategy, mapping_aware,
};
use crate::parser::{self, Expr, ParseError};
use crate::values::FunctionProvider;

use super::expression::CompiledExpression;
use super::options::EngineOptions;

/// Accumulates engine configuration.
///
/// The builder is retained by the factory between rebuilds so that setters
/// compose: changing one option carries all previously chosen settings into
/// the next generation.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    pub(crate) options: EngineOptions,
    pub(crate) permissions: PermissionSet,
    pub(crate) strategy: ResolutionStrategy,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            options: EngineOptions::default(),
            permissions: PermissionSet::unrestricted(),
            strategy: mapping_aware,
        }
    }
}

impl EngineBuilder {
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.options.silent = silent;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.options.cache_capacity = capacity;
        self
    }

    pub fn permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Build an engine for one generation over the given namespaces.
    pub fn create(
        &self,
        generation: u64,
        namespaces: HashMap<String, Rc<dyn FunctionProvider>>,
    ) -> Result<Engine, ConfigurationError> {
        let introspector = Introspector::new(self.strategy, self.permissions.clone())?;
        debug!(generation, options = ?self.options, "engine built");
        Ok(Engine {
            generation,
            parse_cache: Mutex::new(ParseCache::new(self.options.cache_capacity)),
            options: self.options.clone(),
            introspector,
            namespaces,
        })
    }
}

/// One immutable engine generation.
///
/// An engine never changes after construction. Reconfiguration happens in
/// the factory by building a successor generation; expressions compiled
/// against this engine keep evaluating under its settings.
#[derive(Debug)]
pub struct Engine {
    generation: u64,
    options: EngineOptions,
    introspector: Introspector,
    namespaces: HashMap<String, Rc<dyn FunctionProvider>>,
    parse_cache: Mutex<ParseCache>,
}

impl Engine {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn introspector(&self) -> &Introspector {
        &self.introspector
    }

    pub fn namespace(&self, name: &str) -> Option<&Rc<dyn FunctionProvider>> {
        self.namespaces.get(name)
    }

    /// Compile source into an expression bound to this engine.
    pub fn compile(self: &Arc<Self>, source: &str) -> Result<CompiledExpression, ParseError> {
        let ast = self.parse(source)?;
        Ok(CompiledExpression::new(Arc::clone(self), ast, source))
    }

    fn parse(&self, source: &str) -> Result<Rc<Expr>, ParseError> {
        if self.options.cache_capacity == 0 {
            return Ok(Rc::new(parser::parse(source)?));
        }
        let mut cache = self.parse_cache.lock().expect("parse cache lock poisoned");
        if let Some(ast) = cache.get(source) {
            trace!(source, "parse cache hit");
            return Ok(ast);
        }
        let ast = Rc::new(parser::parse(source)?);
        cache.insert(source, Rc::clone(&ast));
        Ok(ast)
    }
}

/// Bounded FIFO cache of parsed trees.
#[derive(Debug)]
struct ParseCache {
    capacity: usize,
    entries: HashMap<String, Rc<Expr>>,
    order: VecDeque<String>,
}

impl ParseCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, source: &str) -> Option<Rc<Expr>> {
        self.entries.get(source).cloned()
    }

    fn insert(&mut self, source: &str, ast: Rc<Expr>) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.order.push_back(source.to_string());
        self.entries.insert(source.to_string(), ast);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::registry::NamespaceRegistry;
    use super::*;

    fn engine(capacity: usize) -> Arc<Engine> {
        let builder = EngineBuilder::default().cache_capacity(capacity);
        Arc::new(
            builder
                .create(0, NamespaceRegistry::builtins().snapshot())
                .unwrap(),
        )
    }

    #[test]
    fn parse_cache_shares_trees() {
        let engine = engine(4);
        let a = engine.compile("1 + 2").unwrap();
        let b = engine.compile("1 + 2").unwrap();
        assert!(Rc::ptr_eq(a.ast(), b.ast()));
    }

    #[test]
    fn zero_capacity_disables_the_parse_cache() {
        let engine = engine(0);
        let a = engine.compile("1 + 2").unwrap();
        let b = engine.compile("1 + 2").unwrap();
        assert!(!Rc::ptr_eq(a.ast(), b.ast()));
    }

    #[test]
    fn parse_cache_evicts_oldest_first() {
        let engine = engine(2);
        let a = engine.compile("1").unwrap();
        engine.compile("2").unwrap();
        engine.compile("3").unwrap(); // evicts "1"
        let a_again = engine.compile("1").unwrap();
        assert!(!Rc::ptr_eq(a.ast(), a_again.ast()));

        let three = engine.compile("3").unwrap();
        let three_again = engine.compile("3").unwrap();
        assert!(Rc::ptr_eq(three.ast(), three_again.ast()));
    }

    #[test]
    fn failed_parses_are_not_cached() {
        let engine = engine(2);
        assert!(engine.compile("1 +").is_err());
        assert!(engine.compile("1 + 2").is_ok());
    }
}
