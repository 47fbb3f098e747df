//! The expression factory facade.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, trace};

use crate::introspection::{PermissionSet, ResolutionStrategy};
use crate::values::FunctionProvider;

use super::engine::{Engine, EngineBuilder};
use super::error::Error;
use super::expression::CompiledExpression;
use super::registry::NamespaceRegistry;

/// Owns the live engine and rebuilds it on configuration change.
///
/// The factory is the single mutable surface of the crate. It keeps a
/// builder with the accumulated configuration, a namespace registry, the
/// currently published engine, and a memo cache of compiled expressions
/// keyed to the engine generation.
///
/// Setters are no-ops when the requested value matches the live engine, so
/// repeated identical configuration never churns generations. When a change
/// is real, a candidate engine is built first and published only on
/// success: a failing reconfiguration leaves the previous engine, builder
/// and registry untouched.
pub struct ExpressionFactory {
    builder: Mutex<EngineBuilder>,
    registry: Mutex<NamespaceRegistry>,
    engine: RwLock<Arc<Engine>>,
    cache: Mutex<MemoCache>,
    next_generation: AtomicU64,
}

/// Unbounded memo of compiled expressions for one generation.
#[derive(Debug, Default)]
struct MemoCache {
    generation: u64,
    entries: HashMap<String, CompiledExpression>,
}

impl Default for ExpressionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionFactory {
    pub fn new() -> Self {
        let builder = EngineBuilder::default();
        let registry = NamespaceRegistry::builtins();
        let engine = builder
            .create(0, registry.snapshot())
            .expect("default configuration is valid");
        Self {
            builder: Mutex::new(builder),
            registry: Mutex::new(registry),
            engine: RwLock::new(Arc::new(engine)),
            cache: Mutex::new(MemoCache::default()),
            next_generation: AtomicU64::new(1),
        }
    }

    /// The currently published engine.
    pub fn engine(&self) -> Arc<Engine> {
        self.engine.read().expect("engine lock poisoned").clone()
    }

    pub fn is_lenient(&self) -> bool {
        !self.engine().options().strict
    }

    pub fn is_silent(&self) -> bool {
        self.engine().options().silent
    }

    pub fn is_debug(&self) -> bool {
        self.engine().options().debug
    }

    pub fn cache_capacity(&self) -> usize {
        self.engine().options().cache_capacity
    }

    pub fn set_lenient(&self, lenient: bool) -> Result<(), Error> {
        let strict = !lenient;
        if self.engine().options().strict == strict {
            return Ok(());
        }
        self.rebuild_with(|builder| builder.options.strict = strict)
    }

    pub fn set_silent(&self, silent: bool) -> Result<(), Error> {
        if self.engine().options().silent == silent {
            return Ok(());
        }
        self.rebuild_with(|builder| builder.options.silent = silent)
    }

    pub fn set_debug(&self, debug: bool) -> Result<(), Error> {
        if self.engine().options().debug == debug {
            return Ok(());
        }
        self.rebuild_with(|builder| builder.options.debug = debug)
    }

    pub fn set_cache_capacity(&self, capacity: usize) -> Result<(), Error> {
        if self.engine().options().cache_capacity == capacity {
            return Ok(());
        }
        self.rebuild_with(|builder| builder.options.cache_capacity = capacity)
    }

    pub fn set_permissions(&self, permissions: PermissionSet) -> Result<(), Error> {
        if *self.engine().introspector().permissions() == permissions {
            return Ok(());
        }
        self.rebuild_with(move |builder| builder.permissions = permissions)
    }

    /// Function pointers have no meaningful equality, so this always
    /// rebuilds.
    pub fn set_resolution_strategy(&self, strategy: ResolutionStrategy) -> Result<(), Error> {
        self.rebuild_with(move |builder| builder.strategy = strategy)
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.registry
            .lock()
            .expect("registry lock poisoned")
            .contains(namespace)
    }

    /// Register a function provider under a namespace and rebuild.
    ///
    /// Duplicates are rejected before anything changes; the first provider
    /// keeps serving.
    pub fn register_functions(
        &self,
        namespace: &str,
        provider: Rc<dyn FunctionProvider>,
    ) -> Result<(), Error> {
        let mut registry = self.registry.lock().expect("registry lock poisoned");
        if registry.contains(namespace) {
            return Err(Error::DuplicateNamespace {
                namespace: namespace.to_string(),
            });
        }

        // Candidate first: the registry commits only once the engine builds.
        let mut namespaces = registry.snapshot();
        namespaces.insert(namespace.to_string(), Rc::clone(&provider));
        let builder = self.builder.lock().expect("builder lock poisoned").clone();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let engine = builder.create(generation, namespaces)?;

        registry
            .register(namespace, provider)
            .expect("namespace availability was checked under this lock");
        drop(registry);
        self.publish(engine);
        Ok(())
    }

    /// Compile through the memo cache.
    ///
    /// Identical source against the same generation returns the same
    /// compilation. Failed compiles are never cached, so a later identical
    /// call re-parses.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, Error> {
        let engine = self.engine();
        let mut cache = self.cache.lock().expect("expression cache lock poisoned");
        if cache.generation != engine.generation() {
            cache.generation = engine.generation();
            cache.entries.clear();
        }
        if let Some(compiled) = cache.entries.get(source) {
            trace!(source, "expression cache hit");
            return Ok(compiled.clone());
        }
        let compiled = engine.compile(source)?;
        cache.entries.insert(source.to_string(), compiled.clone());
        Ok(compiled)
    }

    /// Apply a configuration change to a candidate builder, build the
    /// engine, and commit both only on success.
    fn rebuild_with(&self, configure: impl FnOnce(&mut EngineBuilder)) -> Result<(), Error> {
        let namespaces = self
            .registry
            .lock()
            .expect("registry lock poisoned")
            .snapshot();
        let mut builder = self.builder.lock().expect("builder lock poisoned");
        let mut candidate = builder.clone();
        configure(&mut candidate);
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let engine = candidate.create(generation, namespaces)?;
        *builder = candidate;
        drop(builder);
        self.publish(engine);
        Ok(())
    }

    fn publish(&self, engine: Engine) {
        let engine = Arc::new(engine);
        let generation = engine.generation();
        *self.engine.write().expect("engine lock poisoned") = engine;
        let mut cache = self.cache.lock().expect("expression cache lock poisoned");
        cache.generation = generation;
        cache.entries.clear();
        debug!(generation, "engine published");
    }
}
