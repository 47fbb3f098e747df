/// Behavior switches for an engine generation.
///
/// Options are immutable once an engine is built; the factory builds a new
/// generation when a setter actually changes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Strict mode errors on undefined variables and null operands.
    /// Lenient mode resolves them to null (or zero, in arithmetic).
    pub strict: bool,
    /// Silent mode swallows runtime errors during evaluation, logging them
    /// and yielding null. Resource errors still propagate.
    pub silent: bool,
    /// Debug mode attaches the expression source text to evaluation errors.
    pub debug: bool,
    /// Capacity of the engine's parse cache. Zero disables it.
    pub cache_capacity: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict: true,
            silent: false,
            debug: false,
            cache_capacity: 0,
        }
    }
}
