//! Callable function namespaces.

use std::fmt;

use crate::evaluator::RuntimeError;

use super::value::Value;

/// A provider of callable functions, registered under a namespace.
///
/// Expressions invoke provider functions with the `namespace:function(args)`
/// syntax. The evaluator consults [`function_names`] before dispatching, so
/// [`call`] is only invoked for names the provider advertises; errors
/// returned from `call` are function-domain errors (bad arity, bad argument
/// types), not lookup failures.
///
/// [`function_names`]: FunctionProvider::function_names
/// [`call`]: FunctionProvider::call
pub trait FunctionProvider: fmt::Debug {
    /// The function names this provider exposes.
    fn function_names(&self) -> &[&'static str];

    fn call(&self, function: &str, args: &[Value]) -> Result<Value, RuntimeError>;
}

/// A boxed native function.
pub type NativeFn = Box<dyn Fn(&[Value]) -> Result<Value, RuntimeError>>;

/// A [`FunctionProvider`] assembled from native closures.
///
/// Convenient for hosts that want to expose a few functions without writing
/// a provider type:
///
/// ```
/// use quill_core::values::{NativeFunctions, Value};
///
/// let math = NativeFunctions::new().with("square", |args| {
///     let x = args[0].as_number().unwrap_or(0.0);
///     Ok(Value::Float(x * x))
/// });
/// assert_eq!(math.function_names(), &["square"]);
/// # use quill_core::values::FunctionProvider;
/// ```
#[derive(Default)]
pub struct NativeFunctions {
    names: Vec<&'static str>,
    functions: Vec<(&'static str, NativeFn)>,
}

impl NativeFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        name: &'static str,
        function: impl Fn(&[Value]) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        self.names.push(name);
        self.functions.push((name, Box::new(function)));
        self
    }
}

impl fmt::Debug for NativeFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunctions")
            .field("functions", &self.names)
            .finish()
    }
}

impl FunctionProvider for NativeFunctions {
    fn function_names(&self) -> &[&'static str] {
        &self.names
    }

    fn call(&self, function: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let (_, f) = self
            .functions
            .iter()
            .find(|(name, _)| *name == function)
            .ok_or_else(|| RuntimeError::Function {
                message: format!("no native function `{function}`"),
            })?;
        f(args)
    }
}
