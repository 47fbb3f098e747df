//! The tree-walking evaluator.

use crate::api::Engine;
use crate::context::Context;
use crate::introspection::AccessOperator;
use crate::parser::{BoolOp, Expr, ExprKind, Literal, UnaryOp};
use crate::values::Value;

use super::error::{EvalError, EvalErrorKind, RuntimeError};
use super::{DEFAULT_MAX_DEPTH, operators};

pub(crate) struct Evaluator<'a> {
    engine: &'a Engine,
    context: &'a mut Context,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(engine: &'a Engine, context: &'a mut Context) -> Self {
        Self {
            engine,
            context,
            depth: 0,
        }
    }

    fn strict(&self) -> bool {
        self.engine.options().strict
    }

    pub(crate) fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        self.depth += 1;
        if self.depth > DEFAULT_MAX_DEPTH {
            return Err(EvalError::new(EvalErrorKind::ResourceExceeded {
                depth: self.depth,
                max_depth: DEFAULT_MAX_DEPTH,
            })
            .with_span(expr.span.clone()));
        }
        let result = self
            .eval_kind(expr)
            .map_err(|e| e.with_span(expr.span.clone()));
        self.depth -= 1;
        result
    }

    fn eval_kind(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(match literal {
                Literal::Int(i) => Value::Int(*i),
                Literal::Float(f) => Value::Float(*f),
                Literal::Str(s) => Value::str(s),
                Literal::Bool(b) => Value::Bool(*b),
                Literal::Null => Value::Null,
            }),

            ExprKind::Ident(name) => match self.context.get(name) {
                Some(value) => Ok(value.clone()),
                None if self.strict() => Err(RuntimeError::UndefinedVariable {
                    name: name.clone(),
                }
                .into()),
                None => Ok(Value::Null),
            },

            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Ok(operators::eval_binary(*op, &lhs, &rhs, self.strict())?)
            }

            ExprKind::Boolean { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let lhs = operators::truthy(&lhs, self.strict())?;
                match op {
                    BoolOp::And if !lhs => return Ok(Value::Bool(false)),
                    BoolOp::Or if lhs => return Ok(Value::Bool(true)),
                    _ => {}
                }
                let rhs = self.eval(rhs)?;
                Ok(Value::Bool(operators::truthy(&rhs, self.strict())?))
            }

            ExprKind::Comparison { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Ok(operators::eval_comparison(*op, &lhs, &rhs)?)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                match op {
                    UnaryOp::Neg => Ok(operators::eval_neg(&operand, self.strict())?),
                    UnaryOp::Not => {
                        Ok(Value::Bool(!operators::truthy(&operand, self.strict())?))
                    }
                }
            }

            ExprKind::Ternary {
                condition,
                if_true,
                if_false,
            } => {
                let condition = self.eval(condition)?;
                if operators::truthy(&condition, self.strict())? {
                    self.eval(if_true)
                } else {
                    self.eval(if_false)
                }
            }

            ExprKind::Property { value, name } => {
                let container = self.eval(value)?;
                self.resolve_get(None, &container, &Value::str(name))
            }

            ExprKind::Index { value, index } => {
                let container = self.eval(value)?;
                let key = self.eval(index)?;
                self.resolve_get(Some(AccessOperator::IndexGet), &container, &key)
            }

            ExprKind::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }

            ExprKind::Map(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    out.push((self.eval(key)?, self.eval(value)?));
                }
                Ok(Value::map(out))
            }

            ExprKind::NamespaceCall {
                namespace,
                function,
                args,
            } => {
                let Some(provider) = self.engine.namespace(namespace) else {
                    return Err(RuntimeError::UnknownNamespace {
                        namespace: namespace.clone(),
                    }
                    .into());
                };
                let provider = provider.clone();
                if !provider.function_names().contains(&function.as_str()) {
                    return Err(RuntimeError::UnknownFunction {
                        namespace: namespace.clone(),
                        function: function.clone(),
                    }
                    .into());
                }
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(provider.call(function, &args)?)
            }

            ExprKind::MethodCall {
                value,
                method,
                args,
            } => {
                let receiver = self.eval(value)?;
                if receiver.is_null() {
                    if self.strict() {
                        return Err(RuntimeError::NullOperand {
                            operation: "method call",
                        }
                        .into());
                    }
                    return Ok(Value::Null);
                }
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                if let Some(object) = receiver.as_object() {
                    if let Some(result) = object.call_method(method, &args) {
                        return Ok(result?);
                    }
                }
                match builtin_method(&receiver, method, &args) {
                    Some(result) => Ok(result?),
                    None => Err(RuntimeError::UnknownMethod {
                        method: method.clone(),
                        type_name: receiver.type_name().to_string(),
                    }
                    .into()),
                }
            }

            ExprKind::Assign { target, value } => {
                let value = self.eval(value)?;
                match &target.kind {
                    ExprKind::Ident(name) => {
                        self.context.set(name.clone(), value.clone());
                        Ok(value)
                    }
                    ExprKind::Property { value: base, name } => {
                        let container = self.eval(base)?;
                        let key = Value::str(name);
                        if self.engine.introspector().set(None, &container, &key, &value) {
                            Ok(value)
                        } else {
                            Err(RuntimeError::InvalidAssignment {
                                target: name.clone(),
                            }
                            .into())
                        }
                    }
                    ExprKind::Index { value: base, index } => {
                        let container = self.eval(base)?;
                        let key = self.eval(index)?;
                        if self.engine.introspector().set(
                            Some(AccessOperator::IndexSet),
                            &container,
                            &key,
                            &value,
                        ) {
                            Ok(value)
                        } else {
                            Err(RuntimeError::InvalidAssignment {
                                target: key.to_string(),
                            }
                            .into())
                        }
                    }
                    // The parser rejects other targets.
                    _ => Err(RuntimeError::InvalidAssignment {
                        target: "expression".to_string(),
                    }
                    .into()),
                }
            }
        }
    }

    fn resolve_get(
        &self,
        operator: Option<AccessOperator>,
        container: &Value,
        key: &Value,
    ) -> Result<Value, EvalError> {
        if container.is_null() {
            if self.strict() {
                return Err(RuntimeError::NullOperand {
                    operation: "property access",
                }
                .into());
            }
            return Ok(Value::Null);
        }
        match self.engine.introspector().get(operator, container, key) {
            Some(value) => Ok(value),
            None if self.strict() => Err(RuntimeError::UnresolvableProperty {
                key: key.to_string(),
                container: container.type_name().to_string(),
            }
            .into()),
            None => Ok(Value::Null),
        }
    }
}

/// Built-in methods on the structural types.
fn builtin_method(
    receiver: &Value,
    method: &str,
    args: &[Value],
) -> Option<Result<Value, RuntimeError>> {
    match method {
        "size" | "length" => {
            let len = match receiver {
                Value::Str(s) => s.chars().count(),
                Value::Array(items) => items.borrow().len(),
                Value::Map(map) => map.borrow().len(),
                _ => return None,
            };
            Some(Ok(Value::Int(len as i64)))
        }
        "empty" | "isEmpty" => {
            let empty = match receiver {
                Value::Str(s) => s.is_empty(),
                Value::Array(items) => items.borrow().is_empty(),
                Value::Map(map) => map.borrow().is_empty(),
                _ => return None,
            };
            Some(Ok(Value::Bool(empty)))
        }
        "contains" => {
            if args.len() != 1 {
                return Some(Err(RuntimeError::ArityMismatch {
                    function: "contains",
                    expected: 1,
                    got: args.len(),
                }));
            }
            let needle = &args[0];
            let found = match receiver {
                Value::Str(s) => match needle.as_str() {
                    Some(sub) => s.contains(sub),
                    None => false,
                },
                Value::Array(items) => items.borrow().iter().any(|item| item == needle),
                Value::Map(map) => map.borrow().contains_key(needle),
                _ => return None,
            };
            Some(Ok(Value::Bool(found)))
        }
        "keys" => {
            let map = receiver.as_map()?;
            let keys = map.borrow().keys().cloned().collect();
            Some(Ok(Value::array(keys)))
        }
        "values" => {
            let map = receiver.as_map()?;
            let values = map.borrow().values().cloned().collect();
            Some(Ok(Value::array(values)))
        }
        _ => None,
    }
}
