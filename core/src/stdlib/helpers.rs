//! The `quill` namespace: general-purpose helpers.

use crate::evaluator::RuntimeError;
use crate::values::{FunctionProvider, Value};

const NAMES: &[&str] = &[
    "coalesce", "length", "contains", "type_of", "to_int", "to_float", "to_str",
];

#[derive(Debug, Default)]
pub struct CoreFunctions;

impl FunctionProvider for CoreFunctions {
    fn function_names(&self) -> &[&'static str] {
        NAMES
    }

    fn call(&self, function: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        match function {
            "coalesce" => Ok(args
                .iter()
                .find(|v| !v.is_null())
                .cloned()
                .unwrap_or(Value::Null)),
            "length" => {
                let value = arg(args, 0, 1, "length")?;
                length(value)
            }
            "contains" => {
                if args.len() != 2 {
                    return Err(RuntimeError::ArityMismatch {
                        function: "contains",
                        expected: 2,
                        got: args.len(),
                    });
                }
                contains(&args[0], &args[1])
            }
            "type_of" => {
                let value = arg(args, 0, 1, "type_of")?;
                Ok(Value::str(value.type_name()))
            }
            "to_int" => to_int(arg(args, 0, 1, "to_int")?),
            "to_float" => to_float(arg(args, 0, 1, "to_float")?),
            "to_str" => {
                let value = arg(args, 0, 1, "to_str")?;
                Ok(Value::str(value.to_string()))
            }
            other => Err(RuntimeError::Function {
                message: format!("no helper function `{other}`"),
            }),
        }
    }
}

fn arg<'a>(
    args: &'a [Value],
    index: usize,
    expected: usize,
    function: &'static str,
) -> Result<&'a Value, RuntimeError> {
    if args.len() != expected {
        return Err(RuntimeError::ArityMismatch {
            function,
            expected,
            got: args.len(),
        });
    }
    Ok(&args[index])
}

fn length(value: &Value) -> Result<Value, RuntimeError> {
    let len = match value {
        Value::Str(s) => s.chars().count(),
        Value::Array(items) => items.borrow().len(),
        Value::Map(map) => map.borrow().len(),
        other => {
            return Err(RuntimeError::TypeMismatch {
                expected: "string, array or map".to_string(),
                found: other.type_name().to_string(),
            });
        }
    };
    Ok(Value::Int(len as i64))
}

fn contains(haystack: &Value, needle: &Value) -> Result<Value, RuntimeError> {
    let found = match haystack {
        Value::Str(s) => match needle.as_str() {
            Some(sub) => s.contains(sub),
            None => false,
        },
        Value::Array(items) => items.borrow().iter().any(|item| item == needle),
        Value::Map(map) => map.borrow().contains_key(needle),
        other => {
            return Err(RuntimeError::TypeMismatch {
                expected: "string, array or map".to_string(),
                found: other.type_name().to_string(),
            });
        }
    };
    Ok(Value::Bool(found))
}

fn to_int(value: &Value) -> Result<Value, RuntimeError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Int(i) => Ok(Value::Int(*i)),
        Value::Float(f) => Ok(Value::Int(*f as i64)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Str(s) => s.trim().parse::<i64>().map(Value::Int).map_err(|_| {
            RuntimeError::Function {
                message: format!("to_int: cannot parse `{s}` as an integer"),
            }
        }),
        other => Err(RuntimeError::TypeMismatch {
            expected: "number, bool or string".to_string(),
            found: other.type_name().to_string(),
        }),
    }
}

fn to_float(value: &Value) -> Result<Value, RuntimeError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Str(s) => s.trim().parse::<f64>().map(Value::Float).map_err(|_| {
            RuntimeError::Function {
                message: format!("to_float: cannot parse `{s}` as a number"),
            }
        }),
        other => Err(RuntimeError::TypeMismatch {
            expected: "number or string".to_string(),
            found: other.type_name().to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;
