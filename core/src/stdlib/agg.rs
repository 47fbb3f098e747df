//! The `agg` namespace: reductions over argument lists.

use crate::evaluator::RuntimeError;
use crate::values::{FunctionProvider, Value};

const NAMES: &[&str] = &["sum", "avg", "count", "min", "max"];

/// Aggregate functions. Null arguments are skipped, so missing data does
/// not poison a reduction.
#[derive(Debug, Default)]
pub struct AggregateFunctions;

impl FunctionProvider for AggregateFunctions {
    fn function_names(&self) -> &[&'static str] {
        NAMES
    }

    fn call(&self, function: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let present: Vec<&Value> = args.iter().filter(|v| !v.is_null()).collect();
        match function {
            "sum" => sum(&present),
            "avg" => avg(&present),
            "count" => Ok(Value::Int(present.len() as i64)),
            "min" => extremum(&present, std::cmp::Ordering::Less),
            "max" => extremum(&present, std::cmp::Ordering::Greater),
            other => Err(RuntimeError::Function {
                message: format!("no aggregate function `{other}`"),
            }),
        }
    }
}

fn numeric(value: &Value, function: &'static str) -> Result<f64, RuntimeError> {
    value.as_number().ok_or_else(|| RuntimeError::TypeMismatch {
        expected: format!("number argument to {function}"),
        found: value.type_name().to_string(),
    })
}

/// Int-preserving: the sum stays an int until a float argument appears.
fn sum(args: &[&Value]) -> Result<Value, RuntimeError> {
    let mut int_total = 0i64;
    let mut float_total = 0.0f64;
    let mut saw_float = false;
    for value in args {
        match value {
            Value::Int(i) => int_total = int_total.wrapping_add(*i),
            Value::Float(f) => {
                saw_float = true;
                float_total += f;
            }
            other => {
                return Err(RuntimeError::TypeMismatch {
                    expected: "number argument to sum".to_string(),
                    found: other.type_name().to_string(),
                });
            }
        }
    }
    if saw_float {
        Ok(Value::Float(float_total + int_total as f64))
    } else {
        Ok(Value::Int(int_total))
    }
}

fn avg(args: &[&Value]) -> Result<Value, RuntimeError> {
    if args.is_empty() {
        return Ok(Value::Null);
    }
    let mut total = 0.0;
    for value in args {
        total += numeric(value, "avg")?;
    }
    Ok(Value::Float(total / args.len() as f64))
}

/// Returns the original argument, not a coerced copy.
fn extremum(args: &[&Value], keep: std::cmp::Ordering) -> Result<Value, RuntimeError> {
    let mut best: Option<&Value> = None;
    for value in args {
        let better = match best {
            None => true,
            Some(current) => compare(value, current)? == keep,
        };
        if better {
            best = Some(value);
        }
    }
    Ok(best.cloned().unwrap_or(Value::Null))
}

fn compare(a: &Value, b: &Value) -> Result<std::cmp::Ordering, RuntimeError> {
    if let (Value::Str(a), Value::Str(b)) = (a, b) {
        return Ok(a.cmp(b));
    }
    let (Some(a), Some(b)) = (a.as_number(), b.as_number()) else {
        return Err(RuntimeError::TypeMismatch {
            expected: "comparable arguments".to_string(),
            found: format!("{} and {}", a.type_name(), b.type_name()),
        });
    };
    Ok(a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
#[path = "agg_test.rs"]
mod agg_test;
