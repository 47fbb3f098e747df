//! Operator semantics.

use crate::parser::{BinaryOp, ComparisonOp};
use crate::values::Value;

use super::error::RuntimeError;

/// Numeric operand after coercion: both-int stays int, otherwise float.
enum Num {
    Int(i64),
    Float(f64),
}

fn coerce_numeric(
    value: &Value,
    operation: &'static str,
    strict: bool,
) -> Result<Num, RuntimeError> {
    match value {
        Value::Int(i) => Ok(Num::Int(*i)),
        Value::Float(f) => Ok(Num::Float(*f)),
        // Lenient arithmetic treats null as zero.
        Value::Null if !strict => Ok(Num::Int(0)),
        Value::Null => Err(RuntimeError::NullOperand { operation }),
        other => Err(RuntimeError::TypeMismatch {
            expected: "number".to_string(),
            found: other.type_name().to_string(),
        }),
    }
}

pub fn eval_binary(
    op: BinaryOp,
    lhs: &Value,
    rhs: &Value,
    strict: bool,
) -> Result<Value, RuntimeError> {
    // `+` on a string operand concatenates. A lenient null concatenates
    // as the empty string.
    if op == BinaryOp::Add && (matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_))) {
        if strict && (lhs.is_null() || rhs.is_null()) {
            return Err(RuntimeError::NullOperand { operation: "+" });
        }
        let part = |v: &Value| {
            if v.is_null() {
                String::new()
            } else {
                v.to_string()
            }
        };
        return Ok(Value::str(format!("{}{}", part(lhs), part(rhs))));
    }

    let operation = op.symbol();
    let lhs = coerce_numeric(lhs, operation, strict)?;
    let rhs = coerce_numeric(rhs, operation, strict)?;

    match (lhs, rhs) {
        (Num::Int(a), Num::Int(b)) => {
            let result = match op {
                BinaryOp::Add => a.wrapping_add(b),
                BinaryOp::Sub => a.wrapping_sub(b),
                BinaryOp::Mul => a.wrapping_mul(b),
                BinaryOp::Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.wrapping_div(b)
                }
                BinaryOp::Rem => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.wrapping_rem(b)
                }
            };
            Ok(Value::Int(result))
        }
        (a, b) => {
            let a = match a {
                Num::Int(i) => i as f64,
                Num::Float(f) => f,
            };
            let b = match b {
                Num::Int(i) => i as f64,
                Num::Float(f) => f,
            };
            // Float division follows IEEE 754; no zero check.
            let result = match op {
                BinaryOp::Add => a + b,
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div => a / b,
                BinaryOp::Rem => a % b,
            };
            Ok(Value::Float(result))
        }
    }
}

pub fn eval_comparison(
    op: ComparisonOp,
    lhs: &Value,
    rhs: &Value,
) -> Result<Value, RuntimeError> {
    match op {
        ComparisonOp::Eq => return Ok(Value::Bool(lhs == rhs)),
        ComparisonOp::Neq => return Ok(Value::Bool(lhs != rhs)),
        _ => {}
    }

    let ordering = match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => {
            let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) else {
                return Err(RuntimeError::TypeMismatch {
                    expected: "two numbers or two strings".to_string(),
                    found: format!("{} {} {}", lhs.type_name(), op.symbol(), rhs.type_name()),
                });
            };
            let Some(ordering) = a.partial_cmp(&b) else {
                // NaN compares false against everything.
                return Ok(Value::Bool(false));
            };
            ordering
        }
    };

    let result = match op {
        ComparisonOp::Lt => ordering.is_lt(),
        ComparisonOp::Lte => ordering.is_le(),
        ComparisonOp::Gt => ordering.is_gt(),
        ComparisonOp::Gte => ordering.is_ge(),
        ComparisonOp::Eq | ComparisonOp::Neq => unreachable!("handled above"),
    };
    Ok(Value::Bool(result))
}

pub fn eval_neg(value: &Value, strict: bool) -> Result<Value, RuntimeError> {
    match coerce_numeric(value, "-", strict)? {
        Num::Int(i) => Ok(Value::Int(i.wrapping_neg())),
        Num::Float(f) => Ok(Value::Float(-f)),
    }
}

/// Truthiness for conditions, `!` and short-circuit operators.
pub fn truthy(value: &Value, strict: bool) -> Result<bool, RuntimeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null if strict => Err(RuntimeError::NullOperand {
            operation: "condition",
        }),
        Value::Null => Ok(false),
        Value::Int(i) => Ok(*i != 0),
        Value::Float(f) => Ok(*f != 0.0),
        Value::Str(s) => Ok(!s.is_empty()),
        other => Err(RuntimeError::TypeMismatch {
            expected: "bool".to_string(),
            found: other.type_name().to_string(),
        }),
    }
}
