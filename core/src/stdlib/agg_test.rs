use pretty_assertions::assert_eq;

use crate::values::{FunctionProvider, Value};

use super::AggregateFunctions;

fn call(function: &str, args: &[Value]) -> Value {
    AggregateFunctions.call(function, args).unwrap()
}

#[test]
fn sum_preserves_ints() {
    assert_eq!(
        call("sum", &[Value::Int(1), Value::Int(2), Value::Int(3)]),
        Value::Int(6)
    );
    assert_eq!(
        call("sum", &[Value::Int(1), Value::Float(0.5)]),
        Value::Float(1.5)
    );
    assert_eq!(call("sum", &[]), Value::Int(0));
}

#[test]
fn sum_skips_nulls() {
    assert_eq!(
        call("sum", &[Value::Int(1), Value::Null, Value::Int(2)]),
        Value::Int(3)
    );
}

#[test]
fn sum_rejects_non_numbers() {
    assert!(
        AggregateFunctions
            .call("sum", &[Value::str("x")])
            .is_err()
    );
}

#[test]
fn avg_divides_by_present_count() {
    assert_eq!(
        call("avg", &[Value::Int(1), Value::Null, Value::Int(3)]),
        Value::Float(2.0)
    );
    assert_eq!(call("avg", &[Value::Null]), Value::Null);
    assert_eq!(call("avg", &[]), Value::Null);
}

#[test]
fn count_counts_non_nulls() {
    assert_eq!(
        call("count", &[Value::Int(1), Value::Null, Value::str("x")]),
        Value::Int(2)
    );
    assert_eq!(call("count", &[]), Value::Int(0));
}

#[test]
fn min_max_return_original_values() {
    assert_eq!(
        call("min", &[Value::Int(2), Value::Float(1.5), Value::Int(3)]),
        Value::Float(1.5)
    );
    assert_eq!(
        call("max", &[Value::Int(2), Value::Float(1.5), Value::Int(3)]),
        Value::Int(3)
    );
    assert_eq!(call("max", &[Value::Null]), Value::Null);
}

#[test]
fn min_max_order_strings() {
    assert_eq!(
        call("min", &[Value::str("pear"), Value::str("apple")]),
        Value::str("apple")
    );
}

#[test]
fn advertised_names_match_dispatch() {
    for name in AggregateFunctions.function_names() {
        // Every advertised function accepts an empty argument list.
        assert!(AggregateFunctions.call(name, &[]).is_ok(), "{name}");
    }
}
