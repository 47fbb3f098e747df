use pretty_assertions::assert_eq;

use crate::evaluator::RuntimeError;
use crate::values::{FunctionProvider, Value};

use super::CoreFunctions;

fn call(function: &str, args: &[Value]) -> Value {
    CoreFunctions.call(function, args).unwrap()
}

#[test]
fn coalesce_returns_first_non_null() {
    assert_eq!(
        call("coalesce", &[Value::Null, Value::Int(2), Value::Int(3)]),
        Value::Int(2)
    );
    assert_eq!(call("coalesce", &[Value::Null]), Value::Null);
    assert_eq!(call("coalesce", &[]), Value::Null);
}

#[test]
fn length_counts_chars_items_and_entries() {
    assert_eq!(call("length", &[Value::str("héllo")]), Value::Int(5));
    assert_eq!(
        call("length", &[Value::array(vec![Value::Int(1)])]),
        Value::Int(1)
    );
    assert!(CoreFunctions.call("length", &[Value::Int(1)]).is_err());
}

#[test]
fn contains_checks_substrings_items_and_keys() {
    assert_eq!(
        call("contains", &[Value::str("hello"), Value::str("ell")]),
        Value::Bool(true)
    );
    assert_eq!(
        call(
            "contains",
            &[Value::array(vec![Value::Int(1)]), Value::Int(2)]
        ),
        Value::Bool(false)
    );
    assert_eq!(
        call(
            "contains",
            &[
                Value::map(vec![(Value::str("k"), Value::Null)]),
                Value::str("k")
            ]
        ),
        Value::Bool(true)
    );
}

#[test]
fn conversions() {
    assert_eq!(call("to_int", &[Value::Float(3.9)]), Value::Int(3));
    assert_eq!(call("to_int", &[Value::str(" 42 ")]), Value::Int(42));
    assert_eq!(call("to_int", &[Value::Bool(true)]), Value::Int(1));
    assert_eq!(call("to_float", &[Value::Int(2)]), Value::Float(2.0));
    assert_eq!(call("to_str", &[Value::Int(7)]), Value::str("7"));
    assert_eq!(call("to_int", &[Value::Null]), Value::Null);
    assert!(CoreFunctions.call("to_int", &[Value::str("abc")]).is_err());
}

#[test]
fn type_of_names_runtime_types() {
    assert_eq!(call("type_of", &[Value::Null]), Value::str("null"));
    assert_eq!(call("type_of", &[Value::Float(1.0)]), Value::str("float"));
}

#[test]
fn arity_is_checked() {
    let err = CoreFunctions.call("length", &[]).unwrap_err();
    assert!(matches!(err, RuntimeError::ArityMismatch { .. }));
    let err = CoreFunctions
        .call("contains", &[Value::Null])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::ArityMismatch { .. }));
}
