use pretty_assertions::assert_eq;

use super::value::{Value, ValueMap};

#[test]
fn numeric_equality_crosses_int_and_float() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::Float(2.5), Value::Float(2.5));
    assert_ne!(Value::Int(1), Value::Float(1.5));
}

#[test]
fn string_equality_is_exact() {
    assert_eq!(Value::str("abc"), Value::str("abc"));
    assert_ne!(Value::str("abc"), Value::str("ABC"));
    assert_ne!(Value::str("1"), Value::Int(1));
}

#[test]
fn arrays_compare_structurally() {
    let a = Value::array(vec![Value::Int(1), Value::str("x")]);
    let b = Value::array(vec![Value::Int(1), Value::str("x")]);
    assert_eq!(a, b);

    let c = Value::array(vec![Value::Int(1)]);
    assert_ne!(a, c);
}

#[test]
fn value_map_replaces_on_insert() {
    let mut map = ValueMap::new();
    map.insert(Value::str("k"), Value::Int(1));
    map.insert(Value::str("k"), Value::Int(2));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Value::str("k")), Some(Value::Int(2)));
}

#[test]
fn value_map_numeric_keys_cross_type() {
    let mut map = ValueMap::new();
    map.insert(Value::Int(1), Value::str("one"));
    assert_eq!(map.get(&Value::Float(1.0)), Some(Value::str("one")));
}

#[test]
fn display_renders_containers() {
    let v = Value::array(vec![Value::Int(1), Value::str("a"), Value::Null]);
    assert_eq!(v.to_string(), "[1, a, null]");

    let m = Value::map(vec![(Value::str("k"), Value::Int(3))]);
    assert_eq!(m.to_string(), "{k: 3}");
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::map(vec![]).type_name(), "map");
}
