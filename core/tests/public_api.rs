//! End-to-end scenarios through the public surface.

use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use quill_core::api::{CompiledExpression, ExpressionFactory};
use quill_core::context::Context;
use quill_core::introspection::{
    AccessOperator, PermissionSet, ResolverKind, mapping_aware,
};
use quill_core::values::{NativeFunctions, Value};

#[test]
fn evaluate_a_report_expression() {
    let factory = ExpressionFactory::new();
    let mut context = Context::new();
    context.set(
        "order",
        Value::map(vec![
            (Value::str("total"), Value::Float(120.0)),
            (Value::str("discount"), Value::Float(0.25)),
        ]),
    );

    let expr = factory
        .compile("order.total * (1 - order.discount)")
        .unwrap();
    assert_eq!(
        expr.evaluate(&mut context).unwrap(),
        Value::Float(90.0)
    );
}

#[test]
fn custom_namespace_round_trip() {
    let factory = ExpressionFactory::new();
    let math = NativeFunctions::new().with("square", |args| {
        let x = args[0].as_number().unwrap_or(0.0);
        Ok(Value::Float(x * x))
    });
    factory.register_functions("math", Rc::new(math)).unwrap();

    let expr = factory.compile("math:square(4)").unwrap();
    assert_eq!(
        expr.evaluate(&mut Context::new()).unwrap(),
        Value::Float(16.0)
    );
}

#[test]
fn builtin_namespaces_work_out_of_the_box() {
    let factory = ExpressionFactory::new();
    let mut context = Context::new();
    context.set("a", Value::Int(10));
    context.set("b", Value::Null);

    let expr = factory.compile("agg:avg(a, b, 20)").unwrap();
    assert_eq!(expr.evaluate(&mut context).unwrap(), Value::Float(15.0));

    let expr = factory.compile("quill:coalesce(b, a)").unwrap();
    assert_eq!(expr.evaluate(&mut context).unwrap(), Value::Int(10));
}

#[test]
fn identical_configuration_is_a_noop() {
    let factory = ExpressionFactory::new();
    factory.set_lenient(true).unwrap();
    let engine = factory.engine();
    let expr = factory.compile("x").unwrap();

    factory.set_lenient(true).unwrap();
    assert!(Arc::ptr_eq(&engine, &factory.engine()));
    let again = factory.compile("x").unwrap();
    assert!(CompiledExpression::ptr_eq(&expr, &again));
}

#[test]
fn reconfiguration_invalidates_compiled_expressions() {
    let factory = ExpressionFactory::new();
    let strict = factory.compile("missing + 1").unwrap();
    assert!(strict.evaluate(&mut Context::new()).is_err());

    factory.set_lenient(true).unwrap();
    let lenient = factory.compile("missing + 1").unwrap();
    assert!(!CompiledExpression::ptr_eq(&strict, &lenient));
    // Lenient arithmetic treats the missing variable as zero.
    assert_eq!(
        lenient.evaluate(&mut Context::new()).unwrap(),
        Value::Int(1)
    );
    // The strict handle is unaffected by the rebuild.
    assert!(strict.evaluate(&mut Context::new()).is_err());
}

#[test]
fn duplicate_namespace_keeps_the_first_provider() {
    let factory = ExpressionFactory::new();
    let first = NativeFunctions::new().with("version", |_| Ok(Value::Int(1)));
    factory.register_functions("v", Rc::new(first)).unwrap();

    let second = NativeFunctions::new().with("version", |_| Ok(Value::Int(2)));
    assert!(factory.register_functions("v", Rc::new(second)).is_err());

    let expr = factory.compile("v:version()").unwrap();
    assert_eq!(expr.evaluate(&mut Context::new()).unwrap(), Value::Int(1));
}

#[test]
fn resolution_strategy_and_permissions_flow_into_evaluation() {
    let factory = ExpressionFactory::new();
    let engine = factory.engine();

    // Default strategy: maps resolve mapping-first, scalars property-first.
    let map = Value::map(vec![]);
    let order = engine.introspector().resolver_order(None, &map);
    assert_eq!(order[0], ResolverKind::MapAccess);
    let order = engine
        .introspector()
        .resolver_order(Some(AccessOperator::IndexGet), &Value::Int(0));
    assert_eq!(order[0], ResolverKind::MapAccess);
    let order = engine.introspector().resolver_order(None, &Value::Int(0));
    assert_eq!(order[0], ResolverKind::Property);

    // A custom strategy takes effect on the next generation.
    fn property_always(
        _: Option<AccessOperator>,
        _: &Value,
    ) -> &'static [ResolverKind] {
        quill_core::introspection::PROPERTY_FIRST
    }
    factory.set_resolution_strategy(property_always).unwrap();
    let engine = factory.engine();
    let order = engine.introspector().resolver_order(None, &map);
    assert_eq!(order[0], ResolverKind::Property);

    factory.set_resolution_strategy(mapping_aware).unwrap();
    factory
        .set_permissions(PermissionSet::sandboxed())
        .unwrap();
    let engine = factory.engine();
    let order = engine.introspector().resolver_order(None, &Value::Int(0));
    assert!(!order.contains(&ResolverKind::Field));
}

#[test]
fn parse_cache_capacity_reconfiguration() {
    let factory = ExpressionFactory::new();
    assert_eq!(factory.cache_capacity(), 0);

    factory.set_cache_capacity(100).unwrap();
    assert_eq!(factory.cache_capacity(), 100);
    let generation = factory.engine().generation();

    factory.set_cache_capacity(100).unwrap();
    assert_eq!(factory.engine().generation(), generation);

    let expr = factory.compile("1 + 1").unwrap();
    assert_eq!(expr.evaluate(&mut Context::new()).unwrap(), Value::Int(2));
}

#[test]
fn assignments_write_back_into_the_context() {
    let factory = ExpressionFactory::new();
    let mut context = Context::new();
    context.set("m", Value::map(vec![]));

    factory
        .compile("m['count'] = 3")
        .unwrap()
        .evaluate(&mut context)
        .unwrap();
    let expr = factory.compile("m['count'] * 2").unwrap();
    assert_eq!(expr.evaluate(&mut context).unwrap(), Value::Int(6));

    factory
        .compile("total = m['count'] + 1")
        .unwrap()
        .evaluate(&mut context)
        .unwrap();
    assert_eq!(context.get("total"), Some(&Value::Int(4)));
}
