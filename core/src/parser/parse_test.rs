use pretty_assertions::assert_eq;

use super::parse;
use super::parsed_expr::{Expr, ExprKind, Literal};
use super::syntax::{BinaryOp, BoolOp, ComparisonOp, UnaryOp};

fn kind(source: &str) -> ExprKind {
    parse(source).unwrap().kind
}

fn int(expr: &Expr) -> i64 {
    match expr.kind {
        ExprKind::Literal(Literal::Int(i)) => i,
        ref other => panic!("expected int literal, got {other:?}"),
    }
}

#[test]
fn literals() {
    assert_eq!(kind("42"), ExprKind::Literal(Literal::Int(42)));
    assert_eq!(kind("3.5"), ExprKind::Literal(Literal::Float(3.5)));
    assert_eq!(kind("true"), ExprKind::Literal(Literal::Bool(true)));
    assert_eq!(kind("null"), ExprKind::Literal(Literal::Null));
    assert_eq!(
        kind("'hi'"),
        ExprKind::Literal(Literal::Str("hi".to_string()))
    );
    assert_eq!(
        kind("\"a\\nb\""),
        ExprKind::Literal(Literal::Str("a\nb".to_string()))
    );
}

#[test]
fn null_is_not_an_identifier() {
    assert_eq!(kind("null"), ExprKind::Literal(Literal::Null));
    // But a name merely starting with a keyword is an identifier.
    assert_eq!(kind("nullable"), ExprKind::Ident("nullable".to_string()));
}

#[test]
fn arithmetic_is_left_associative() {
    let ExprKind::Binary { op, lhs, rhs } = kind("1 - 2 - 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(int(&rhs), 3);
    let ExprKind::Binary { op, lhs, rhs } = lhs.kind else {
        panic!("expected nested binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(int(&lhs), 1);
    assert_eq!(int(&rhs), 2);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let ExprKind::Binary { op, lhs, rhs } = kind("1 + 2 * 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(int(&lhs), 1);
    assert!(matches!(
        rhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn grouping_overrides_precedence() {
    let ExprKind::Binary { op, lhs, .. } = kind("(1 + 2) * 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(op, BinaryOp::Mul);
    assert!(matches!(
        lhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn comparison_and_boolean_operators() {
    assert!(matches!(
        kind("a < b"),
        ExprKind::Comparison {
            op: ComparisonOp::Lt,
            ..
        }
    ));
    assert!(matches!(
        kind("a == b"),
        ExprKind::Comparison {
            op: ComparisonOp::Eq,
            ..
        }
    ));
    assert!(matches!(
        kind("a && b || c"),
        ExprKind::Boolean { op: BoolOp::Or, .. }
    ));
}

#[test]
fn unary_operators_nest() {
    let ExprKind::Unary { op, operand } = kind("--1") else {
        panic!("expected unary expression");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert!(matches!(
        operand.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
    assert!(matches!(
        kind("!done"),
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
}

#[test]
fn ternary() {
    let ExprKind::Ternary { condition, .. } = kind("a > 1 ? 'big' : 'small'") else {
        panic!("expected ternary expression");
    };
    assert!(matches!(condition.kind, ExprKind::Comparison { .. }));
}

#[test]
fn postfix_chains() {
    let ExprKind::Property { value, name } = kind("order.customer.name") else {
        panic!("expected property access");
    };
    assert_eq!(name, "name");
    assert!(matches!(value.kind, ExprKind::Property { .. }));
}

#[test]
fn index_then_property() {
    let ExprKind::Property { value, name } = kind("rows[0].total") else {
        panic!("expected property access");
    };
    assert_eq!(name, "total");
    assert!(matches!(value.kind, ExprKind::Index { .. }));
}

#[test]
fn method_calls() {
    let ExprKind::MethodCall {
        method, args, ..
    } = kind("items.contains('x')")
    else {
        panic!("expected method call");
    };
    assert_eq!(method, "contains");
    assert_eq!(args.len(), 1);
}

#[test]
fn namespace_calls() {
    let ExprKind::NamespaceCall {
        namespace,
        function,
        args,
    } = kind("agg:sum(a, b, c)")
    else {
        panic!("expected namespace call");
    };
    assert_eq!(namespace, "agg");
    assert_eq!(function, "sum");
    assert_eq!(args.len(), 3);

    let ExprKind::NamespaceCall { args, .. } = kind("agg:count()") else {
        panic!("expected namespace call");
    };
    assert!(args.is_empty());
}

#[test]
fn container_literals() {
    let ExprKind::Array(items) = kind("[1, 2, 3]") else {
        panic!("expected array literal");
    };
    assert_eq!(items.len(), 3);
    assert!(matches!(kind("[]"), ExprKind::Array(items) if items.is_empty()));

    let ExprKind::Map(entries) = kind("{'a': 1, 'b': 2}") else {
        panic!("expected map literal");
    };
    assert_eq!(entries.len(), 2);
    assert!(matches!(kind("{}"), ExprKind::Map(entries) if entries.is_empty()));
}

#[test]
fn assignment_targets() {
    assert!(matches!(kind("x = 1"), ExprKind::Assign { .. }));
    assert!(matches!(kind("a.b = 1"), ExprKind::Assign { .. }));
    assert!(matches!(kind("a[0] = 1"), ExprKind::Assign { .. }));
    assert!(parse("1 = 2").is_err());
    assert!(parse("a + b = 2").is_err());
}

#[test]
fn assignment_is_right_associative() {
    let ExprKind::Assign { value, .. } = kind("a = b = 1") else {
        panic!("expected assignment");
    };
    assert!(matches!(value.kind, ExprKind::Assign { .. }));
}

#[test]
fn spans_cover_the_source() {
    let expr = parse("1 + 22").unwrap();
    assert_eq!(expr.span.0, 0..6);
}

#[test]
fn parse_errors_carry_spans() {
    let err = parse("1 +").unwrap_err();
    assert_eq!(err.source, "1 +");
    assert!(err.span.0.start <= 3);

    assert!(parse("").is_err());
    assert!(parse("a b").is_err());
    assert!(parse("(1").is_err());
}

#[test]
fn invalid_escape_is_rejected() {
    let err = parse("'a\\qb'").unwrap_err();
    assert!(matches!(
        err.kind,
        super::ParseErrorKind::InvalidEscape { .. }
    ));
}

#[test]
fn huge_integer_is_rejected() {
    assert!(parse("99999999999999999999999").is_err());
}
