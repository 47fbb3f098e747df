//! Pest-backed parsing into [`Expr`] trees.

use pest::Parser;
use pest::iterators::Pair;

use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use super::parsed_expr::{Expr, ExprKind, Literal};
use super::syntax::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp};

#[derive(pest_derive::Parser)]
#[grammar = "parser/expr.pest"]
pub struct ExpressionParser;

/// Parse a single expression.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut pairs = ExpressionParser::parse(Rule::program, source)
        .map_err(|e| convert_pest_error(e, source))?;
    let program = pairs
        .next()
        .expect("a successful parse yields the program pair");
    let expression = program
        .into_inner()
        .next()
        .expect("program wraps a single expression");
    build_expression(expression, source)
}

fn build_expression(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let first = build_ternary(inner.next().expect("expression starts with a ternary"), source)?;
    let Some(_assign_op) = inner.next() else {
        return Ok(first);
    };
    let value = build_expression(
        inner.next().expect("assignment operator is followed by a value"),
        source,
    )?;
    match first.kind {
        ExprKind::Ident(_) | ExprKind::Property { .. } | ExprKind::Index { .. } => Ok(Expr {
            kind: ExprKind::Assign {
                target: Box::new(first),
                value: Box::new(value),
            },
            span,
        }),
        _ => Err(ParseError::new(
            ParseErrorKind::InvalidAssignmentTarget,
            source,
            first.span,
        )),
    }
}

fn build_ternary(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let condition = build_or(inner.next().expect("ternary starts with a condition"), source)?;
    let Some(if_true) = inner.next() else {
        return Ok(condition);
    };
    let if_true = build_expression(if_true, source)?;
    let if_false = build_expression(
        inner.next().expect("ternary has both branches"),
        source,
    )?;
    Ok(Expr {
        kind: ExprKind::Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        },
        span,
    })
}

/// Folds a `operand (op operand)*` chain left-associatively.
fn fold_left(
    pair: Pair<Rule>,
    source: &str,
    operand: fn(Pair<Rule>, &str) -> Result<Expr, ParseError>,
    combine: fn(&str, Box<Expr>, Box<Expr>) -> ExprKind,
) -> Result<Expr, ParseError> {
    let mut inner = pair.into_inner();
    let mut lhs = operand(inner.next().expect("chain starts with an operand"), source)?;
    while let Some(op) = inner.next() {
        let rhs = operand(
            inner.next().expect("an operator is followed by an operand"),
            source,
        )?;
        let span = lhs.span.combine(&rhs.span);
        lhs = Expr {
            kind: combine(op.as_str(), Box::new(lhs), Box::new(rhs)),
            span,
        };
    }
    Ok(lhs)
}

fn build_or(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_and, |_, lhs, rhs| ExprKind::Boolean {
        op: BoolOp::Or,
        lhs,
        rhs,
    })
}

fn build_and(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_equality, |_, lhs, rhs| ExprKind::Boolean {
        op: BoolOp::And,
        lhs,
        rhs,
    })
}

fn build_equality(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_comparison, |op, lhs, rhs| {
        let op = match op {
            "==" => ComparisonOp::Eq,
            _ => ComparisonOp::Neq,
        };
        ExprKind::Comparison { op, lhs, rhs }
    })
}

fn build_comparison(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_additive, |op, lhs, rhs| {
        let op = match op {
            "<=" => ComparisonOp::Lte,
            ">=" => ComparisonOp::Gte,
            "<" => ComparisonOp::Lt,
            _ => ComparisonOp::Gt,
        };
        ExprKind::Comparison { op, lhs, rhs }
    })
}

fn build_additive(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_multiplicative, |op, lhs, rhs| {
        let op = match op {
            "+" => BinaryOp::Add,
            _ => BinaryOp::Sub,
        };
        ExprKind::Binary { op, lhs, rhs }
    })
}

fn build_multiplicative(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    fold_left(pair, source, build_unary, |op, lhs, rhs| {
        let op = match op {
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            _ => BinaryOp::Rem,
        };
        ExprKind::Binary { op, lhs, rhs }
    })
}

fn build_unary(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let first = inner.next().expect("unary has an operand");
    match first.as_rule() {
        Rule::un_op => {
            let op = match first.as_str() {
                "-" => UnaryOp::Neg,
                _ => UnaryOp::Not,
            };
            let operand = build_unary(
                inner.next().expect("unary operator has an operand"),
                source,
            )?;
            Ok(Expr {
                kind: ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            })
        }
        _ => build_postfix(first, source),
    }
}

fn build_postfix(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    let mut inner = pair.into_inner();
    let mut value = build_primary(inner.next().expect("postfix starts with a primary"), source)?;
    for op in inner {
        let op_span = Span::from(op.as_span());
        let span = value.span.combine(&op_span);
        value = match op.as_rule() {
            Rule::index => {
                let index = build_expression(
                    op.into_inner().next().expect("index wraps an expression"),
                    source,
                )?;
                Expr {
                    kind: ExprKind::Index {
                        value: Box::new(value),
                        index: Box::new(index),
                    },
                    span,
                }
            }
            Rule::method_call => {
                let mut parts = op.into_inner();
                let method = parts
                    .next()
                    .expect("method call names a method")
                    .as_str()
                    .to_string();
                let args = build_args(parts.next(), source)?;
                Expr {
                    kind: ExprKind::MethodCall {
                        value: Box::new(value),
                        method,
                        args,
                    },
                    span,
                }
            }
            Rule::property => {
                let name = op
                    .into_inner()
                    .next()
                    .expect("property access names a property")
                    .as_str()
                    .to_string();
                Expr {
                    kind: ExprKind::Property {
                        value: Box::new(value),
                        name,
                    },
                    span,
                }
            }
            rule => unreachable!("unexpected postfix rule {rule:?}"),
        };
    }
    Ok(value)
}

fn build_primary(pair: Pair<Rule>, source: &str) -> Result<Expr, ParseError> {
    let span = Span::from(pair.as_span());
    let text = pair.as_str();
    let kind = match pair.as_rule() {
        Rule::integer => {
            let value = text.parse::<i64>().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    source,
                    span.clone(),
                )
            })?;
            ExprKind::Literal(Literal::Int(value))
        }
        Rule::float => {
            let value = text.parse::<f64>().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    source,
                    span.clone(),
                )
            })?;
            ExprKind::Literal(Literal::Float(value))
        }
        Rule::string => {
            let raw = pair
                .into_inner()
                .next()
                .expect("string wraps its contents")
                .as_str();
            ExprKind::Literal(Literal::Str(unescape(raw, source, &span)?))
        }
        Rule::boolean => ExprKind::Literal(Literal::Bool(text == "true")),
        Rule::null => ExprKind::Literal(Literal::Null),
        Rule::ident_ref => ExprKind::Ident(text.to_string()),
        Rule::grouped => {
            return build_expression(
                pair.into_inner().next().expect("group wraps an expression"),
                source,
            );
        }
        Rule::array => {
            let items = pair
                .into_inner()
                .map(|item| build_expression(item, source))
                .collect::<Result<Vec<_>, _>>()?;
            ExprKind::Array(items)
        }
        Rule::map => {
            let entries = pair
                .into_inner()
                .map(|entry| {
                    let mut parts = entry.into_inner();
                    let key =
                        build_expression(parts.next().expect("map entry has a key"), source)?;
                    let value =
                        build_expression(parts.next().expect("map entry has a value"), source)?;
                    Ok((key, value))
                })
                .collect::<Result<Vec<_>, ParseError>>()?;
            ExprKind::Map(entries)
        }
        Rule::namespace_call => {
            let mut parts = pair.into_inner();
            let namespace = parts
                .next()
                .expect("namespace call names a namespace")
                .as_str()
                .to_string();
            let function = parts
                .next()
                .expect("namespace call names a function")
                .as_str()
                .to_string();
            let args = build_args(parts.next(), source)?;
            ExprKind::NamespaceCall {
                namespace,
                function,
                args,
            }
        }
        rule => unreachable!("unexpected primary rule {rule:?}"),
    };
    Ok(Expr { kind, span })
}

fn build_args(pair: Option<Pair<Rule>>, source: &str) -> Result<Vec<Expr>, ParseError> {
    match pair {
        None => Ok(Vec::new()),
        Some(list) => list
            .into_inner()
            .map(|arg| build_expression(arg, source))
            .collect(),
    }
}

fn unescape(raw: &str, source: &str, span: &Span) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            other => {
                let sequence = other.map(String::from).unwrap_or_default();
                return Err(ParseError::new(
                    ParseErrorKind::InvalidEscape { sequence },
                    source,
                    span.clone(),
                ));
            }
        }
    }
    Ok(out)
}
