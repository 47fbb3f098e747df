//! Expression parsing.
//!
//! [`parse`] turns source text into an owned [`Expr`] tree. The tree is
//! immutable once built; compiled expressions share it by reference count.

mod error;
mod parse;
mod parsed_expr;
mod syntax;

#[cfg(test)]
mod parse_test;

pub use error::{ParseError, ParseErrorKind};
pub use parse::{ExpressionParser, Rule, parse};
pub use parsed_expr::{Expr, ExprKind, Literal};
pub use syntax::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp};
