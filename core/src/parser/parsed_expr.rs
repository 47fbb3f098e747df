//! The owned expression tree produced by parsing.

use super::syntax::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp};

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Ident(String),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Boolean {
        op: BoolOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Comparison {
        op: ComparisonOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    /// Dotted access, `value.name`.
    Property {
        value: Box<Expr>,
        name: String,
    },
    /// Bracketed access, `value[index]`.
    Index {
        value: Box<Expr>,
        index: Box<Expr>,
    },
    /// `value.method(args)`.
    MethodCall {
        value: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// `namespace:function(args)`.
    NamespaceCall {
        namespace: String,
        function: String,
        args: Vec<Expr>,
    },
    Array(Vec<Expr>),
    Map(Vec<(Expr, Expr)>),
    /// `target = value`; target is an identifier, property, or index.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}
