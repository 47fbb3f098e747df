//! Parse errors and their diagnostic form.

use std::fmt;

use crate::api::{Diagnostic, Severity};

use super::Rule;
use super::syntax::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken { expected: String, found: String },
    InvalidNumber { text: String },
    InvalidEscape { sequence: String },
    InvalidAssignmentTarget,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        Self {
            kind,
            source: source.to_string(),
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ("P001", None),
            ParseErrorKind::InvalidNumber { .. } => {
                ("P002", Some("numbers are 64-bit integers or floats".to_string()))
            }
            ParseErrorKind::InvalidEscape { .. } => (
                "P003",
                Some("supported escapes are \\\\ \\' \\\" \\n \\t \\r".to_string()),
            ),
            ParseErrorKind::InvalidAssignmentTarget => (
                "P004",
                Some("only variables, properties and indexed slots can be assigned".to_string()),
            ),
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: Some(self.span.clone()),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::InvalidNumber { text } => write!(f, "invalid number `{text}`"),
            ParseErrorKind::InvalidEscape { sequence } => {
                write!(f, "invalid escape sequence `\\{sequence}`")
            }
            ParseErrorKind::InvalidAssignmentTarget => {
                write!(f, "invalid assignment target")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.kind, self.span.0.start, self.span.0.end
        )
    }
}

impl std::error::Error for ParseError {}

/// Lower a pest error to our error type, recovering a span and a readable
/// "expected" list.
pub(super) fn convert_pest_error(error: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::{ErrorVariant, InputLocation};

    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };

    let found = if span.0.start >= source.len() {
        "end of input".to_string()
    } else {
        let rest = &source[span.0.start..];
        let token: String = rest.chars().take_while(|c| !c.is_whitespace()).take(12).collect();
        format!("`{token}`")
    };

    let expected = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let mut names: Vec<&str> = positives.iter().map(|r| rule_name(*r)).collect();
            names.sort_unstable();
            names.dedup();
            names.join(" or ")
        }
        _ => "an expression".to_string(),
    };

    ParseError::new(
        ParseErrorKind::UnexpectedToken { expected, found },
        source,
        span,
    )
}

fn rule_name(rule: Rule) -> &'static str {
    match rule {
        Rule::program | Rule::expression | Rule::ternary => "an expression",
        Rule::or_expr | Rule::and_expr | Rule::equality | Rule::comparison => "an expression",
        Rule::additive | Rule::multiplicative | Rule::unary | Rule::postfix => "an expression",
        Rule::primary | Rule::grouped | Rule::ident_ref | Rule::namespace_call => "an expression",
        Rule::literal | Rule::integer | Rule::float => "a number",
        Rule::string | Rule::dq_inner | Rule::sq_inner => "a string",
        Rule::boolean => "a boolean",
        Rule::null => "null",
        Rule::ident => "an identifier",
        Rule::array => "an array literal",
        Rule::map | Rule::map_entry => "a map literal",
        Rule::arg_list => "an argument list",
        Rule::index => "an index",
        Rule::method_call => "a method call",
        Rule::property => "a property",
        Rule::assign_op | Rule::or_op | Rule::and_op | Rule::eq_op => "an operator",
        Rule::cmp_op | Rule::add_op | Rule::mul_op | Rule::un_op => "an operator",
        Rule::EOI => "end of input",
        _ => "a token",
    }
}
