//! Error rendering using ariadne.
//!
//! Parse errors carry spans into the offending source, so they render as
//! annotated snippets. Other errors have no source attached and render as
//! plain lines.

use std::io::Write;

use ariadne::{Label, Report, ReportKind, Source};

use crate::{Diagnostic, Error, Severity};

/// Render an error with rich formatting to stderr.
///
/// # Example
/// ```
/// use quill::{ExpressionFactory, render_error};
///
/// let factory = ExpressionFactory::new();
/// match factory.compile("1 + + 2") {
///     Err(e) => render_error(&e),
///     Ok(_) => {}
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer, such as a file or a buffer.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Same as [`render_error_to_string`] but without ANSI color codes, making
/// the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Parse(parse_error) => render_diagnostic(
            &parse_error.source,
            &parse_error.to_diagnostic(),
            writer,
            use_color,
        ),
        Error::Configuration(e) => writeln!(writer, "configuration error: {e}"),
        Error::DuplicateNamespace { .. } => writeln!(writer, "{error}"),
    }
}

fn render_diagnostic(
    source: &str,
    diagnostic: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = &diagnostic.span else {
        return writeln!(writer, "{}: {}", diagnostic.severity, diagnostic.message);
    };

    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };

    let mut report = Report::build(kind, ("<unknown>", span.0.clone()))
        .with_message(&diagnostic.message)
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new(("<unknown>", span.0.clone())).with_message(&diagnostic.message),
        );

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code);
    }
    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write(("<unknown>", Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use crate::ExpressionFactory;

    use super::*;

    #[test]
    fn renders_parse_errors_with_source() {
        let factory = ExpressionFactory::new();
        let err = factory.compile("1 + + 2").unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert!(output.contains("Error") || output.contains("error"));
        assert!(output.contains("1 + + 2"));
    }

    #[test]
    fn renders_duplicate_namespace_plainly() {
        use std::rc::Rc;

        use crate::NativeFunctions;

        let factory = ExpressionFactory::new();
        let err = factory
            .register_functions("agg", Rc::new(NativeFunctions::new()))
            .unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert!(output.contains("agg"));
        assert!(output.contains("already registered"));
    }
}
