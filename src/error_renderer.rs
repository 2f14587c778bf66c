//! Error rendering using ariadne
//!
//! Parse errors are drawn as reports over the source text, labelled with
//! the name the caller gives for where the text came from (a file name,
//! `<stdin>`, `<repl>`).

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Name used for sources rendered without one.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use tlisp::{Engine, EngineOptions, render_error};
///
/// let mut engine = Engine::new(EngineOptions::default());
/// if let Err(e) = engine.eval_str("{1 2") {
///     render_error(&e, "<repl>");
/// }
/// ```
pub fn render_error(error: &Error, source_name: &str) {
    render_error_to_writer(error, source_name, &mut std::io::stderr(), true).ok();
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source_name: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source_name, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, DEFAULT_SOURCE_NAME, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source_name: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match (error, error.source_text()) {
        (_, Some(source)) => render_diagnostics(
            source_name,
            source,
            &error.diagnostics(),
            writer,
            use_color,
        ),
        (Error::Api(msg), None) => writeln!(writer, "API error: {}", msg),
        (other, None) => writeln!(writer, "{}", other),
    }
}

fn render_diagnostics(
    source_name: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let mut report = Report::build(ReportKind::Error, (source_name, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        report = report.with_label(
            Label::new((source_name, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(colors.next()),
        );

        for related in &diag.related {
            report = report.with_label(
                Label::new((source_name, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(colors.next()),
            );
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((source_name, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
