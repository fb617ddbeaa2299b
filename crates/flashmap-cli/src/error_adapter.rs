//! Adapters for rendering Flashmap errors and parse diagnostics with miette.
//!
//! This module provides the bridge between the library's plain error and
//! diagnostic types and miette's rich formatting used in the CLI.
//!
//! Parse diagnostics are never fatal; they are rendered as warnings or
//! advice next to the source line they refer to. [`FlashmapError`] values
//! are rendered as errors without source snippets.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan,
};

use flashmap::FlashmapError;
use flashmap_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// Adapter for a single parse diagnostic.
///
/// Wraps a [`Diagnostic`] together with its source and implements
/// [`MietteDiagnostic`].
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Warning => MietteSeverity::Warning,
            Severity::Advice => MietteSeverity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`FlashmapError`] values.
pub struct ErrorAdapter<'a>(pub &'a FlashmapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FlashmapError::Io(_) => "flashmap::io",
            FlashmapError::Config(_) => "flashmap::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FlashmapError::Config(_) => Some(Box::new("check the configuration file's values")),
            FlashmapError::Io(_) => None,
        }
    }
}

/// A reportable item that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or an error, providing a
/// uniform interface for rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a parser [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Wrap each parse diagnostic as a [`Reportable`] over `src`.
pub fn diagnostic_reportables<'a>(
    diagnostics: &'a [Diagnostic],
    src: &'a str,
) -> Vec<Reportable<'a>> {
    diagnostics
        .iter()
        .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
        .collect()
}

/// Convert a [`FlashmapError`] into a list of reportable errors.
pub fn to_reportables(err: &FlashmapError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

#[cfg(test)]
mod tests {
    use flashmap_parser::error::DiagnosticCode;

    use super::*;

    #[test]
    fn test_diagnostics_are_separate_reportables() {
        let diags = vec![
            Diagnostic::warning("first warning")
                .with_code(DiagnosticCode::W001)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::advice("some advice")
                .with_code(DiagnosticCode::W003)
                .with_label(Span::new(6..11), "second")
                .with_help("help for second"),
        ];

        let reportables = diagnostic_reportables(&diags, "A-->B\nB-->A");

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "first warning");
        assert_eq!(reportables[1].to_string(), "some advice");
        assert_eq!(reportables[0].severity(), Some(MietteSeverity::Warning));
        assert_eq!(reportables[1].severity(), Some(MietteSeverity::Advice));
        assert_eq!(
            reportables[1].help().map(|h| h.to_string()),
            Some("help for second".to_string())
        );
    }

    #[test]
    fn test_error_reportable() {
        let err = FlashmapError::Config("bad value".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad value");
                assert_eq!(
                    e.code().map(|c| c.to_string()),
                    Some("flashmap::config".to_string())
                );
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::advice("synthetic root")
            .with_label(Span::new(0..5), "primary label")
            .with_secondary_label(Span::new(6..11), "secondary label");

        let adapter = DiagnosticAdapter::new(&diag, "A-->B\nB-->A");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary label"));
        assert_eq!(labels[1].label(), Some("secondary label"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].offset(), 6);
        assert_eq!(labels[1].len(), 5);
    }

    #[test]
    fn test_render_warning_mentions_code_and_help() {
        let diag = Diagnostic::warning("line is not an edge or a node definition")
            .with_code(DiagnosticCode::W001)
            .with_label(Span::new(0..5), "skipped")
            .with_help("write edges as `A --> B`");
        let adapter = DiagnosticAdapter::new(&diag, "prose");

        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &adapter)
            .unwrap();

        assert!(out.contains("W001"));
        assert!(out.contains("line is not an edge or a node definition"));
        assert!(out.contains("write edges as `A --> B`"));
    }
}
