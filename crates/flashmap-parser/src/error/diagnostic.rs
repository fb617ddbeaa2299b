//! The core diagnostic type for the Flashmap parser.
//!
//! A [`Diagnostic`] describes one piece of input the parser skipped or
//! reinterpreted, with an optional code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{Severity, code::DiagnosticCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// warning[W001]: line is not an edge or a node definition
///    |
///  3 | A -.-> B
///    | ^^^^^^^^ skipped
///    |
///    = help: write edges as `A --> B` and nodes as `A[Label]`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<DiagnosticCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use flashmap_parser::error::{Diagnostic, DiagnosticCode};
    /// # use flashmap_parser::Span;
    ///
    /// let diag = Diagnostic::warning("edge points to its own source")
    ///     .with_code(DiagnosticCode::W002)
    ///     .with_label(Span::new(0..7), "dropped");
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an advice diagnostic.
    pub fn advice(message: impl Into<String>) -> Self {
        Self::new(Severity::Advice, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the diagnostic code, if any.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[W001]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
