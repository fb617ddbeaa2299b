//! Collector for accumulating diagnostics during a parse.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during a parse.
///
/// Unlike a fallible phase, the parser never turns collected diagnostics
/// into an error; [`DiagnosticCollector::finish`] simply hands them back.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Finish collection and return the diagnostics in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
