//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Neither level stops a parse:
/// - [`Severity::Warning`] marks input that was dropped
/// - [`Severity::Advice`] marks input that was kept but interpreted by a
///   fallback rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Part of the input was skipped.
    Warning,

    /// The input was accepted through a fallback rule.
    Advice,
}

impl Severity {
    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns `true` if this is an advice severity.
    pub fn is_advice(&self) -> bool {
        matches!(self, Severity::Advice)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Advice => write!(f, "advice"),
        }
    }
}
