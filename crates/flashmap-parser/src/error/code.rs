//! Diagnostic codes for the Flashmap parser.
//!
//! All codes are warnings (`Wxxx`): the parser degrades gracefully and never
//! rejects its input.

use std::fmt;

/// Codes for categorizing parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Unrecognized line.
    ///
    /// The line is neither an edge (`A --> B`) nor a node definition
    /// (`A[Label]`) and was skipped.
    W001,

    /// Self-referencing edge.
    ///
    /// An edge pointed from a node to itself. The node was kept, the edge
    /// was dropped.
    W002,

    /// Synthetic root.
    ///
    /// Every node has an incoming edge, so the node with the most children
    /// was picked as the root.
    W003,
}

impl DiagnosticCode {
    /// Returns the code as a string (e.g., "W001").
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "W001",
            DiagnosticCode::W002 => "W002",
            DiagnosticCode::W003 => "W003",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "unrecognized line",
            DiagnosticCode::W002 => "self-referencing edge",
            DiagnosticCode::W003 => "synthetic root",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(DiagnosticCode::W001.to_string(), "W001");
        assert_eq!(DiagnosticCode::W003.to_string(), "W003");
    }

    #[test]
    fn test_code_description() {
        assert_eq!(DiagnosticCode::W001.description(), "unrecognized line");
        assert_eq!(DiagnosticCode::W002.description(), "self-referencing edge");
    }
}
