//! Diagnostic system for the Flashmap parser.
//!
//! Parsing never fails: input that cannot be understood is skipped and
//! reported through this module instead. The system provides:
//! - Diagnostic codes for documentation and searchability
//! - Labeled spans pointing at the offending source lines
//! - Severity levels
//! - A collector for accumulating diagnostics during a parse
//!
//! # Example
//!
//! ```
//! # use flashmap_parser::error::{Diagnostic, DiagnosticCode};
//! # use flashmap_parser::Span;
//!
//! let diag = Diagnostic::warning("line is not an edge or a node definition")
//!     .with_code(DiagnosticCode::W001)
//!     .with_label(Span::new(12..20), "skipped")
//!     .with_help("write edges as `A --> B` and nodes as `A[Label]`");
//!
//! assert_eq!(diag.to_string(), "warning[W001]: line is not an edge or a node definition");
//! ```

mod code;
mod collector;
mod diagnostic;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use label::Label;
pub use severity::Severity;
