//! Export functionality for Flashmap forests.
//!
//! This module provides the [`Exporter`] trait for turning a parsed
//! [`Forest`] into text, plus a renderer for the interactive view.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Forest
//!     ↓ export (this module)
//! Outline / Diagram text
//! ```
//!
//! # Available Backends
//!
//! - [`outline`] - indented bullet outline via [`outline::OutlineExporter`]
//! - [`diagram`] - normalized flowchart text via [`diagram::DiagramExporter`]
//! - [`tree`] - the visible part of a view model via [`tree::TreeRenderer`]

pub mod diagram;
pub mod outline;
pub mod tree;

use flashmap_core::forest::Forest;

/// Output formats that depend only on the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Indented bullet outline.
    Outline,
    /// Normalized flowchart text.
    Diagram,
}

/// Abstraction for forest export backends.
///
/// Exporting never fails: every forest, including an empty one, has a text
/// rendering.
pub trait Exporter {
    /// Exports the whole forest, ignoring any expansion state.
    fn export(&self, forest: &Forest) -> String;
}

/// Joins lines with `\n`, ending with a newline unless there are no lines.
fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
