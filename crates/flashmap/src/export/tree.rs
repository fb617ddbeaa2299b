//! Text rendering of the visible part of a view model.
//!
//! Each visible node becomes one line, indented two spaces per depth level:
//!
//! ```text
//! ▾ Start
//!   ▸ Process (1)
//!   • Note
//! ```
//!
//! `▾` marks an expanded node, `▸` a collapsed node followed by its hidden
//! child count, `•` a leaf.

use flashmap_core::forest::Node;

use super::join_lines;
use crate::view::HierarchyViewModel;

const INDENT: &str = "  ";

/// Renderer for [`HierarchyViewModel`] state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders every visible node of `view`.
    pub fn render(&self, view: &HierarchyViewModel) -> String {
        let forest = view.forest();
        let lines: Vec<String> = view
            .visible_nodes()
            .iter()
            .filter_map(|entry| {
                let node = forest.node(entry.id())?;
                Some(format!(
                    "{}{}",
                    INDENT.repeat(entry.depth()),
                    self.marker_line(view, node)
                ))
            })
            .collect();

        join_lines(&lines)
    }

    fn marker_line(&self, view: &HierarchyViewModel, node: Node<'_>) -> String {
        let label = node.label();
        if !node.has_children() {
            format!("• {label}")
        } else if view.is_expanded(node.id()) {
            format!("▾ {label}")
        } else {
            format!("▸ {label} ({})", node.child_ids().len())
        }
    }
}
