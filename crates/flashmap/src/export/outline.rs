//! Indented text outline of a forest.
//!
//! Roots are written flush left; every descendant at depth `d` is indented
//! by `d * indent_width` spaces and prefixed with `- `:
//!
//! ```text
//! Start
//!   - Process
//!     - End
//! ```

use log::debug;

use flashmap_core::forest::Forest;

use super::{Exporter, join_lines};
use crate::config::OutlineConfig;

/// Exporter producing an indented outline.
#[derive(Debug, Clone)]
pub struct OutlineExporter<'a> {
    config: &'a OutlineConfig,
}

impl<'a> OutlineExporter<'a> {
    /// Creates an exporter using the given settings.
    pub fn new(config: &'a OutlineConfig) -> Self {
        Self { config }
    }
}

impl Exporter for OutlineExporter<'_> {
    fn export(&self, forest: &Forest) -> String {
        let mut lines = Vec::with_capacity(forest.len() + 2);
        if let Some(header) = self.config.header() {
            lines.push(header.to_string());
            lines.push(String::new());
        }

        for visit in forest.walk() {
            let label = visit.node.label();
            if visit.depth == 0 {
                lines.push(label.to_string());
            } else {
                let indent = " ".repeat(visit.depth * self.config.indent_width());
                lines.push(format!("{indent}- {label}"));
            }
        }

        debug!(lines = lines.len(); "Outline exported");
        join_lines(&lines)
    }
}


#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0u8..10, 0u8..10), 0..40)
    }

    fn source(edges: &[(u8, u8)]) -> String {
        edges
            .iter()
            .map(|(parent, child)| format!("n{parent}-->n{child}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The outline terminates on any edge set and names each node at most
    /// once.
    fn check_outline_lists_each_node_once(edges: &[(u8, u8)]) -> Result<(), TestCaseError> {
        let forest = flashmap_parser::parse(&source(edges)).into_forest();
        let outline = OutlineExporter::new(&OutlineConfig::default()).export(&forest);

        let names: Vec<&str> = outline
            .lines()
            .map(|line| line.trim_start().trim_start_matches("- "))
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();

        prop_assert_eq!(unique.len(), names.len());
        prop_assert!(names.len() <= forest.len());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn outline_lists_each_node_once(edges in edges_strategy()) {
            check_outline_lists_each_node_once(&edges)?;
        }
    }
}
