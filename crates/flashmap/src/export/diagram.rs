//! Normalized flowchart text.
//!
//! Source ids may contain characters a renderer chokes on, and labels may
//! carry quotes, brackets or markup. The exporter rewrites the forest with
//! generated ids (`node_0`, `node_1`, ...) and sanitized labels, writing all
//! node definitions before any edge:
//!
//! ```text
//! graph TD
//!     node_0["Start"]
//!     node_1["Process"]
//!
//!     node_0 --> node_1
//! ```

use std::collections::{HashMap, HashSet};

use log::debug;

use flashmap_core::{forest::Forest, identifier::NodeId};

use super::{Exporter, join_lines};
use crate::config::DiagramConfig;

const ELLIPSIS: &str = "...";

/// Exporter producing normalized flowchart text.
#[derive(Debug, Clone)]
pub struct DiagramExporter<'a> {
    config: &'a DiagramConfig,
}

impl<'a> DiagramExporter<'a> {
    /// Creates an exporter using the given settings.
    pub fn new(config: &'a DiagramConfig) -> Self {
        Self { config }
    }

    /// Cleans a label for use inside `["..."]`.
    ///
    /// Falls back to `id` when nothing is left after cleaning.
    pub fn sanitize_label(&self, label: &str, id: NodeId) -> String {
        let cleaned: String = strip_tags(label)
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '(' | ')' | '{' | '}'))
            .map(|c| match c {
                '"' | '`' => '\'',
                '\n' => ' ',
                '\\' => '/',
                other => other,
            })
            .collect();
        let cleaned = cleaned.trim();

        let max = self.config.max_label_len();
        let label = if cleaned.chars().count() > max {
            let keep = max.saturating_sub(ELLIPSIS.len());
            let mut truncated: String = cleaned.chars().take(keep).collect();
            truncated.push_str(ELLIPSIS);
            truncated
        } else {
            cleaned.to_string()
        };

        if label.is_empty() {
            id.to_string()
        } else {
            label
        }
    }
}

impl Exporter for DiagramExporter<'_> {
    fn export(&self, forest: &Forest) -> String {
        if forest.is_empty() {
            return String::new();
        }

        let (order, edges) = definition_order(forest);
        let safe_ids: HashMap<NodeId, String> = order
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, format!("node_{index}")))
            .collect();

        let mut lines = Vec::with_capacity(order.len() + edges.len() + 3);
        lines.push(format!("graph {}", self.config.direction()));

        for id in &order {
            let label = forest.node(*id).map_or("", |node| node.label());
            lines.push(format!(
                "    {}[\"{}\"]",
                safe_ids[id],
                self.sanitize_label(label, *id)
            ));
        }

        lines.push(String::new());
        for (parent, child) in &edges {
            lines.push(format!("    {} --> {}", safe_ids[parent], safe_ids[child]));
        }

        if let Some(style) = self.config.class_def() {
            lines.push(format!(
                "    classDef default {};",
                style.trim().trim_end_matches(';')
            ));
        }

        debug!(nodes = order.len(), edges = edges.len(); "Diagram exported");
        join_lines(&lines)
    }
}

/// Depth-first definition order from the roots, plus every edge leaving a
/// node the first time that node is reached.
///
/// A child's edge is recorded before the child's own subtree, and nodes
/// reached again through another parent are not re-entered.
fn definition_order(forest: &Forest) -> (Vec<NodeId>, Vec<(NodeId, NodeId)>) {
    let mut order = Vec::with_capacity(forest.len());
    let mut defined = HashSet::with_capacity(forest.len());
    let mut edges = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for root in forest.root_ids() {
        if !defined.insert(*root) {
            continue;
        }
        order.push(*root);
        stack.push((*root, 0));

        while let Some((id, next)) = stack.last_mut() {
            let children = forest.node(*id).map_or(&[][..], |node| node.child_ids());
            let Some(child) = children.get(*next).copied() else {
                stack.pop();
                continue;
            };
            *next += 1;
            edges.push((*id, child));

            if defined.insert(child) {
                order.push(child);
                stack.push((child, 0));
            }
        }
    }

    (order, edges)
}

/// Removes `<...>` markup. An unclosed `<` is kept as text.
fn strip_tags(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut rest = label;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}
