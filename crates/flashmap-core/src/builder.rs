//! Incremental construction of a [`Forest`].
//!
//! The builder applies the node and edge rules of the mind-map model:
//!
//! - nodes are created on first reference and reused afterwards;
//! - the first non-empty label seen for an id wins;
//! - an edge is recorded at most once per parent/child pair;
//! - a node is never recorded as its own child.
//!
//! [`ForestBuilder::build`] selects the roots: every node without an incoming
//! edge, in creation order. When nodes exist but all of them have an incoming
//! edge, the node with the most children (earliest created on ties) becomes
//! the single synthetic root.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use crate::{
    forest::{Forest, NodeData},
    identifier::NodeId,
};

/// Result of [`ForestBuilder::edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The child was appended to the parent's children.
    Added,
    /// The parent already listed this child; nothing changed.
    Duplicate,
    /// Parent and child are the same node; no edge was recorded.
    SelfLoop,
}

/// Builder for [`Forest`] values.
///
/// # Examples
///
/// ```
/// use flashmap_core::{builder::ForestBuilder, identifier::NodeId};
///
/// let mut builder = ForestBuilder::new();
/// let a = builder.node(NodeId::new("A"), Some("Start"));
/// let b = builder.node(NodeId::new("B"), None);
/// builder.edge(a, b);
///
/// let forest = builder.build();
/// assert_eq!(forest.root_ids(), &[a]);
/// assert_eq!(forest.node(a).unwrap().label(), "Start");
/// ```
#[derive(Debug, Default)]
pub struct ForestBuilder {
    nodes: IndexMap<NodeId, NodeData>,
    has_parent: HashSet<NodeId>,
}

impl ForestBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates the node on first reference, or updates its label.
    ///
    /// The label is applied only if it is non-empty and the node has not
    /// received a label before.
    pub fn node(&mut self, id: NodeId, label: Option<&str>) -> NodeId {
        let label = label.filter(|label| !label.is_empty());
        let data = self.nodes.entry(id).or_insert_with(|| NodeData {
            label: id.to_string(),
            labeled: false,
            children: Vec::new(),
        });

        if let Some(label) = label {
            if !data.labeled {
                data.label = label.to_string();
                data.labeled = true;
            }
        }

        id
    }

    /// Records `parent -> child`, creating either node if needed.
    pub fn edge(&mut self, parent: NodeId, child: NodeId) -> EdgeOutcome {
        self.node(parent, None);
        self.node(child, None);

        if parent == child {
            return EdgeOutcome::SelfLoop;
        }

        let children = &mut self.nodes[&parent].children;
        let outcome = if children.contains(&child) {
            EdgeOutcome::Duplicate
        } else {
            children.push(child);
            EdgeOutcome::Added
        };
        self.has_parent.insert(child);

        outcome
    }

    /// Finishes construction and selects the roots.
    pub fn build(self) -> Forest {
        let Self { nodes, has_parent } = self;

        let mut roots: Vec<NodeId> = nodes
            .keys()
            .filter(|id| !has_parent.contains(*id))
            .copied()
            .collect();

        let mut synthetic_root = false;
        if roots.is_empty() {
            if let Some(root) = most_children(&nodes) {
                debug!(root:% = root; "Every node has a parent, using synthetic root");
                roots.push(root);
                synthetic_root = true;
            }
        }

        Forest {
            nodes,
            roots,
            synthetic_root,
        }
    }
}

/// Node with the greatest number of children; the earliest created wins ties.
fn most_children(nodes: &IndexMap<NodeId, NodeData>) -> Option<NodeId> {
    let mut best: Option<(NodeId, usize)> = None;
    for (id, data) in nodes {
        let count = data.children.len();
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((*id, count));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> NodeId {
        NodeId::new(name)
    }

    #[test]
    fn test_node_defaults_label_to_id() {
        let mut builder = ForestBuilder::new();
        builder.node(id("Topic"), None);
        let forest = builder.build();

        let node = forest.node(id("Topic")).unwrap();
        assert_eq!(node.label(), "Topic");
        assert!(!node.has_explicit_label());
    }

    #[test]
    fn test_first_non_empty_label_wins() {
        let mut builder = ForestBuilder::new();
        builder.node(id("A"), None);
        builder.node(id("A"), Some(""));
        builder.node(id("A"), Some("Hello"));
        builder.node(id("A"), Some("Later"));
        let forest = builder.build();

        assert_eq!(forest.node(id("A")).unwrap().label(), "Hello");
    }

    #[test]
    fn test_label_equal_to_id_still_counts() {
        let mut builder = ForestBuilder::new();
        builder.node(id("A"), Some("A"));
        builder.node(id("A"), Some("Other"));
        let forest = builder.build();

        assert_eq!(forest.node(id("A")).unwrap().label(), "A");
    }

    #[test]
    fn test_edge_outcomes() {
        let mut builder = ForestBuilder::new();

        assert_eq!(builder.edge(id("A"), id("B")), EdgeOutcome::Added);
        assert_eq!(builder.edge(id("A"), id("B")), EdgeOutcome::Duplicate);
        assert_eq!(builder.edge(id("A"), id("A")), EdgeOutcome::SelfLoop);

        let forest = builder.build();
        assert_eq!(forest.node(id("A")).unwrap().child_ids(), &[id("B")]);
    }

    #[test]
    fn test_self_loop_keeps_node_as_root() {
        let mut builder = ForestBuilder::new();
        builder.edge(id("Solo"), id("Solo"));
        let forest = builder.build();

        assert_eq!(forest.root_ids(), &[id("Solo")]);
        assert!(!forest.has_synthetic_root());
        assert!(!forest.node(id("Solo")).unwrap().has_children());
    }

    #[test]
    fn test_roots_in_creation_order() {
        let mut builder = ForestBuilder::new();
        builder.edge(id("R1"), id("C1"));
        builder.node(id("Lonely"), Some("Alone"));
        builder.edge(id("R2"), id("C1"));
        let forest = builder.build();

        assert_eq!(forest.root_ids(), &[id("R1"), id("Lonely"), id("R2")]);
    }

    #[test]
    fn test_synthetic_root_most_children() {
        let mut builder = ForestBuilder::new();
        builder.edge(id("A"), id("B"));
        builder.edge(id("B"), id("A"));
        builder.edge(id("B"), id("C"));
        builder.edge(id("C"), id("B"));
        let forest = builder.build();

        assert!(forest.has_synthetic_root());
        assert_eq!(forest.root_ids(), &[id("B")]);
    }

    #[test]
    fn test_synthetic_root_tie_breaks_on_creation_order() {
        let mut builder = ForestBuilder::new();
        builder.edge(id("P"), id("Q"));
        builder.edge(id("Q"), id("P"));
        let forest = builder.build();

        assert_eq!(forest.root_ids(), &[id("P")]);
    }

    #[test]
    fn test_empty_builder_has_no_roots() {
        let builder = ForestBuilder::new();
        assert!(builder.is_empty());

        let forest = builder.build();
        assert!(forest.root_ids().is_empty());
        assert!(!forest.has_synthetic_root());
    }
}
