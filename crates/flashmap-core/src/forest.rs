//! The parsed mind-map forest.
//!
//! A [`Forest`] owns every node of one parse result in an insertion-ordered
//! arena. Parent/child relations are stored as [`NodeId`] lists, so a node
//! that is referenced by two parents (or that takes part in a cycle) is still
//! stored exactly once. Readers work with borrowed [`Node`] handles.
//!
//! # Traversal
//!
//! [`Forest::walk`] and [`Forest::walk_where`] perform a depth-first,
//! pre-order traversal starting at the roots. Every traversal keeps a set of
//! visited ids: a node is yielded at most once, which guarantees termination
//! on shared children and cycles.

use std::{collections::HashSet, fmt};

use indexmap::IndexMap;

use crate::identifier::NodeId;

/// Per-node storage inside the arena.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) label: String,
    /// Whether `label` came from the source rather than the id fallback.
    pub(crate) labeled: bool,
    pub(crate) children: Vec<NodeId>,
}

/// A forest of labeled nodes produced by one parse.
///
/// The forest is immutable once built; see
/// [`ForestBuilder`](crate::builder::ForestBuilder) for construction.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    pub(crate) nodes: IndexMap<NodeId, NodeData>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) synthetic_root: bool,
}

impl Forest {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the root ids in first-creation order.
    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the root nodes in first-creation order.
    pub fn roots(&self) -> impl Iterator<Item = Node<'_>> {
        self.roots.iter().filter_map(|id| self.node(*id))
    }

    /// Returns `true` if the roots were chosen by the cyclic fallback rule
    /// (every node had an incoming edge).
    pub fn has_synthetic_root(&self) -> bool {
        self.synthetic_root
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        self.nodes
            .get_key_value(&id)
            .map(|(id, data)| Node::new(*id, data, self))
    }

    /// Returns every node in first-creation order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.nodes
            .iter()
            .map(|(id, data)| Node::new(*id, data, self))
    }

    /// Full-depth traversal from the roots.
    pub fn walk(&self) -> DepthFirst<'_, fn(Node<'_>) -> bool> {
        self.walk_where(descend_always as fn(Node<'_>) -> bool)
    }

    /// Traversal from the roots that only descends into a node's children
    /// when `descend` returns `true` for that node.
    pub fn walk_where<F>(&self, descend: F) -> DepthFirst<'_, F>
    where
        F: FnMut(Node<'_>) -> bool,
    {
        DepthFirst::new(self, descend)
    }
}

fn descend_always(_: Node<'_>) -> bool {
    true
}

/// Borrowed view of one node in a [`Forest`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    id: NodeId,
    data: &'a NodeData,
    forest: &'a Forest,
}

impl<'a> Node<'a> {
    fn new(id: NodeId, data: &'a NodeData, forest: &'a Forest) -> Self {
        Self { id, data, forest }
    }

    /// Returns the node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the display label (the id text when no label was given).
    pub fn label(&self) -> &'a str {
        &self.data.label
    }

    /// Returns `true` if the label came from the source text.
    pub fn has_explicit_label(&self) -> bool {
        self.data.labeled
    }

    /// Returns the ids of the direct children, in insertion order.
    pub fn child_ids(&self) -> &'a [NodeId] {
        &self.data.children
    }

    /// Returns the direct children, in insertion order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + use<'a> {
        let forest = self.forest;
        self.data
            .children
            .iter()
            .filter_map(move |id| forest.node(*id))
    }

    /// Returns `true` if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.data.children.is_empty()
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("label", &self.data.label)
            .field("children", &self.data.children)
            .finish()
    }
}

/// One step of a depth-first traversal.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The visited node.
    pub node: Node<'a>,
    /// Distance from the root the traversal started at (roots are 0).
    pub depth: usize,
    /// The node this one was reached from, `None` for roots.
    pub parent: Option<NodeId>,
}

/// Pre-order depth-first iterator over a [`Forest`].
///
/// Created by [`Forest::walk`] and [`Forest::walk_where`].
pub struct DepthFirst<'a, F> {
    forest: &'a Forest,
    stack: Vec<(NodeId, usize, Option<NodeId>)>,
    visited: HashSet<NodeId>,
    descend: F,
}

impl<'a, F> DepthFirst<'a, F>
where
    F: FnMut(Node<'_>) -> bool,
{
    fn new(forest: &'a Forest, descend: F) -> Self {
        let stack = forest
            .roots
            .iter()
            .rev()
            .map(|id| (*id, 0, None))
            .collect();

        Self {
            forest,
            stack,
            visited: HashSet::new(),
            descend,
        }
    }
}

impl<'a, F> Iterator for DepthFirst<'a, F>
where
    F: FnMut(Node<'_>) -> bool,
{
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth, parent)) = self.stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            let Some(node) = self.forest.node(id) else {
                continue;
            };

            if (self.descend)(node) {
                self.stack.extend(
                    node.child_ids()
                        .iter()
                        .rev()
                        .filter(|child| !self.visited.contains(*child))
                        .map(|child| (*child, depth + 1, Some(id))),
                );
            }

            return Some(Visit {
                node,
                depth,
                parent,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ForestBuilder;

    fn id(name: &str) -> NodeId {
        NodeId::new(name)
    }

    fn build(edges: &[(&str, &str)]) -> Forest {
        let mut builder = ForestBuilder::new();
        for (parent, child) in edges {
            builder.edge(id(parent), id(child));
        }
        builder.build()
    }

    fn walk_ids(forest: &Forest) -> Vec<(String, usize)> {
        forest
            .walk()
            .map(|visit| (visit.node.id().to_string(), visit.depth))
            .collect()
    }

    #[test]
    fn test_empty_forest() {
        let forest = Forest::new();

        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
        assert!(forest.root_ids().is_empty());
        assert_eq!(forest.walk().count(), 0);
    }

    #[test]
    fn test_walk_preorder_with_depth() {
        let forest = build(&[("A", "B"), ("A", "C"), ("B", "D")]);

        assert_eq!(
            walk_ids(&forest),
            vec![
                ("A".to_string(), 0),
                ("B".to_string(), 1),
                ("D".to_string(), 2),
                ("C".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_walk_reports_parent() {
        let forest = build(&[("A", "B")]);
        let visits: Vec<_> = forest.walk().collect();

        assert_eq!(visits[0].parent, None);
        assert_eq!(visits[1].parent, Some(id("A")));
    }

    #[test]
    fn test_walk_visits_shared_child_once() {
        let forest = build(&[("A", "C"), ("B", "C")]);

        assert_eq!(
            walk_ids(&forest),
            vec![
                ("A".to_string(), 0),
                ("C".to_string(), 1),
                ("B".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_walk_terminates_on_cycle() {
        let forest = build(&[("A", "B"), ("B", "C"), ("C", "A")]);

        assert!(forest.has_synthetic_root());
        assert_eq!(forest.walk().count(), 3);
    }

    #[test]
    fn test_walk_where_stops_descending() {
        let forest = build(&[("A", "B"), ("B", "C")]);
        let visited: Vec<_> = forest
            .walk_where(|node| node.id() == "A")
            .map(|visit| visit.node.id().to_string())
            .collect();

        assert_eq!(visited, vec!["A", "B"]);
    }

    #[test]
    fn test_node_accessors() {
        let forest = build(&[("A", "B"), ("A", "C")]);
        let a = forest.node(id("A")).unwrap();

        assert_eq!(a.label(), "A");
        assert!(!a.has_explicit_label());
        assert!(a.has_children());
        assert_eq!(a.child_ids(), &[id("B"), id("C")]);
        assert_eq!(
            a.children().map(|c| c.id()).collect::<Vec<_>>(),
            vec![id("B"), id("C")]
        );
        assert!(forest.node(id("missing")).is_none());
        assert!(forest.contains(id("C")));
    }

    #[test]
    fn test_nodes_in_creation_order() {
        let forest = build(&[("X", "Y"), ("W", "X")]);
        let order: Vec<_> = forest.nodes().map(|n| n.id().to_string()).collect();

        assert_eq!(order, vec!["X", "Y", "W"]);
    }
}
