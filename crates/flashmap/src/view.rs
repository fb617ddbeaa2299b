//! Expand/collapse state over a parsed forest.
//!
//! [`HierarchyViewModel`] answers the questions an interactive renderer
//! asks: which nodes are expanded, which have children, and which nodes are
//! currently visible. It holds no UI state beyond the set of expanded ids.
//!
//! Each node is either collapsed or expanded. Roots start expanded and every
//! other node starts collapsed; [`HierarchyViewModel::toggle`] flips one
//! node at a time.

use std::{collections::HashSet, slice};

use log::{debug, trace};

use flashmap_core::{
    forest::{Forest, Node},
    identifier::NodeId,
};

/// View model over one forest and its expansion state.
///
/// # Examples
///
/// ```
/// use flashmap::{identifier::NodeId, view::HierarchyViewModel};
///
/// let forest = flashmap_parser::parse("A-->B\nB-->C").into_forest();
/// let mut view = HierarchyViewModel::new();
/// view.initialize(forest);
///
/// let a = NodeId::new("A");
/// let b = NodeId::new("B");
/// assert!(view.is_expanded(a));
/// assert!(!view.is_expanded(b));
///
/// view.toggle(b);
/// assert_eq!(view.visible_nodes().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HierarchyViewModel {
    forest: Forest,
    expanded: HashSet<NodeId>,
}

impl HierarchyViewModel {
    /// Creates an empty view model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the forest and resets expansion to exactly the roots.
    pub fn initialize(&mut self, forest: Forest) {
        self.expanded = forest.root_ids().iter().copied().collect();
        self.forest = forest;

        debug!(
            nodes = self.forest.len(),
            roots = self.forest.root_ids().len();
            "View model initialized"
        );
    }

    /// Returns the forest being viewed.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Returns the root nodes in first-creation order.
    pub fn roots(&self) -> impl Iterator<Item = Node<'_>> {
        self.forest.roots()
    }

    /// Returns `true` if the node's children are shown.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips the expansion of one node. Unknown ids are ignored.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.forest.contains(id) {
            trace!(node:% = id; "Ignoring toggle of unknown node");
            return;
        }

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        trace!(node:% = id, expanded = self.is_expanded(id); "Node toggled");
    }

    /// Expands one node. Unknown ids are ignored.
    pub fn expand(&mut self, id: NodeId) {
        if self.forest.contains(id) {
            self.expanded.insert(id);
        }
    }

    /// Collapses one node. Unknown ids are ignored.
    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    /// Expands every node.
    pub fn expand_all(&mut self) {
        self.expanded = self.forest.nodes().map(|node| node.id()).collect();
    }

    /// Collapses every node, roots included.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Returns `true` if the node has at least one child; `false` for
    /// unknown ids.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.forest.node(id).is_some_and(|node| node.has_children())
    }

    /// Returns the number of direct children; zero for unknown ids.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.forest
            .node(id)
            .map_or(0, |node| node.child_ids().len())
    }

    /// Direct children of `id` when it is expanded, nothing otherwise.
    ///
    /// The iterator reads the current state on every call.
    pub fn visible_subtree(&self, id: NodeId) -> VisibleChildren<'_> {
        let children = self
            .forest
            .node(id)
            .filter(|_| self.is_expanded(id))
            .map(|node| node.child_ids().iter());

        VisibleChildren {
            forest: &self.forest,
            children,
        }
    }

    /// Every node a renderer would draw, depth-first from the roots.
    ///
    /// Descends only through expanded nodes. A node reachable from several
    /// parents appears once, under the first parent that shows it.
    pub fn visible_nodes(&self) -> Vec<VisibleNode> {
        self.forest
            .walk_where(|node| self.expanded.contains(&node.id()))
            .map(|visit| VisibleNode {
                id: visit.node.id(),
                depth: visit.depth,
            })
            .collect()
    }
}

/// Iterator over the visible direct children of one node.
///
/// Created by [`HierarchyViewModel::visible_subtree`].
#[derive(Debug, Clone)]
pub struct VisibleChildren<'a> {
    forest: &'a Forest,
    children: Option<slice::Iter<'a, NodeId>>,
}

impl<'a> Iterator for VisibleChildren<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let forest = self.forest;
        self.children.as_mut()?.find_map(|id| forest.node(*id))
    }
}

/// One entry of [`HierarchyViewModel::visible_nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode {
    id: NodeId,
    depth: usize,
}

impl VisibleNode {
    /// Returns the node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the depth below the root (roots are 0).
    pub fn depth(&self) -> usize {
        self.depth
    }
}
