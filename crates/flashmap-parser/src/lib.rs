//! # Flashmap Parser
//!
//! Lenient parser for the flowchart-style text that describes a mind map.
//! The parser turns source text into a [`Forest`] and never fails: lines it
//! cannot understand are skipped and reported as [`error::Diagnostic`]s.
//!
//! ## Usage
//!
//! ```
//! use flashmap_parser::parse;
//!
//! let output = parse(
//!     r#"
//!     graph TD
//!     A[Start]-->B[Process]
//!     B-->C[End]
//!     "#,
//! );
//!
//! let forest = output.forest();
//! let root = forest.roots().next().unwrap();
//! assert_eq!(root.label(), "Start");
//! assert!(output.diagnostics().is_empty());
//! ```

pub mod error;
mod grammar;
mod source;
mod span;

pub use span::Span;

use std::collections::HashMap;

use log::{debug, trace};

use flashmap_core::{
    builder::{EdgeOutcome, ForestBuilder},
    forest::Forest,
    identifier::NodeId,
};

use error::{Diagnostic, DiagnosticCode, DiagnosticCollector};
use grammar::Statement;

/// The result of parsing: the forest plus any diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    forest: Forest,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// The parsed forest.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Diagnostics for skipped or reinterpreted input, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the output, keeping only the forest.
    pub fn into_forest(self) -> Forest {
        self.forest
    }

    /// Consumes the output, returning the forest and the diagnostics.
    pub fn into_parts(self) -> (Forest, Vec<Diagnostic>) {
        (self.forest, self.diagnostics)
    }
}

/// Parse source text into a forest.
///
/// The source is processed line by line:
///
/// 1. **Clean** - strip code fences and surrounding whitespace
/// 2. **Filter** - drop blank lines, `%%` comments and diagram directives
/// 3. **Classify** - match the line as an edge or a lone node definition
/// 4. **Build** - create nodes, record edges, and finally select roots
///
/// Empty input yields an empty forest.
///
/// # Arguments
///
/// * `source` - The diagram text to parse
pub fn parse(source: &str) -> ParseOutput {
    let mut builder = ForestBuilder::new();
    let mut collector = DiagnosticCollector::new();
    let mut first_seen: HashMap<NodeId, Span> = HashMap::new();
    let mut first_parent_edge: HashMap<NodeId, Span> = HashMap::new();

    for line in source::lines(source) {
        if line.is_ignored() {
            continue;
        }

        let span = line.span();
        match grammar::statement(line.text()) {
            Some(Statement::Edge { parent, child }) => {
                let parent_id = builder.node(NodeId::new(parent.id), parent.label.as_deref());
                let child_id = builder.node(NodeId::new(child.id), child.label.as_deref());
                first_seen.entry(parent_id).or_insert(span);
                first_seen.entry(child_id).or_insert(span);

                match builder.edge(parent_id, child_id) {
                    EdgeOutcome::SelfLoop => {
                        trace!(node:% = parent_id; "Dropping self-referencing edge");
                        collector.emit(
                            Diagnostic::warning(format!(
                                "edge from `{parent_id}` points back to itself"
                            ))
                            .with_code(DiagnosticCode::W002)
                            .with_label(span, "edge dropped")
                            .with_help("a node cannot be its own child"),
                        );
                    }
                    EdgeOutcome::Added | EdgeOutcome::Duplicate => {
                        first_parent_edge.entry(child_id).or_insert(span);
                    }
                }
            }
            Some(Statement::Node(node)) => {
                let node_id = builder.node(NodeId::new(node.id), node.label.as_deref());
                first_seen.entry(node_id).or_insert(span);
            }
            None => {
                trace!(line = line.text(); "Skipping unrecognized line");
                collector.emit(
                    Diagnostic::warning("line is not an edge or a node definition")
                        .with_code(DiagnosticCode::W001)
                        .with_label(span, "skipped")
                        .with_help("write edges as `A --> B` and nodes as `A[Label]`"),
                );
            }
        }
    }

    let forest = builder.build();

    if forest.has_synthetic_root() {
        if let Some(root) = forest.root_ids().first().copied() {
            let mut diagnostic = Diagnostic::advice(format!(
                "every node has a parent; `{root}` was chosen as the root"
            ))
            .with_code(DiagnosticCode::W003)
            .with_help("start the diagram from a single node that nothing points to");

            if let Some(span) = first_seen.get(&root) {
                diagnostic = diagnostic.with_label(*span, "chosen as root");
            }
            if let Some(span) = first_parent_edge.get(&root) {
                diagnostic = diagnostic.with_secondary_label(*span, "also reached from here");
            }
            collector.emit(diagnostic);
        }
    }

    debug!(
        nodes = forest.len(),
        roots = forest.root_ids().len(),
        diagnostics = collector.len();
        "Source parsed"
    );

    ParseOutput {
        forest,
        diagnostics: collector.finish(),
    }
}
