//! Flashmap - interactive mind maps from flowchart-style text.
//!
//! Parsing, expand/collapse state, and text export for mind maps written as
//! `A[Topic] --> B[Subtopic]` edge lists, such as the diagrams produced by
//! note-taking and study tools.

pub mod config;
pub mod export;
pub mod view;

mod error;

pub use flashmap_core::{forest, identifier};
pub use flashmap_parser::ParseOutput;

pub use error::FlashmapError;
pub use export::ExportFormat;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, diagram::DiagramExporter, outline::OutlineExporter, tree::TreeRenderer};
use forest::Forest;
use view::HierarchyViewModel;

/// Builder for parsing, viewing and exporting mind maps.
///
/// # Examples
///
/// ```rust
/// use flashmap::{ExportFormat, MindMapBuilder, config::AppConfig};
///
/// let source = "A[Start]-->B[Process]\nB-->C[End]";
///
/// let builder = MindMapBuilder::new(AppConfig::default());
/// let output = builder.parse(source);
///
/// let outline = builder.export(output.forest(), ExportFormat::Outline);
/// assert_eq!(outline, "Start\n  - Process\n    - End\n");
///
/// // Or use default config
/// let builder = MindMapBuilder::default();
/// let view = builder.view(source);
/// assert_eq!(builder.render_tree(&view), "▾ Start\n  ▸ Process (1)\n");
/// ```
#[derive(Debug, Default)]
pub struct MindMapBuilder {
    config: AppConfig,
}

impl MindMapBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including exporter settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a forest.
    ///
    /// Never fails. Skipped lines and other diagnostics are logged at debug
    /// level and returned alongside the forest for the caller to report.
    ///
    /// # Arguments
    ///
    /// * `source` - Diagram text; an empty string yields an empty forest
    pub fn parse(&self, source: &str) -> ParseOutput {
        info!(bytes = source.len(); "Parsing mind map");

        let output = flashmap_parser::parse(source);
        for diagnostic in output.diagnostics() {
            debug!(severity:% = diagnostic.severity(); "{diagnostic}");
        }

        debug!(
            nodes = output.forest().len(),
            roots = output.forest().root_ids().len();
            "Mind map parsed"
        );
        trace!(forest:? = output.forest(); "Parsed forest");

        output
    }

    /// Parse source text and initialize a view model over the result.
    pub fn view(&self, source: &str) -> HierarchyViewModel {
        let mut view = HierarchyViewModel::new();
        view.initialize(self.parse(source).into_forest());
        view
    }

    /// Export a forest in the given format.
    ///
    /// # Arguments
    ///
    /// * `forest` - The forest to export
    /// * `format` - Outline or diagram text
    pub fn export(&self, forest: &Forest, format: ExportFormat) -> String {
        info!(format:?; "Exporting mind map");

        match format {
            ExportFormat::Outline => OutlineExporter::new(self.config.outline()).export(forest),
            ExportFormat::Diagram => DiagramExporter::new(self.config.diagram()).export(forest),
        }
    }

    /// Render the visible part of a view model.
    pub fn render_tree(&self, view: &HierarchyViewModel) -> String {
        TreeRenderer::new().render(view)
    }
}
