//! Flashmap CLI library
//!
//! This module contains the core CLI logic for the Flashmap mind-map tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info, warn};
use miette::GraphicalReportHandler;

use flashmap::{
    ExportFormat, FlashmapError, MindMapBuilder, ParseOutput, identifier::NodeId,
    view::HierarchyViewModel,
};

use error_adapter::diagnostic_reportables;

/// Run the Flashmap CLI application
///
/// This function parses the input file, reports any parse diagnostics, and
/// writes the requested rendering to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FlashmapError` for:
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<(), FlashmapError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        format:? = args.format;
        "Processing mind map"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = MindMapBuilder::new(app_config);
    let output = builder.parse(&source);
    report_diagnostics(&output, &source);

    let rendered = match args.format {
        OutputFormat::Outline => builder.export(output.forest(), ExportFormat::Outline),
        OutputFormat::Diagram => builder.export(output.forest(), ExportFormat::Diagram),
        OutputFormat::Tree => {
            let mut view = HierarchyViewModel::new();
            view.initialize(output.into_forest());
            apply_expansion(&mut view, args);
            builder.render_tree(&view)
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Mind map exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Applies `--expand-all`, then each `--expand`, then each `--collapse`.
fn apply_expansion(view: &mut HierarchyViewModel, args: &Args) {
    if args.expand_all {
        view.expand_all();
    }

    for id in &args.expand {
        let id = resolve_node(view, id);
        view.expand(id);
    }
    for id in &args.collapse {
        let id = resolve_node(view, id);
        view.collapse(id);
    }
}

fn resolve_node(view: &HierarchyViewModel, id: &str) -> NodeId {
    let id = NodeId::new(id);
    if !view.forest().contains(id) {
        warn!(node:% = id; "No node with this id, ignoring");
    }
    id
}

/// Renders each parse diagnostic through miette and logs it as a warning.
fn report_diagnostics(output: &ParseOutput, source: &str) {
    if output.diagnostics().is_empty() {
        return;
    }

    let reporter = GraphicalReportHandler::new();
    for reportable in diagnostic_reportables(output.diagnostics(), source) {
        let mut writer = String::new();
        match reporter.render_report(&mut writer, &reportable) {
            Ok(()) => warn!("{writer}"),
            Err(err) => debug!(err:?; "Failed to render diagnostic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(expand_all: bool, expand: &[&str], collapse: &[&str]) -> Args {
        Args {
            input: String::new(),
            output: None,
            format: OutputFormat::Tree,
            config: None,
            expand: expand.iter().map(|s| s.to_string()).collect(),
            collapse: collapse.iter().map(|s| s.to_string()).collect(),
            expand_all,
            log_level: "off".to_string(),
        }
    }

    fn view(source: &str) -> HierarchyViewModel {
        let mut view = HierarchyViewModel::new();
        view.initialize(flashmap_parser::parse(source).into_forest());
        view
    }

    #[test]
    fn test_collapse_applies_after_expand_all() {
        let mut view = view("A-->B\nB-->C\nB-->D");
        apply_expansion(&mut view, &args(true, &[], &["B"]));

        assert!(view.is_expanded(NodeId::new("A")));
        assert!(!view.is_expanded(NodeId::new("B")));
    }

    #[test]
    fn test_collapse_wins_over_expand() {
        let mut view = view("A-->B\nB-->C");
        apply_expansion(&mut view, &args(false, &["B"], &["B"]));

        assert!(!view.is_expanded(NodeId::new("B")));
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut view = view("A-->B");
        apply_expansion(&mut view, &args(false, &["ghost"], &["phantom"]));

        assert!(!view.is_expanded(NodeId::new("ghost")));
        assert!(view.is_expanded(NodeId::new("A")));
    }
}
