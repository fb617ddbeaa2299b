//! Integration tests for the MindMapBuilder API
//!
//! These tests verify that the public API works end to end.

use flashmap::{
    ExportFormat, MindMapBuilder,
    config::{AppConfig, DiagramConfig, Direction, OutlineConfig},
    identifier::NodeId,
};

const REFERENCE: &str = r#"
    graph TD
    A[Start]-->B[Process]
    B-->C[End]
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = MindMapBuilder::default();
}

#[test]
fn test_parse_reference_example() {
    let builder = MindMapBuilder::default();
    let output = builder.parse(REFERENCE);

    let forest = output.forest();
    assert_eq!(forest.len(), 3);
    assert_eq!(forest.root_ids(), &[NodeId::new("A")]);
    assert!(output.diagnostics().is_empty());
}

#[test]
fn test_outline_export() {
    let builder = MindMapBuilder::default();
    let output = builder.parse(REFERENCE);

    assert_eq!(
        builder.export(output.forest(), ExportFormat::Outline),
        "Start\n  - Process\n    - End\n"
    );
}

#[test]
fn test_diagram_export_with_config() {
    let config = AppConfig::new(
        OutlineConfig::default(),
        DiagramConfig::new(Direction::LeftRight, 50, None),
    );
    let builder = MindMapBuilder::new(config);
    let output = builder.parse(REFERENCE);
    let diagram = builder.export(output.forest(), ExportFormat::Diagram);

    assert!(diagram.starts_with("graph LR\n"));
    assert!(diagram.contains("    node_0[\"Start\"]\n"));
    assert!(diagram.contains("    node_1 --> node_2\n"));
}

#[test]
fn test_config_from_toml() {
    let config: AppConfig = toml::from_str(
        r#"
        [outline]
        header = "Study Notes"
        indent_width = 4
        "#,
    )
    .expect("Failed to parse config");

    let builder = MindMapBuilder::new(config);
    let output = builder.parse("A-->B");

    assert_eq!(
        builder.export(output.forest(), ExportFormat::Outline),
        "Study Notes\n\nA\n    - B\n"
    );
}

#[test]
fn test_view_and_render_tree() {
    let builder = MindMapBuilder::default();
    let mut view = builder.view(REFERENCE);

    assert_eq!(builder.render_tree(&view), "▾ Start\n  ▸ Process (1)\n");

    view.toggle(NodeId::new("B"));
    assert_eq!(
        builder.render_tree(&view),
        "▾ Start\n  ▾ Process\n    • End\n"
    );
}

#[test]
fn test_messy_input_degrades_gracefully() {
    let source = "```mermaid\ngraph TD\nnot a statement\nA-->A\nA-->B\n```";

    let builder = MindMapBuilder::default();
    let output = builder.parse(source);

    assert_eq!(output.forest().len(), 2);
    assert_eq!(output.diagnostics().len(), 2);
    assert_eq!(
        builder.export(output.forest(), ExportFormat::Outline),
        "A\n  - B\n"
    );
}

#[test]
fn test_empty_input_everywhere() {
    let builder = MindMapBuilder::default();
    let output = builder.parse("");

    assert_eq!(builder.export(output.forest(), ExportFormat::Outline), "");
    assert_eq!(builder.export(output.forest(), ExportFormat::Diagram), "");
    assert_eq!(builder.render_tree(&builder.view("")), "");
}

#[test]
fn test_builder_reusability() {
    let builder = MindMapBuilder::default();

    let first = builder.parse("A-->B");
    let second = builder.parse("X-->Y\nY-->Z");

    assert_eq!(builder.export(first.forest(), ExportFormat::Outline), "A\n  - B\n");
    assert_eq!(
        builder.export(second.forest(), ExportFormat::Outline),
        "X\n  - Y\n    - Z\n"
    );
}
