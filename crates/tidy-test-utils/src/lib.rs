//! Testing utilities for the Tidy Layers workspace
//!
//! Scene fixtures and engine/session setup shared by integration tests.

#![allow(missing_docs)]

use tidy_core::{
    AllOptions, EngineConfig, MemorySettingsStore, PluginSession, RenameEngine, RenameReport,
};
use tidy_scene::{
    BooleanOperation, LayoutMode, LayoutWrap, NodeCategory, NodeId, NodeRecord, PaintKind,
    SceneDocument, SceneStore,
};

pub type TestSession = PluginSession<SceneDocument, MemorySettingsStore>;

pub fn frame(id: &str, name: &str) -> NodeRecord {
    NodeRecord::new(id, NodeCategory::Frame, name)
}

pub fn row(id: &str, spacing: f64) -> NodeRecord {
    frame(id, "Frame 1").with_layout(
        LayoutMode::Horizontal,
        LayoutWrap::NoWrap,
        spacing,
        Some(spacing),
    )
}

pub fn col(id: &str, spacing: f64) -> NodeRecord {
    frame(id, "Frame 1").with_layout(LayoutMode::Vertical, LayoutWrap::NoWrap, spacing, None)
}

pub fn grid(id: &str, item: f64, counter: f64) -> NodeRecord {
    frame(id, "Frame 1").with_layout(
        LayoutMode::Horizontal,
        LayoutWrap::Wrap,
        item,
        Some(counter),
    )
}

pub fn rectangle(id: &str, name: &str) -> NodeRecord {
    NodeRecord::new(id, NodeCategory::Rectangle, name)
}

pub fn image_rectangle(id: &str) -> NodeRecord {
    rectangle(id, "Rectangle 1").with_fill(PaintKind::Image)
}

pub fn text(id: &str, name: &str) -> NodeRecord {
    NodeRecord::new(id, NodeCategory::Text, name)
}

pub fn boolean(id: &str, operation: BooleanOperation) -> NodeRecord {
    NodeRecord::new(id, NodeCategory::BooleanOperation, operation.host_label())
        .with_boolean_operation(operation)
}

/// `Button` component set with one `state=<state>` variant per entry
///
/// Variant ids are `<set_id>:<index>`.
pub fn button_set(set_id: &str, states: &[&str]) -> NodeRecord {
    let variants = states.iter().enumerate().map(|(index, state)| {
        NodeRecord::new(
            format!("{set_id}:{index}"),
            NodeCategory::Component,
            format!("state={state}"),
        )
    });
    NodeRecord::new(set_id, NodeCategory::ComponentSet, "Button").with_children(variants)
}

pub fn instance_of(id: &str, component: &str) -> NodeRecord {
    NodeRecord::new(id, NodeCategory::Instance, "Instance").with_main_component(component)
}

/// Document over `records` with every page-level node selected
pub fn scene(records: Vec<NodeRecord>) -> SceneDocument {
    let mut doc = SceneDocument::from_records(records, Vec::new()).unwrap();
    doc.select_all();
    doc
}

/// Document over `records` with only `selected` selected
pub fn scene_with_selection(records: Vec<NodeRecord>, selected: &[&str]) -> SceneDocument {
    let selection = selected.iter().copied().map(NodeId::new).collect();
    SceneDocument::from_records(records, selection).unwrap()
}

pub fn setup_test_engine() -> RenameEngine {
    RenameEngine::new(EngineConfig::default()).unwrap()
}

pub fn setup_test_session(doc: SceneDocument) -> TestSession {
    PluginSession::new(doc, MemorySettingsStore::new(), setup_test_engine())
}

/// Rename the whole selection with `options`
pub async fn rename(doc: &mut SceneDocument, options: &AllOptions) -> RenameReport {
    let roots = doc.selection();
    setup_test_engine().run(doc, &roots, options).await
}

pub fn name(doc: &SceneDocument, id: &str) -> String {
    doc.name_of(&NodeId::new(id)).unwrap_or_default().to_string()
}

/// Page with one of everything: layout frames, media, text, booleans,
/// a variant set with instances, and some custom names
pub fn mixed_page() -> Vec<NodeRecord> {
    vec![
        button_set("9:0", &["default", "hover"]),
        frame("1:0", "Frame 1").with_children([
            row("1:1", 8.0).with_children([
                image_rectangle("1:2"),
                text("1:3", "Text"),
                text("1:4", "Headline"),
            ]),
            grid("1:5", 8.0, 12.0).with_children([
                boolean("1:6", BooleanOperation::Subtract),
                NodeRecord::new("1:7", NodeCategory::Star, "Star 2"),
                rectangle("1:8", "My Custom Button"),
            ]),
            instance_of("1:9", "9:0:1").with_variant("state", "hover"),
            NodeRecord::new("1:10", NodeCategory::Group, "Group 4")
                .with_child(NodeRecord::new("1:11", NodeCategory::Ellipse, "Ellipse 1")),
        ]),
    ]
}
