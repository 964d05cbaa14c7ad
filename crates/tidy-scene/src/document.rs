//! In-memory scene document
//!
//! [`SceneDocument`] is a flat arena of [`SceneNode`]s loaded from a nested
//! JSON tree of [`NodeRecord`]s. It implements [`SceneStore`] so it can stand
//! in for a live host: the `tidy` binary renames documents on disk with it,
//! and the tests build fixtures with it.

use crate::category::NodeCategory;
use crate::error::SceneError;
use crate::node::{
    BooleanOperation, LayoutMode, LayoutWrap, NodeId, NodeProps, Paint, PaintKind, SceneNode,
};
use crate::store::{ComponentParent, MainComponent, SceneStore};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Nested, serializable form of a node and its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node id
    pub id: NodeId,
    /// Type tag
    #[serde(rename = "type")]
    pub category: NodeCategory,
    /// Layer name
    pub name: String,
    /// Locked flag
    #[serde(default)]
    pub locked: bool,
    /// Visible flag
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Category-specific properties
    #[serde(flatten)]
    pub props: NodeProps,
    /// Child subtrees
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}

impl NodeRecord {
    /// Visible, unlocked record without children
    #[must_use]
    pub fn new(id: impl Into<NodeId>, category: NodeCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            locked: false,
            visible: true,
            props: NodeProps::default(),
            children: Vec::new(),
        }
    }

    /// Mark locked
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Mark hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Append a child subtree
    #[must_use]
    pub fn with_child(mut self, child: NodeRecord) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child subtrees
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeRecord>) -> Self {
        self.children.extend(children);
        self
    }

    /// Add a visible fill
    #[must_use]
    pub fn with_fill(mut self, kind: PaintKind) -> Self {
        self.props.fills.push(Paint::new(kind));
        self
    }

    /// Set auto-layout
    #[must_use]
    pub fn with_layout(
        mut self,
        mode: LayoutMode,
        wrap: LayoutWrap,
        item_spacing: f64,
        counter_axis_spacing: Option<f64>,
    ) -> Self {
        self.props.layout_mode = Some(mode);
        self.props.layout_wrap = wrap;
        self.props.item_spacing = item_spacing;
        self.props.counter_axis_spacing = counter_axis_spacing;
        self
    }

    /// Set boolean operation
    #[must_use]
    pub fn with_boolean_operation(mut self, operation: BooleanOperation) -> Self {
        self.props.boolean_operation = Some(operation);
        self
    }

    /// Add a variant property, keeping insertion order
    #[must_use]
    pub fn with_variant(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .variant_properties
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Point an instance at its main component
    #[must_use]
    pub fn with_main_component(mut self, component: impl Into<NodeId>) -> Self {
        self.props.main_component = Some(component.into());
        self
    }

    /// Edit properties in place
    #[must_use]
    pub fn with_props(mut self, edit: impl FnOnce(&mut NodeProps)) -> Self {
        edit(&mut self.props);
        self
    }
}

/// On-disk document layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Selected node ids
    #[serde(default)]
    pub selection: Vec<NodeId>,
    /// Page-level subtrees
    pub nodes: Vec<NodeRecord>,
}

/// Arena-backed scene graph
#[derive(Debug, Default)]
pub struct SceneDocument {
    nodes: IndexMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    selection: Vec<NodeId>,
    skip_invisible_instance_children: bool,
    lookups: AtomicUsize,
}

impl SceneDocument {
    /// Empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from page-level records and a selection
    ///
    /// # Errors
    /// Fails on duplicate ids or a selection entry that is not in the tree.
    pub fn from_records(
        records: Vec<NodeRecord>,
        selection: Vec<NodeId>,
    ) -> Result<Self, SceneError> {
        let mut document = Self::new();
        let mut stack: Vec<(NodeRecord, Option<NodeId>)> =
            records.into_iter().rev().map(|r| (r, None)).collect();

        while let Some((record, parent)) = stack.pop() {
            if document.nodes.contains_key(&record.id) {
                return Err(SceneError::DuplicateNode(record.id));
            }
            if parent.is_none() {
                document.roots.push(record.id.clone());
            }

            let NodeRecord {
                id,
                category,
                name,
                locked,
                visible,
                props,
                children,
            } = record;

            let node = SceneNode {
                id: id.clone(),
                category,
                name,
                locked,
                visible,
                parent,
                children: children.iter().map(|c| c.id.clone()).collect(),
                props,
            };
            document.nodes.insert(id.clone(), node);

            for child in children.into_iter().rev() {
                stack.push((child, Some(id.clone())));
            }
        }

        document.select(selection)?;
        tracing::debug!(
            nodes = document.nodes.len(),
            roots = document.roots.len(),
            "scene document loaded"
        );
        Ok(document)
    }

    /// Parse a [`DocumentFile`] JSON string
    ///
    /// # Errors
    /// Fails on malformed JSON or an invalid tree.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let file: DocumentFile = serde_json::from_str(json)?;
        Self::from_records(file.nodes, file.selection)
    }

    /// Serialize back to pretty-printed [`DocumentFile`] JSON
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        let file = DocumentFile {
            selection: self.selection.clone(),
            nodes: self.to_records(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Rebuild the nested record tree
    #[must_use]
    pub fn to_records(&self) -> Vec<NodeRecord> {
        self.roots
            .iter()
            .filter_map(|id| self.record_of(id))
            .collect()
    }

    fn record_of(&self, id: &NodeId) -> Option<NodeRecord> {
        let node = self.nodes.get(id)?;
        Some(NodeRecord {
            id: node.id.clone(),
            category: node.category.clone(),
            name: node.name.clone(),
            locked: node.locked,
            visible: node.visible,
            props: node.props.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.record_of(child))
                .collect(),
        })
    }

    /// Replace the selection
    ///
    /// # Errors
    /// Fails if any id is not in the document; the selection is unchanged.
    pub fn select(&mut self, ids: Vec<NodeId>) -> Result<(), SceneError> {
        if let Some(missing) = ids.iter().find(|id| !self.nodes.contains_key(*id)) {
            return Err(SceneError::NodeNotFound(missing.clone()));
        }
        self.selection = ids;
        Ok(())
    }

    /// Select every page-level node
    pub fn select_all(&mut self) {
        self.selection = self.roots.clone();
    }

    /// Current name of a node
    #[inline]
    #[must_use]
    pub fn name_of(&self, id: &NodeId) -> Option<&str> {
        self.nodes.get(id).map(|n| n.name.as_str())
    }

    /// Page-level node ids
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate nodes in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of main-component lookups served so far
    #[inline]
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Whether invisible instance descendants are currently hidden
    #[inline]
    #[must_use]
    pub fn skips_invisible_instance_children(&self) -> bool {
        self.skip_invisible_instance_children
    }

    fn inside_instance(&self, id: &NodeId) -> bool {
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            if node.is_instance() {
                return true;
            }
            current = node.parent.as_ref().and_then(|p| self.nodes.get(p));
        }
        false
    }
}

#[async_trait]
impl SceneStore for SceneDocument {
    fn node(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn children(&self, id: &NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(id) else {
            return Vec::new();
        };

        let hide_invisible = self.skip_invisible_instance_children && self.inside_instance(id);
        node.children
            .iter()
            .filter(|child| {
                !hide_invisible || self.nodes.get(*child).is_some_and(|c| c.visible)
            })
            .cloned()
            .collect()
    }

    fn selection(&self) -> Vec<NodeId> {
        self.selection.clone()
    }

    fn set_name(&mut self, id: &NodeId, name: String) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| SceneError::NodeNotFound(id.clone()))?;
        node.name = name;
        Ok(())
    }

    fn set_skip_invisible_instance_children(&mut self, skip: bool) {
        self.skip_invisible_instance_children = skip;
    }

    async fn main_component(&self, instance: &NodeId) -> Result<Option<MainComponent>, SceneError> {
        let node = self
            .nodes
            .get(instance)
            .ok_or_else(|| SceneError::NodeNotFound(instance.clone()))?;
        if !node.is_instance() {
            return Err(SceneError::wrong_category(
                instance.clone(),
                NodeCategory::Instance.as_str(),
                node.category.as_str(),
            ));
        }

        self.lookups.fetch_add(1, Ordering::Relaxed);

        let Some(component) = node
            .props
            .main_component
            .as_ref()
            .and_then(|id| self.nodes.get(id))
        else {
            return Ok(None);
        };

        let parent = component
            .parent
            .as_ref()
            .and_then(|id| self.nodes.get(id))
            .map(|parent| ComponentParent {
                id: parent.id.clone(),
                category: parent.category.clone(),
                name: parent.name.clone(),
            });

        Ok(Some(MainComponent {
            id: component.id.clone(),
            name: component.name.clone(),
            parent,
        }))
    }
}

fn default_true() -> bool {
    true
}
