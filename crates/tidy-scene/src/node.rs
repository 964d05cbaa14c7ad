//! Scene node records
//!
//! A [`SceneNode`] is the engine's view of one layer: structural fields that
//! are only read, a mutable `name`, and the category-specific properties
//! gathered in [`NodeProps`].

use crate::category::NodeCategory;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable node identifier (host ids look like `"12:345"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create id from anything string-like
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One layer of the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Unique id within the document
    pub id: NodeId,
    /// Type tag
    pub category: NodeCategory,
    /// Display name, the only field the engine writes
    pub name: String,
    /// Locked in the editor
    pub locked: bool,
    /// Visible in the editor
    pub visible: bool,
    /// Parent node, `None` for page-level nodes
    pub parent: Option<NodeId>,
    /// Ordered children
    pub children: Vec<NodeId>,
    /// Category-specific properties
    pub props: NodeProps,
}

impl SceneNode {
    /// Create a visible, unlocked node without children
    #[must_use]
    pub fn new(id: impl Into<NodeId>, category: NodeCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            locked: false,
            visible: true,
            parent: None,
            children: Vec::new(),
            props: NodeProps::default(),
        }
    }

    /// Whether this node is an instance
    #[inline]
    #[must_use]
    pub fn is_instance(&self) -> bool {
        self.category == NodeCategory::Instance
    }

    /// Auto-layout view of a frame, `None` when no layout mode is present
    #[must_use]
    pub fn auto_layout(&self) -> Option<AutoLayout> {
        self.props.layout_mode.map(|mode| AutoLayout {
            mode,
            wrap: self.props.layout_wrap,
            item_spacing: self.props.item_spacing,
            counter_axis_spacing: self.props.counter_axis_spacing,
        })
    }
}

/// Category-specific node properties
///
/// Field names follow the host's camelCase property names so documents can
/// be exchanged verbatim. Everything defaults to the host's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeProps {
    /// Fill paints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,

    /// Auto-layout mode, absent on nodes that cannot carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,

    /// Auto-layout wrapping
    pub layout_wrap: LayoutWrap,

    /// Spacing between items on the primary axis
    pub item_spacing: f64,

    /// Spacing between wrapped rows, only meaningful with wrapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,

    /// Operation of a boolean node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_operation: Option<BooleanOperation>,

    /// Variant properties of an instance (ordered)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_properties: Option<IndexMap<String, String>>,

    /// Component an instance was created from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_component: Option<NodeId>,

    /// Scroll overflow direction
    pub overflow_direction: OverflowDirection,

    /// Layer opacity in `0.0..=1.0`
    pub opacity: f64,

    /// Layer effects
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,

    /// Text layer follows its content for naming
    pub auto_rename: bool,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            fills: Vec::new(),
            layout_mode: None,
            layout_wrap: LayoutWrap::NoWrap,
            item_spacing: 0.0,
            counter_axis_spacing: None,
            boolean_operation: None,
            variant_properties: None,
            main_component: None,
            overflow_direction: OverflowDirection::None,
            opacity: 1.0,
            effects: Vec::new(),
            auto_rename: false,
        }
    }
}

/// Read-only view of a frame's auto-layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoLayout {
    /// Layout direction
    pub mode: LayoutMode,
    /// Wrapping
    pub wrap: LayoutWrap,
    /// Primary-axis spacing
    pub item_spacing: f64,
    /// Counter-axis spacing
    pub counter_axis_spacing: Option<f64>,
}

/// Auto-layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No auto-layout
    None,
    /// Children flow left to right
    Horizontal,
    /// Children flow top to bottom
    Vertical,
}

/// Auto-layout wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    /// Single line
    #[default]
    NoWrap,
    /// Wrap into multiple lines
    Wrap,
}

/// Boolean operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BooleanOperation {
    /// Union of shapes
    Union,
    /// Intersection of shapes
    Intersect,
    /// First shape minus the rest
    Subtract,
    /// Symmetric difference
    Exclude,
}

impl BooleanOperation {
    /// All operations in host order
    pub const ALL: [BooleanOperation; 4] =
        [Self::Union, Self::Intersect, Self::Subtract, Self::Exclude];

    /// Lowercase operation label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersect => "intersect",
            Self::Subtract => "subtract",
            Self::Exclude => "exclude",
        }
    }

    /// Name the host gives a freshly created boolean node
    #[must_use]
    pub fn host_label(self) -> &'static str {
        match self {
            Self::Union => "Union",
            Self::Intersect => "Intersect",
            Self::Subtract => "Subtract",
            Self::Exclude => "Exclude",
        }
    }
}

/// Scroll overflow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverflowDirection {
    /// No scrolling
    #[default]
    None,
    /// Horizontal scrolling
    Horizontal,
    /// Vertical scrolling
    Vertical,
    /// Both axes
    Both,
}

/// Fill paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint kind
    #[serde(rename = "type")]
    pub kind: PaintKind,
    /// Whether the paint is enabled
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Paint {
    /// Visible paint of the given kind
    #[inline]
    #[must_use]
    pub fn new(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: true,
        }
    }
}

/// Paint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    /// Solid color
    Solid,
    /// Linear gradient
    GradientLinear,
    /// Radial gradient
    GradientRadial,
    /// Angular gradient
    GradientAngular,
    /// Diamond gradient
    GradientDiamond,
    /// Image fill
    Image,
    /// Video fill
    Video,
    /// Pattern fill
    Pattern,
}

/// Layer effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect kind
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Whether the effect is enabled
    #[serde(default = "default_true")]
    pub visible: bool,
}

/// Effect kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    /// Drop shadow
    DropShadow,
    /// Inner shadow
    InnerShadow,
    /// Layer blur
    LayerBlur,
    /// Background blur
    BackgroundBlur,
    /// Anything newer
    #[serde(other)]
    Other,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_default_to_host_defaults() {
        let props: NodeProps = serde_json::from_str("{}").unwrap();
        assert_eq!(props, NodeProps::default());
        assert!((props.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(props.overflow_direction, OverflowDirection::None);
    }

    #[test]
    fn props_parse_camel_case() {
        let props: NodeProps = serde_json::from_str(
            r#"{
                "layoutMode": "HORIZONTAL",
                "layoutWrap": "WRAP",
                "itemSpacing": 8,
                "counterAxisSpacing": 12,
                "fills": [{ "type": "IMAGE" }]
            }"#,
        )
        .unwrap();

        assert_eq!(props.layout_mode, Some(LayoutMode::Horizontal));
        assert_eq!(props.layout_wrap, LayoutWrap::Wrap);
        assert_eq!(props.counter_axis_spacing, Some(12.0));
        assert_eq!(props.fills[0].kind, PaintKind::Image);
        assert!(props.fills[0].visible);
    }

    #[test]
    fn variant_properties_keep_order() {
        let props: NodeProps = serde_json::from_str(
            r#"{ "variantProperties": { "size": "lg", "state": "hover", "icon": "none" } }"#,
        )
        .unwrap();

        let keys: Vec<_> = props
            .variant_properties
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["size", "state", "icon"]);
    }

    #[test]
    fn unknown_effect_kind_is_other() {
        let effect: Effect = serde_json::from_str(r#"{ "type": "NOISE" }"#).unwrap();
        assert_eq!(effect.kind, EffectKind::Other);
    }

    #[test]
    fn auto_layout_requires_mode() {
        let mut node = SceneNode::new("1:1", NodeCategory::Frame, "Frame 1");
        assert!(node.auto_layout().is_none());

        node.props.layout_mode = Some(LayoutMode::Vertical);
        node.props.item_spacing = 4.0;
        let layout = node.auto_layout().unwrap();
        assert_eq!(layout.mode, LayoutMode::Vertical);
        assert!((layout.item_spacing - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn boolean_labels() {
        assert_eq!(BooleanOperation::Subtract.label(), "subtract");
        assert_eq!(BooleanOperation::Subtract.host_label(), "Subtract");
    }
}
