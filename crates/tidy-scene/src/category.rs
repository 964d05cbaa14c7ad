//! Node categories
//!
//! The closed set of node type tags a design document can contain, plus an
//! escape hatch for tags this crate does not know about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Node type tag
///
/// Serialized as the upper-snake tag used by the host (`"BOOLEAN_OPERATION"`).
/// Unknown tags are kept verbatim in [`NodeCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeCategory {
    /// Rectangle shape
    Rectangle,
    /// Ellipse shape
    Ellipse,
    /// Regular polygon
    Polygon,
    /// Star shape
    Star,
    /// Free vector path
    Vector,
    /// Straight line
    Line,
    /// Text layer
    Text,
    /// Frame (optionally auto-layout)
    Frame,
    /// Plain group
    Group,
    /// Component definition
    Component,
    /// Variant set of components
    ComponentSet,
    /// Live copy of a component
    Instance,
    /// Boolean combination of child shapes
    BooleanOperation,
    /// Export slice
    Slice,
    /// Whiteboard stamp
    Stamp,
    /// Whiteboard sticky note
    Sticky,
    /// Whiteboard shape with text
    ShapeWithText,
    /// Whiteboard connector
    Connector,
    /// Canvas section
    Section,
    /// Whiteboard highlight
    Highlight,
    /// Whiteboard washi tape
    WashiTape,
    /// Table
    Table,
    /// Code block
    CodeBlock,
    /// Widget
    Widget,
    /// Embed
    Embed,
    /// Link preview
    LinkUnfurl,
    /// Media
    Media,
    /// Tag not known to this crate
    Other(String),
}

impl NodeCategory {
    /// Every known category, in declaration order
    pub const KNOWN: [NodeCategory; 27] = [
        Self::Rectangle,
        Self::Ellipse,
        Self::Polygon,
        Self::Star,
        Self::Vector,
        Self::Line,
        Self::Text,
        Self::Frame,
        Self::Group,
        Self::Component,
        Self::ComponentSet,
        Self::Instance,
        Self::BooleanOperation,
        Self::Slice,
        Self::Stamp,
        Self::Sticky,
        Self::ShapeWithText,
        Self::Connector,
        Self::Section,
        Self::Highlight,
        Self::WashiTape,
        Self::Table,
        Self::CodeBlock,
        Self::Widget,
        Self::Embed,
        Self::LinkUnfurl,
        Self::Media,
    ];

    /// Host tag (`"SHAPE_WITH_TEXT"`)
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
            Self::Text => "TEXT",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Slice => "SLICE",
            Self::Stamp => "STAMP",
            Self::Sticky => "STICKY",
            Self::ShapeWithText => "SHAPE_WITH_TEXT",
            Self::Connector => "CONNECTOR",
            Self::Section => "SECTION",
            Self::Highlight => "HIGHLIGHT",
            Self::WashiTape => "WASHI_TAPE",
            Self::Table => "TABLE",
            Self::CodeBlock => "CODE_BLOCK",
            Self::Widget => "WIDGET",
            Self::Embed => "EMBED",
            Self::LinkUnfurl => "LINK_UNFURL",
            Self::Media => "MEDIA",
            Self::Other(tag) => tag,
        }
    }

    /// Lowercase category label (`"shape_with_text"`)
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Whether this tag is one of the known categories
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Component or component set
    #[inline]
    #[must_use]
    pub fn is_component_like(&self) -> bool {
        matches!(self, Self::Component | Self::ComponentSet)
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeCategory {
    fn from(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| Self::Other(tag.to_string()))
    }
}

impl From<String> for NodeCategory {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<NodeCategory> for String {
    fn from(category: NodeCategory) -> Self {
        category.as_str().to_string()
    }
}

impl FromStr for NodeCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip_through_from() {
        for category in &NodeCategory::KNOWN {
            assert_eq!(&NodeCategory::from(category.as_str()), category);
        }
    }

    #[test]
    fn unknown_tag_is_other() {
        let category = NodeCategory::from("HOLOGRAM");
        assert_eq!(category, NodeCategory::Other("HOLOGRAM".to_string()));
        assert!(!category.is_known());
        assert_eq!(category.label(), "hologram");
    }

    #[test]
    fn label_is_lowercase_tag() {
        assert_eq!(NodeCategory::ShapeWithText.label(), "shape_with_text");
        assert_eq!(NodeCategory::Rectangle.label(), "rectangle");
    }

    #[test]
    fn serde_uses_host_tag() {
        let json = serde_json::to_string(&NodeCategory::ComponentSet).unwrap();
        assert_eq!(json, "\"COMPONENT_SET\"");

        let parsed: NodeCategory = serde_json::from_str("\"WASHI_TAPE\"").unwrap();
        assert_eq!(parsed, NodeCategory::WashiTape);
    }

    #[test]
    fn component_like() {
        assert!(NodeCategory::Component.is_component_like());
        assert!(NodeCategory::ComponentSet.is_component_like());
        assert!(!NodeCategory::Instance.is_component_like());
    }
}
