//! Frame naming: auto-layout direction and spacing

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{AutoLayout, LayoutMode, LayoutWrap, NodeCategory, SceneNode};

/// Frame layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// No auto-layout
    Frame,
    /// Horizontal with wrapping
    Grid,
    /// Horizontal
    Row,
    /// Vertical
    Col,
}

impl FrameKind {
    /// Classify an auto-layout (or its absence)
    #[must_use]
    pub fn of(layout: Option<&AutoLayout>) -> Self {
        match layout {
            Some(l) if l.mode == LayoutMode::Horizontal && l.wrap == LayoutWrap::Wrap => Self::Grid,
            Some(l) if l.mode == LayoutMode::Horizontal => Self::Row,
            Some(l) if l.mode == LayoutMode::Vertical => Self::Col,
            _ => Self::Frame,
        }
    }

    /// Base name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Grid => "grid",
            Self::Row => "row",
            Self::Col => "col",
        }
    }
}

/// Names frames `frame`, `grid`, `row` or `col`, optionally with spacing
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameNamingStrategy;

impl FrameNamingStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn spacing_suffix(kind: FrameKind, layout: &AutoLayout) -> Option<String> {
        let item = layout.item_spacing;
        match kind {
            FrameKind::Frame => None,
            FrameKind::Row | FrameKind::Col => Some(format!("-[{item}]")),
            FrameKind::Grid => match layout.counter_axis_spacing {
                Some(counter) if (counter - item).abs() > f64::EPSILON => {
                    Some(format!("-[{item}, {counter}]"))
                }
                _ => Some(format!("-[{item}]")),
            },
        }
    }
}

#[async_trait]
impl NamingStrategy for FrameNamingStrategy {
    fn name(&self) -> &'static str {
        "frame"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        node.category == NodeCategory::Frame
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        let node = ctx.node;
        if !self.can_handle(node) {
            return Err(NamingError::wrong_category(self.name(), node));
        }

        let layout = node.auto_layout();
        let kind = FrameKind::of(layout.as_ref());
        let mut base = kind.label().to_string();

        if options.show_spacing {
            if let Some(suffix) = layout.as_ref().and_then(|l| Self::spacing_suffix(kind, l)) {
                base.push_str(&suffix);
            }
        }

        Ok(SemanticName::structural(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_scene::{NodeId, NodeRecord, SceneDocument, SceneStore};

    async fn name_of(record: NodeRecord, show_spacing: bool) -> String {
        let doc = SceneDocument::from_records(vec![record], vec![]).unwrap();
        let node = doc.node(&NodeId::new("1:1")).unwrap();
        let options = NamingOptions {
            show_spacing,
            ..NamingOptions::default()
        };
        FrameNamingStrategy::new()
            .generate_name(&NamingContext::new(&doc, node), &options)
            .await
            .unwrap()
            .text
    }

    fn frame() -> NodeRecord {
        NodeRecord::new("1:1", NodeCategory::Frame, "Frame 1")
    }

    #[tokio::test]
    async fn plain_frame() {
        assert_eq!(name_of(frame(), true).await, "frame");
        let none = frame().with_layout(LayoutMode::None, LayoutWrap::NoWrap, 8.0, None);
        assert_eq!(name_of(none, true).await, "frame");
    }

    #[tokio::test]
    async fn layout_directions() {
        let row = frame().with_layout(LayoutMode::Horizontal, LayoutWrap::NoWrap, 8.0, Some(8.0));
        let grid = frame().with_layout(LayoutMode::Horizontal, LayoutWrap::Wrap, 8.0, Some(8.0));
        let col = frame().with_layout(LayoutMode::Vertical, LayoutWrap::NoWrap, 16.0, None);

        assert_eq!(name_of(row.clone(), false).await, "row");
        assert_eq!(name_of(row, true).await, "row-[8]");
        assert_eq!(name_of(grid, true).await, "grid-[8]");
        assert_eq!(name_of(col, true).await, "col-[16]");
    }

    #[tokio::test]
    async fn grid_with_distinct_axes() {
        let grid = frame().with_layout(LayoutMode::Horizontal, LayoutWrap::Wrap, 8.0, Some(12.0));
        assert_eq!(name_of(grid, true).await, "grid-[8, 12]");

        let fractional =
            frame().with_layout(LayoutMode::Horizontal, LayoutWrap::Wrap, 2.5, Some(4.0));
        assert_eq!(name_of(fractional, true).await, "grid-[2.5, 4]");
    }

    #[tokio::test]
    async fn rejects_other_categories() {
        let doc = SceneDocument::from_records(
            vec![NodeRecord::new("1:1", NodeCategory::Group, "Group 1")],
            vec![],
        )
        .unwrap();
        let node = doc.node(&NodeId::new("1:1")).unwrap();
        let err = FrameNamingStrategy::new()
            .generate_name(&NamingContext::new(&doc, node), &NamingOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, NamingError::WrongCategory { .. }));
    }
}
