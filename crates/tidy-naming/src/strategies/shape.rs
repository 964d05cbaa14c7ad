//! Shape naming by fill content

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{NodeCategory, PaintKind, SceneNode};

/// Names rectangles and ellipses after their media fill
///
/// A video fill wins over an image fill; without either the category label
/// is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeNamingStrategy;

impl ShapeNamingStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamingStrategy for ShapeNamingStrategy {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        matches!(node.category, NodeCategory::Rectangle | NodeCategory::Ellipse)
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        let node = ctx.node;
        if !self.can_handle(node) {
            return Err(NamingError::wrong_category(self.name(), node));
        }

        let has_fill = |kind: PaintKind| node.props.fills.iter().any(|fill| fill.kind == kind);
        let base = if has_fill(PaintKind::Video) {
            "video".to_string()
        } else if has_fill(PaintKind::Image) {
            "image".to_string()
        } else {
            node.category.label()
        };

        Ok(SemanticName::structural(base))
    }
}
