//! Vector and whiteboard shape naming

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{NodeCategory, SceneNode};

/// Categories named after their own label
pub const BASIC_SHAPE_CATEGORIES: [NodeCategory; 10] = [
    NodeCategory::Line,
    NodeCategory::Polygon,
    NodeCategory::Star,
    NodeCategory::Vector,
    NodeCategory::Sticky,
    NodeCategory::Connector,
    NodeCategory::ShapeWithText,
    NodeCategory::Stamp,
    NodeCategory::Highlight,
    NodeCategory::WashiTape,
];

/// Names vector and whiteboard shapes after their category
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicShapeStrategy;

impl BasicShapeStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamingStrategy for BasicShapeStrategy {
    fn name(&self) -> &'static str {
        "basic-shape"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        BASIC_SHAPE_CATEGORIES.contains(&node.category)
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        Ok(SemanticName::structural(ctx.node.category.label()))
    }
}
