//! Fallback naming

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::SceneNode;

/// Names any node after its lowercase category label
///
/// Matches every node, which makes the registry total.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStrategy;

impl FallbackStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Infallible base name
    #[inline]
    #[must_use]
    pub fn base_name(&self, node: &SceneNode) -> SemanticName {
        SemanticName::structural(node.category.label())
    }
}

#[async_trait]
impl NamingStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, _node: &SceneNode) -> bool {
        true
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        Ok(self.base_name(ctx.node))
    }
}
