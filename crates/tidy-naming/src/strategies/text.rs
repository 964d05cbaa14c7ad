//! Text naming

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{NodeCategory, SceneNode};

/// Names every text layer `text`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStrategy;

impl TextStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamingStrategy for TextStrategy {
    fn name(&self) -> &'static str {
        "text"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        node.category == NodeCategory::Text
    }

    async fn generate_name(
        &self,
        _ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        Ok(SemanticName::structural("text"))
    }
}
