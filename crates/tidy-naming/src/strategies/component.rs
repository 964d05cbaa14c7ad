//! Component and component-set naming

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{NodeCategory, SceneNode};

/// Names components `Component` and component sets `ComponentSet`
///
/// Only reached for host-indexed names (`Button 2`); the classifier keeps
/// every other component name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentStrategy;

impl ComponentStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamingStrategy for ComponentStrategy {
    fn name(&self) -> &'static str {
        "component"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        node.category.is_component_like()
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        match ctx.node.category {
            NodeCategory::Component => Ok(SemanticName::structural("Component")),
            NodeCategory::ComponentSet => Ok(SemanticName::structural("ComponentSet")),
            _ => Err(NamingError::wrong_category(self.name(), ctx.node)),
        }
    }
}
