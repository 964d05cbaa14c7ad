//! Instance naming from the main component

use crate::cache::MainComponentCache;
use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy, StrategyConfig};
use async_trait::async_trait;
use indexmap::IndexMap;
use tidy_scene::{MainComponent, NodeCategory, OverflowDirection, SceneNode};

/// Facts about one instance, gathered before its name is built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceState {
    /// Resolved main component
    pub main_component: Option<MainComponent>,
    /// Variant properties in document order
    pub variant_properties: Option<IndexMap<String, String>>,
    /// Local overrides present
    pub has_overrides: bool,
    /// Immediate parent is itself an instance
    pub is_nested: bool,
}

impl InstanceState {
    /// Build state for `node`
    #[must_use]
    pub fn gather(
        node: &SceneNode,
        parent: Option<&SceneNode>,
        main_component: Option<MainComponent>,
    ) -> Self {
        Self {
            main_component,
            variant_properties: node.props.variant_properties.clone(),
            has_overrides: has_overrides(node),
            is_nested: parent.is_some_and(SceneNode::is_instance),
        }
    }

    /// Render `<base>[-[k=v,..]][-(modified)][-(nested)]`
    #[must_use]
    pub fn render(&self, variant_suffix_limit: usize) -> String {
        let base = self
            .main_component
            .as_ref()
            .map_or("Instance", |component| {
                component.variant_set_name().unwrap_or(&component.name)
            });

        let mut parts = vec![base.to_string()];

        if let Some(variants) = self.variant_properties.as_ref().filter(|v| !v.is_empty()) {
            let joined = variants
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("[{}]", truncate(&joined, variant_suffix_limit)));
        }
        if self.has_overrides {
            parts.push("(modified)".to_string());
        }
        if self.is_nested {
            parts.push("(nested)".to_string());
        }

        parts.join("-")
    }
}

fn has_overrides(node: &SceneNode) -> bool {
    let props = &node.props;
    props.overflow_direction != OverflowDirection::None
        || (props.opacity - 1.0).abs() > f64::EPSILON
        || !props.effects.is_empty()
        || !props.fills.is_empty()
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

/// Names instances after their component, variants and override state
///
/// Main-component lookups go through a [`MainComponentCache`] owned by the
/// strategy.
#[derive(Debug)]
pub struct InstanceNamingStrategy {
    cache: MainComponentCache,
    variant_suffix_limit: usize,
}

impl InstanceNamingStrategy {
    /// Create strategy from config
    #[must_use]
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            cache: MainComponentCache::new(config.cache_ttl()),
            variant_suffix_limit: config.variant_suffix_limit,
        }
    }

    /// Main-component cache
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &MainComponentCache {
        &self.cache
    }
}

impl Default for InstanceNamingStrategy {
    fn default() -> Self {
        Self::new(&StrategyConfig::default())
    }
}

#[async_trait]
impl NamingStrategy for InstanceNamingStrategy {
    fn name(&self) -> &'static str {
        "instance"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        node.category == NodeCategory::Instance
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

        let main_component = self
            .cache
            .get_or_fetch(&node.id, || ctx.scene.main_component(&node.id))
            .await?;

        let state = InstanceState::gather(node, ctx.parent, main_component);
        Ok(SemanticName::verbatim(state.render(self.variant_suffix_limit)))
    }

    fn begin_run(&self) {
        let purged = self.cache.purge_expired();
        if purged > 0 {
            tracing::debug!(purged, "dropped expired main-component entries");
        }
    }
}
