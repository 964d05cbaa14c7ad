//! Naming strategy trait and core types
//!
//! Provides the [`NamingStrategy`] trait: one policy object per node
//! category family, tried in priority order by the
//! [`StrategyRegistry`](crate::StrategyRegistry).

use crate::formatter::SemanticName;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tidy_scene::{NodeCategory, NodeId, SceneError, SceneNode, SceneStore};

/// Naming strategy for one family of node categories
///
/// # Contract
/// `can_handle` must be cheap and side-effect free. `generate_name` returns
/// the semantic base name; the registry applies case formatting.
#[async_trait]
pub trait NamingStrategy: Send + Sync + std::fmt::Debug {
    /// Strategy name (for logging/introspection)
    fn name(&self) -> &'static str;

    /// Whether this strategy names `node`
    fn can_handle(&self, node: &SceneNode) -> bool;

    /// Derive the semantic base name for `ctx.node`
    ///
    /// # Errors
    /// Any error makes the registry fall back to the category label for
    /// this node only.
    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        options: &NamingOptions,
    ) -> Result<SemanticName, NamingError>;

    /// Called once before each rename run
    ///
    /// Strategies holding per-node state drop stale entries here.
    fn begin_run(&self) {}
}

/// Everything a strategy may read while naming one node
#[derive(Clone, Copy)]
pub struct NamingContext<'a> {
    /// Node being named
    pub node: &'a SceneNode,
    /// Its parent, if any
    pub parent: Option<&'a SceneNode>,
    /// Host scene for out-of-band lookups
    pub scene: &'a dyn SceneStore,
}

impl<'a> NamingContext<'a> {
    /// Build context for `node`, resolving its parent through `scene`
    #[must_use]
    pub fn new(scene: &'a dyn SceneStore, node: &'a SceneNode) -> Self {
        Self {
            node,
            parent: scene.parent(&node.id),
            scene,
        }
    }
}

impl std::fmt::Debug for NamingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingContext")
            .field("node", &self.node.id)
            .field("parent", &self.parent.map(|p| &p.id))
            .finish_non_exhaustive()
    }
}

/// Options that affect the generated name itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingOptions {
    /// Append auto-layout spacing to frame names
    pub show_spacing: bool,
    /// PascalCase instead of kebab-case
    pub use_pascal_case: bool,
}

/// Tunables of the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Main-component cache lifetime in milliseconds
    pub cache_ttl_ms: u64,
    /// Maximum characters of the variant list before truncation
    pub variant_suffix_limit: usize,
}

impl StrategyConfig {
    /// Main-component cache lifetime
    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: 5_000,
            variant_suffix_limit: 50,
        }
    }
}

/// Naming failures
///
/// These never abort a rename run; the registry logs them and substitutes
/// the fallback name.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// Strategy invoked for a node it does not handle
    #[error("{strategy} cannot name {category} nodes")]
    WrongCategory {
        /// Strategy name
        strategy: &'static str,
        /// Node category
        category: NodeCategory,
    },

    /// Category-specific field absent
    #[error("node {id} has no {field}")]
    MissingField {
        /// Node id
        id: NodeId,
        /// Field name
        field: &'static str,
    },

    /// Host lookup failed
    #[error("lookup failed: {0}")]
    Lookup(#[from] SceneError),

    /// Strategy panicked
    #[error("strategy panicked: {0}")]
    Panicked(String),

    /// Vocabulary produced an unusable pattern
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(#[from] regex::Error),
}

impl NamingError {
    /// Create wrong-category error
    #[inline]
    #[must_use]
    pub fn wrong_category(strategy: &'static str, node: &SceneNode) -> Self {
        Self::WrongCategory {
            strategy,
            category: node.category.clone(),
        }
    }
}
