//! Strategy registry
//!
//! Holds the naming strategies in priority order plus a total fallback.
//! [`StrategyRegistry::generate_name`] never fails: strategy errors and
//! panics are logged and replaced by the node's category label.

use crate::formatter::NameFormatter;
use crate::strategies::{
    BasicShapeStrategy, BooleanOperationStrategy, ComponentStrategy, FallbackStrategy,
    FrameNamingStrategy, InstanceNamingStrategy, ShapeNamingStrategy, TextStrategy,
};
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy, StrategyConfig};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tidy_scene::SceneNode;

/// Result of naming one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOutcome {
    /// Final, formatted name
    pub name: String,
    /// Strategy that produced it
    pub strategy: &'static str,
    /// The selected strategy failed and the fallback was used
    pub fell_back: bool,
}

/// Ordered set of naming strategies
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn NamingStrategy>>,
    fallback: FallbackStrategy,
    formatter: NameFormatter,
}

impl StrategyRegistry {
    /// Create registry with only the fallback
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            fallback: FallbackStrategy::new(),
            formatter: NameFormatter::new(),
        }
    }

    /// Create registry with the built-in strategies
    #[must_use]
    pub fn with_defaults(config: &StrategyConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(InstanceNamingStrategy::new(config)));
        registry.register(Arc::new(FrameNamingStrategy::new()));
        registry.register(Arc::new(ShapeNamingStrategy::new()));
        registry.register(Arc::new(BooleanOperationStrategy::new()));
        registry.register(Arc::new(TextStrategy::new()));
        registry.register(Arc::new(ComponentStrategy::new()));
        registry.register(Arc::new(BasicShapeStrategy::new()));
        registry
    }

    /// Append a strategy (lowest priority so far)
    pub fn register(&mut self, strategy: Arc<dyn NamingStrategy>) {
        self.strategies.push(strategy);
    }

    /// First registered strategy that handles `node`
    #[must_use]
    pub fn resolve(&self, node: &SceneNode) -> Option<&Arc<dyn NamingStrategy>> {
        self.strategies.iter().find(|s| s.can_handle(node))
    }

    /// Strategy names in priority order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Check if a strategy is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|s| s.name() == name)
    }

    /// Number of registered strategies (fallback excluded)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if no strategy is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Let every strategy drop per-run state before a new run
    pub fn begin_run(&self) {
        for strategy in &self.strategies {
            strategy.begin_run();
        }
    }

    /// Name `ctx.node` and render it with `options`
    pub async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        options: &NamingOptions,
    ) -> NameOutcome {
        let node = ctx.node;
        let Some(strategy) = self.resolve(node) else {
            return self.fallback_outcome(node, options, false);
        };

        let attempt = AssertUnwindSafe(strategy.generate_name(ctx, options))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(NamingError::Panicked(panic_message(&*payload))));

        match attempt {
            Ok(name) => NameOutcome {
                name: self.formatter.format(&name, &node.category, options),
                strategy: strategy.name(),
                fell_back: false,
            },
            Err(error) => {
                tracing::warn!(
                    node = %node.id,
                    category = %node.category,
                    strategy = strategy.name(),
                    %error,
                    "naming strategy failed, using fallback"
                );
                self.fallback_outcome(node, options, true)
            }
        }
    }

    fn fallback_outcome(
        &self,
        node: &SceneNode,
        options: &NamingOptions,
        fell_back: bool,
    ) -> NameOutcome {
        let name = self.fallback.base_name(node);
        NameOutcome {
            name: self.formatter.format(&name, &node.category, options),
            strategy: self.fallback.name(),
            fell_back,
        }
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults(&StrategyConfig::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
