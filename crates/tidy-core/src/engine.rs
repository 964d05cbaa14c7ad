//! Rename engine
//!
//! Walks the selection depth-first over an explicit worklist. Top-level
//! nodes are processed in batches with a cooperative yield between them, so
//! large selections never monopolize the runtime. Each visited node is named
//! at most once and written back only when the name actually changes.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::options::AllOptions;
use crate::report::RenameReport;
use tidy_naming::{NameClassifier, NamingContext, NamingVocabulary, StrategyRegistry};
use tidy_scene::{NodeId, SceneNode, SceneStore};

/// What to do with one node
#[derive(Debug, Clone, PartialEq, Eq)]
enum Decision {
    KeepCustom,
    Unchanged,
    Rename { name: String, fell_back: bool },
}

/// Classifier, strategies and traversal settings
#[derive(Debug)]
pub struct RenameEngine {
    config: EngineConfig,
    classifier: NameClassifier,
    registry: StrategyRegistry,
}

impl RenameEngine {
    /// Create engine with the standard vocabulary and built-in strategies
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when `config` fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: NameClassifier::standard()?,
            registry: StrategyRegistry::with_defaults(&config.strategy_config()),
        })
    }

    /// Replace the classifier's vocabulary
    ///
    /// # Errors
    /// Returns [`EngineError::Naming`] if the vocabulary does not compile.
    pub fn with_vocabulary(mut self, vocabulary: NamingVocabulary) -> Result<Self, EngineError> {
        self.classifier = NameClassifier::new(vocabulary)?;
        Ok(self)
    }

    /// Replace the strategy registry
    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name classifier
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &NameClassifier {
        &self.classifier
    }

    /// Strategy registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Rename the scene's current selection
    ///
    /// Returns whether any node was renamed.
    pub async fn rename_selection<S: SceneStore>(
        &self,
        scene: &mut S,
        options: &AllOptions,
    ) -> bool {
        let roots = scene.selection();
        self.run(scene, &roots, options).await.renamed()
    }

    /// Rename `roots` and their descendants
    ///
    /// Never fails: strategy errors fall back to the category label and
    /// rejected writes are logged and counted.
    pub async fn run<S: SceneStore>(
        &self,
        scene: &mut S,
        roots: &[NodeId],
        options: &AllOptions,
    ) -> RenameReport {
        let mut report = RenameReport::default();
        self.registry.begin_run();

        for (index, batch) in roots.chunks(self.config.batch_size).enumerate() {
            if index > 0 {
                tokio::task::yield_now().await;
            }
            report.batches += 1;

            for root in batch {
                self.walk(scene, root, options, &mut report).await;
            }
        }

        tracing::info!(
            roots = roots.len(),
            visited = report.visited,
            written = report.written,
            skipped = report.skipped,
            kept_custom = report.kept_custom,
            fallbacks = report.fallbacks,
            write_failures = report.write_failures,
            batches = report.batches,
            "rename run finished"
        );
        report
    }

    async fn walk<S: SceneStore>(
        &self,
        scene: &mut S,
        root: &NodeId,
        options: &AllOptions,
        report: &mut RenameReport,
    ) {
        let mut stack = vec![root.clone()];

        while let Some(id) = stack.pop() {
            let Some(node) = scene.node(&id) else {
                tracing::debug!(node = %id, "node vanished before it was visited");
                continue;
            };

            if !options.admits(node) {
                report.skipped += 1;
                continue;
            }
            report.visited += 1;

            let decision = self.decide(&*scene, node, options).await;
            let children = scene.children(&id);

            match decision {
                Decision::KeepCustom => report.kept_custom += 1,
                Decision::Unchanged => report.unchanged += 1,
                Decision::Rename { name, fell_back } => {
                    if fell_back {
                        report.fallbacks += 1;
                    }
                    match scene.set_name(&id, name) {
                        Ok(()) => report.written += 1,
                        Err(error) => {
                            tracing::warn!(node = %id, %error, "failed to write layer name");
                            report.write_failures += 1;
                        }
                    }
                }
            }

            stack.extend(children.into_iter().rev());
        }
    }

    async fn decide<S: SceneStore>(
        &self,
        scene: &S,
        node: &SceneNode,
        options: &AllOptions,
    ) -> Decision {
        if !options.rename_custom_names && !self.classifier.is_eligible_for_rename(node) {
            tracing::debug!(node = %node.id, name = %node.name, "keeping custom name");
            return Decision::KeepCustom;
        }

        let ctx = NamingContext::new(scene, node);
        let outcome = self
            .registry
            .generate_name(&ctx, &options.naming_options())
            .await;

        if outcome.name == node.name {
            return Decision::Unchanged;
        }

        tracing::debug!(
            node = %node.id,
            from = %node.name,
            to = %outcome.name,
            strategy = outcome.strategy,
            "renaming layer"
        );
        Decision::Rename {
            name: outcome.name,
            fell_back: outcome.fell_back,
        }
    }
}
