//! Naming vocabulary
//!
//! The label tables the classifier matches against. They are plain data
//! handed to [`NameClassifier::new`](crate::NameClassifier::new), so tests
//! can run the classifier over synthetic category sets.

use tidy_scene::{BooleanOperation, NodeCategory};

/// Base names the engine itself writes
pub const GENERATED_BASE_NAMES: [&str; 11] = [
    "group",
    "frame",
    "grid",
    "row",
    "col",
    "video",
    "image",
    "boolean-union",
    "boolean-subtract",
    "boolean-intersect",
    "boolean-exclude",
];

/// Label tables for name classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingVocabulary {
    categories: Vec<NodeCategory>,
    boolean_labels: Vec<String>,
    generated_bases: Vec<String>,
}

impl NamingVocabulary {
    /// Vocabulary with no entries
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            boolean_labels: Vec::new(),
            generated_bases: Vec::new(),
        }
    }

    /// Replace the categories the classifier reasons about
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = NodeCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Replace the host's boolean-operation labels
    #[must_use]
    pub fn with_boolean_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.boolean_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the engine's own base names
    #[must_use]
    pub fn with_generated_bases<S: Into<String>>(
        mut self,
        bases: impl IntoIterator<Item = S>,
    ) -> Self {
        self.generated_bases = bases.into_iter().map(Into::into).collect();
        self
    }

    /// Known categories
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[NodeCategory] {
        &self.categories
    }

    /// Whether `category` is covered
    #[inline]
    #[must_use]
    pub fn knows(&self, category: &NodeCategory) -> bool {
        self.categories.contains(category)
    }

    /// Host boolean-operation labels (`"Union"`, ...)
    #[inline]
    #[must_use]
    pub fn boolean_labels(&self) -> &[String] {
        &self.boolean_labels
    }

    /// Engine base names (`"row"`, `"boolean-union"`, ...)
    #[inline]
    #[must_use]
    pub fn generated_bases(&self) -> &[String] {
        &self.generated_bases
    }
}

impl Default for NamingVocabulary {
    fn default() -> Self {
        Self::empty()
            .with_categories(NodeCategory::KNOWN)
            .with_boolean_labels(BooleanOperation::ALL.map(BooleanOperation::host_label))
            .with_generated_bases(GENERATED_BASE_NAMES)
    }
}
