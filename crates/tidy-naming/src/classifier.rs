//! Generated-name classifier
//!
//! Decides whether a layer's current name looks machine-generated (by the
//! host or by this engine) and may therefore be overwritten, or whether it
//! is a deliberate custom name that must be kept.

use crate::formatter::{to_kebab_case, to_pascal_case};
use crate::strategy::NamingError;
use crate::vocabulary::NamingVocabulary;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tidy_scene::{NodeCategory, SceneNode};

/// Bracketed spacing tuple the frame strategy appends (`-[8]`, `-[8, 12.5]`)
///
/// Auto-layout spacing may be negative (`-[-8]`).
const SPACING_SUFFIX: &str = r"(?:-\[-?\d+(?:\.\d+)?(?:,\s*-?\d+(?:\.\d+)?)?\])?";

/// Classifier built from a [`NamingVocabulary`]
#[derive(Debug, Clone)]
pub struct NameClassifier {
    vocabulary: NamingVocabulary,
    category_patterns: HashMap<NodeCategory, Regex>,
    generated_pattern: Option<Regex>,
    indexed_pattern: Regex,
    boolean_renderings: HashSet<String>,
}

impl NameClassifier {
    /// Compile the classifier's patterns
    ///
    /// # Errors
    /// Returns [`NamingError::InvalidVocabulary`] if a pattern fails to
    /// compile (only possible for pathological vocabularies).
    pub fn new(vocabulary: NamingVocabulary) -> Result<Self, NamingError> {
        let mut category_patterns = HashMap::with_capacity(vocabulary.categories().len());
        for category in vocabulary.categories() {
            // Tag label, host default (`Washi tape`) and the engine's kebab
            // and Pascal renderings (`washi-tape`, `WashiTape`)
            let label = category.label();
            let mut renderings = vec![
                label.replace('_', " "),
                to_kebab_case(&label),
                to_pascal_case(&label),
                label,
            ];
            renderings.sort();
            renderings.dedup();
            let alternatives: Vec<String> = renderings
                .iter()
                .map(String::as_str)
                .map(regex::escape)
                .collect();
            let pattern = format!(r"(?i)^(?:{})(?:\s\d+)?$", alternatives.join("|"));
            category_patterns.insert(category.clone(), Regex::new(&pattern)?);
        }

        let alternatives: Vec<String> = vocabulary
            .generated_bases()
            .iter()
            .flat_map(|base| [base.clone(), to_pascal_case(base)])
            .map(|rendering| regex::escape(&rendering))
            .collect();
        let generated_pattern = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                "^(?:{}){SPACING_SUFFIX}$",
                alternatives.join("|")
            ))?)
        };

        let boolean_renderings = vocabulary
            .boolean_labels()
            .iter()
            .map(|label| format!("boolean-{}", label.to_lowercase()))
            .flat_map(|base| {
                let pascal = to_pascal_case(&base);
                [base, pascal]
            })
            .collect();

        Ok(Self {
            vocabulary,
            category_patterns,
            generated_pattern,
            indexed_pattern: Regex::new(r"^\S+ \d+$")?,
            boolean_renderings,
        })
    }

    /// Classifier over the standard vocabulary
    ///
    /// # Errors
    /// See [`NameClassifier::new`].
    pub fn standard() -> Result<Self, NamingError> {
        Self::new(NamingVocabulary::default())
    }

    /// Vocabulary this classifier was built from
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &NamingVocabulary {
        &self.vocabulary
    }

    /// Whether the node's current name may be replaced
    ///
    /// # Rules
    /// 1. Text: `auto_rename` set, or the name is `text` (any case)
    /// 2. Boolean: starts with a host operation label, or is one of the
    ///    engine's own boolean renderings
    /// 3. Component / component set: only `<token> <int>`
    /// 4. Anything else: category label (any case, optional ` <int>`), or
    ///    one of the engine's own base names with an optional spacing tuple
    ///
    /// Categories outside the vocabulary are never eligible.
    #[must_use]
    pub fn is_eligible_for_rename(&self, node: &SceneNode) -> bool {
        if !self.vocabulary.knows(&node.category) {
            return false;
        }

        let name = node.name.as_str();
        match node.category {
            NodeCategory::Text => node.props.auto_rename || name.eq_ignore_ascii_case("text"),
            NodeCategory::BooleanOperation => {
                self.vocabulary
                    .boolean_labels()
                    .iter()
                    .any(|label| name.starts_with(label.as_str()))
                    || self.boolean_renderings.contains(name)
            }
            NodeCategory::Component | NodeCategory::ComponentSet => {
                self.indexed_pattern.is_match(name)
            }
            _ => self.matches_category_label(node) || self.is_engine_generated(name),
        }
    }

    fn matches_category_label(&self, node: &SceneNode) -> bool {
        self.category_patterns
            .get(&node.category)
            .is_some_and(|pattern| pattern.is_match(&node.name))
    }

    /// Whether `name` is something this engine writes for structural nodes
    #[must_use]
    pub fn is_engine_generated(&self, name: &str) -> bool {
        self.generated_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tidy_scene::BooleanOperation;

    fn classifier() -> NameClassifier {
        NameClassifier::standard().unwrap()
    }

    fn node(category: NodeCategory, name: &str) -> SceneNode {
        SceneNode::new("1:1", category, name)
    }

    #[test]
    fn text_rule() {
        let c = classifier();
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Text, "Text")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Text, "text")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Text, "Headline")));

        let mut auto = node(NodeCategory::Text, "Sign in to continue");
        auto.props.auto_rename = true;
        assert!(c.is_eligible_for_rename(&auto));
    }

    #[test]
    fn boolean_rule() {
        let c = classifier();
        assert!(c.is_eligible_for_rename(&node(NodeCategory::BooleanOperation, "Union")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::BooleanOperation, "Subtract 4")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::BooleanOperation, "union")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::BooleanOperation, "Cutout")));

        assert!(c.is_eligible_for_rename(&node(
            NodeCategory::BooleanOperation,
            "boolean-union"
        )));
        assert!(c.is_eligible_for_rename(&node(
            NodeCategory::BooleanOperation,
            "BooleanExclude"
        )));
    }

    #[test]
    fn component_rule_only_accepts_indexed_names() {
        let c = classifier();
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Component, "Component 1")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::ComponentSet, "Button 12")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Component, "Component")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::ComponentSet, "ComponentSet")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Component, "Primary Button 2")));
    }

    #[test]
    fn category_label_rule() {
        let c = classifier();
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Rectangle, "Rectangle 3")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Rectangle, "rectangle")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Frame, "FRAME 10")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Instance, "Instance")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Rectangle, "Rectangle three")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Rectangle, "My Custom Button")));
    }

    #[test]
    fn engine_generated_rule() {
        let c = classifier();
        for name in ["row", "Row", "grid-[8]", "grid-[8, 12]", "Col-[4.5]", "image", "Video"] {
            assert!(
                c.is_eligible_for_rename(&node(NodeCategory::Frame, name)),
                "{name}"
            );
        }
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Rectangle, "image")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Frame, "ROW")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Frame, "row-[a]")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Frame, "rows")));
    }

    #[test]
    fn multi_word_categories_accept_engine_renderings() {
        let c = classifier();
        for (category, kebab, pascal) in [
            (NodeCategory::WashiTape, "washi-tape", "WashiTape"),
            (NodeCategory::ShapeWithText, "shape-with-text", "ShapeWithText"),
            (NodeCategory::CodeBlock, "code-block", "CodeBlock"),
            (NodeCategory::LinkUnfurl, "link-unfurl", "LinkUnfurl"),
        ] {
            assert!(c.is_eligible_for_rename(&node(category.clone(), kebab)), "{kebab}");
            assert!(c.is_eligible_for_rename(&node(category.clone(), pascal)), "{pascal}");
            assert!(!c.is_eligible_for_rename(&node(category, "Sticky note")));
        }
        for name in ["Washi tape 3", "washi_tape", "WASHI-TAPE 2"] {
            assert!(c.is_eligible_for_rename(&node(NodeCategory::WashiTape, name)), "{name}");
        }
    }

    #[test]
    fn negative_spacing_is_generated() {
        let c = classifier();
        for name in ["row-[-8]", "Grid-[-4, 12]", "grid-[8, -2.5]"] {
            assert!(c.is_engine_generated(name), "{name}");
        }
        assert!(!c.is_engine_generated("row-[--8]"));
    }

    #[test]
    fn unknown_category_never_eligible() {
        let c = classifier();
        let other = node(NodeCategory::Other("PORTAL".into()), "portal");
        assert!(!c.is_eligible_for_rename(&other));
    }

    #[test]
    fn synthetic_vocabulary_limits_reasoning() {
        let vocab = NamingVocabulary::empty()
            .with_categories([NodeCategory::Star])
            .with_generated_bases(["sparkle"]);
        let c = NameClassifier::new(vocab).unwrap();

        assert!(c.is_eligible_for_rename(&node(NodeCategory::Star, "Star 2")));
        assert!(c.is_eligible_for_rename(&node(NodeCategory::Star, "Sparkle")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Frame, "Frame 1")));
        assert!(!c.is_eligible_for_rename(&node(NodeCategory::Star, "row")));
    }

    #[test]
    fn engine_boolean_outputs_are_generated() {
        let c = classifier();
        for op in BooleanOperation::ALL {
            let kebab = format!("boolean-{}", op.label());
            assert!(c.is_engine_generated(&kebab));
            assert!(c.is_engine_generated(&to_pascal_case(&kebab)));
        }
    }

    fn any_category() -> impl Strategy<Value = NodeCategory> {
        prop_oneof![
            proptest::sample::select(NodeCategory::KNOWN.to_vec()),
            "[A-Z_]{1,12}".prop_map(NodeCategory::from),
        ]
    }

    proptest! {
        #[test]
        fn classifier_is_total(category in any_category(), name in ".{0,32}") {
            let c = classifier();
            let candidate = node(category.clone(), &name);
            let eligible = c.is_eligible_for_rename(&candidate);
            if !category.is_known() {
                prop_assert!(!eligible);
            }
        }
    }
}
