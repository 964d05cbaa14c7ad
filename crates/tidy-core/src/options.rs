//! User options for one rename run

use crate::i18n::{Language, OptionKey};
use serde::{Deserialize, Serialize};
use tidy_naming::NamingOptions;
use tidy_scene::SceneNode;

/// The persisted option blob
///
/// The first three fields widen which layers are touched; the next three
/// change how names are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllOptions {
    /// Rename locked layers
    pub locked: bool,
    /// Rename hidden layers
    pub hidden: bool,
    /// Rename instances and their contents
    pub instance: bool,
    /// Replace custom names too
    pub rename_custom_names: bool,
    /// Append auto-layout spacing to frame names
    pub show_spacing: bool,
    /// PascalCase instead of kebab-case
    pub use_pascal_case: bool,
    /// Notification language
    pub language: Language,
}

impl AllOptions {
    /// All switches off, English
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With locked layers
    #[inline]
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// With hidden layers
    #[inline]
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// With instances
    #[inline]
    #[must_use]
    pub fn with_instance(mut self, instance: bool) -> Self {
        self.instance = instance;
        self
    }

    /// With custom names replaced
    #[inline]
    #[must_use]
    pub fn with_rename_custom_names(mut self, rename: bool) -> Self {
        self.rename_custom_names = rename;
        self
    }

    /// With spacing suffixes
    #[inline]
    #[must_use]
    pub fn with_show_spacing(mut self, show: bool) -> Self {
        self.show_spacing = show;
        self
    }

    /// With PascalCase
    #[inline]
    #[must_use]
    pub fn with_pascal_case(mut self, pascal: bool) -> Self {
        self.use_pascal_case = pascal;
        self
    }

    /// With notification language
    #[inline]
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The subset the naming strategies and formatter read
    #[inline]
    #[must_use]
    pub fn naming_options(&self) -> NamingOptions {
        NamingOptions {
            show_spacing: self.show_spacing,
            use_pascal_case: self.use_pascal_case,
        }
    }

    /// Current value of one toggle
    #[must_use]
    pub fn is_enabled(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::Locked => self.locked,
            OptionKey::Hidden => self.hidden,
            OptionKey::Instance => self.instance,
            OptionKey::RenameCustomNames => self.rename_custom_names,
            OptionKey::ShowSpacing => self.show_spacing,
            OptionKey::UsePascalCase => self.use_pascal_case,
        }
    }

    /// Whether `node` (and so its subtree) passes the traversal gate
    #[must_use]
    pub fn admits(&self, node: &SceneNode) -> bool {
        if node.locked && !self.locked {
            return false;
        }
        if !node.visible && !self.hidden {
            return false;
        }
        !(node.is_instance() && !self.instance)
    }

    /// Host flag: hide invisible instance children from the walk
    #[inline]
    #[must_use]
    pub fn skip_invisible_instance_children(&self) -> bool {
        !self.hidden && !self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_scene::NodeCategory;

    #[test]
    fn persisted_blob_is_camel_case() {
        let options = AllOptions::new()
            .with_rename_custom_names(true)
            .with_pascal_case(true);
        let json = serde_json::to_value(options).unwrap();

        assert_eq!(json["renameCustomNames"], true);
        assert_eq!(json["usePascalCase"], true);
        assert_eq!(json["showSpacing"], false);
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn toggles_by_key() {
        let options = AllOptions::new().with_hidden(true).with_pascal_case(true);
        let enabled: Vec<OptionKey> = OptionKey::RENAME_TARGETS
            .into_iter()
            .chain(OptionKey::SETTINGS)
            .filter(|key| options.is_enabled(*key))
            .collect();
        assert_eq!(enabled, [OptionKey::Hidden, OptionKey::UsePascalCase]);
    }

    #[test]
    fn missing_fields_default() {
        let options: AllOptions = serde_json::from_str(r#"{ "locked": true }"#).unwrap();
        assert_eq!(options, AllOptions::new().with_locked(true));
    }

    #[test]
    fn gate() {
        let defaults = AllOptions::new();
        let mut locked = SceneNode::new("1", NodeCategory::Frame, "Frame 1");
        locked.locked = true;
        let mut hidden = SceneNode::new("2", NodeCategory::Frame, "Frame 2");
        hidden.visible = false;
        let instance = SceneNode::new("3", NodeCategory::Instance, "Instance");
        let plain = SceneNode::new("4", NodeCategory::Frame, "Frame 4");

        assert!(!defaults.admits(&locked));
        assert!(!defaults.admits(&hidden));
        assert!(!defaults.admits(&instance));
        assert!(defaults.admits(&plain));

        let all = defaults.with_locked(true).with_hidden(true).with_instance(true);
        assert!(all.admits(&locked) && all.admits(&hidden) && all.admits(&instance));
    }

    #[test]
    fn skip_flag() {
        assert!(AllOptions::new().skip_invisible_instance_children());
        assert!(!AllOptions::new().with_hidden(true).skip_invisible_instance_children());
        assert!(!AllOptions::new().with_instance(true).skip_invisible_instance_children());
    }
}
