//! Localized user-facing text
//!
//! English and Chinese tables for notifications and option titles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Language code
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Message table for this language
    #[inline]
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        Messages::for_language(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown language code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(UnknownLanguage(code.to_string())),
        }
    }
}

/// User-toggleable option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Rename locked layers
    Locked,
    /// Rename hidden layers
    Hidden,
    /// Rename instances and their contents
    Instance,
    /// Also replace custom names
    RenameCustomNames,
    /// Append auto-layout spacing
    ShowSpacing,
    /// PascalCase instead of kebab-case
    UsePascalCase,
}

impl OptionKey {
    /// Options that widen which layers are renamed, in display order
    pub const RENAME_TARGETS: [Self; 3] = [Self::Locked, Self::Hidden, Self::Instance];

    /// Options that change how names are produced, in display order
    pub const SETTINGS: [Self; 3] = [
        Self::RenameCustomNames,
        Self::ShowSpacing,
        Self::UsePascalCase,
    ];

    /// Emoji shown next to the option
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Locked => "🔒",
            Self::Hidden => "👻",
            Self::Instance => "🔄",
            Self::RenameCustomNames => "🛁",
            Self::ShowSpacing => "📏",
            Self::UsePascalCase => "🐫",
        }
    }
}

/// Title and optional description of one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionText {
    /// Short title
    pub title: &'static str,
    /// Longer explanation, if any
    pub description: Option<&'static str>,
}

impl OptionText {
    const fn titled(title: &'static str) -> Self {
        Self {
            title,
            description: None,
        }
    }
}

/// Message table for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Notification after a run that renamed something
    pub rename_complete: &'static str,
    /// Notification after a run that renamed nothing
    pub nothing_to_rename: &'static str,
    /// Rename button label
    pub rename_button: &'static str,
    /// Prompt shown while the selection is empty
    pub select_layer_first: &'static str,
    /// Settings panel title
    pub settings_title: &'static str,
    /// Language picker label
    pub language_label: &'static str,
    /// Heading above the rename-target options
    pub rename_targets_label: &'static str,
    options: [OptionText; 6],
}

static EN: Messages = Messages {
    rename_complete: "🎉 Rename complete!",
    nothing_to_rename: "😶‍🌫️ No layers need renaming",
    rename_button: "Rename Layers",
    select_layer_first: "Select layers first",
    settings_title: "🛠️ Settings",
    language_label: "🌐 Language",
    rename_targets_label: "Also rename the following layers:",
    options: [
        OptionText::titled("Locked"),
        OptionText::titled("Hidden"),
        OptionText::titled("Instance"),
        OptionText {
            title: "Custom Names",
            description: Some(
                "Enable this option to rename layers with custom names. Disable this option to only rename host and plugin-generated layer names",
            ),
        },
        OptionText::titled("Show Spacing"),
        OptionText::titled("Use PascalCase"),
    ],
};

static ZH: Messages = Messages {
    rename_complete: "🎉 重命名完成！",
    nothing_to_rename: "😶‍🌫️ 没有图层需要重命名",
    rename_button: "重命名图层",
    select_layer_first: "请先选择图层",
    settings_title: "🛠️ 设置",
    language_label: "🌐 语言",
    rename_targets_label: "除了基础图层以外，对以下图层也进行重命名 :",
    options: [
        OptionText::titled("锁定图层"),
        OptionText::titled("隐藏图层"),
        OptionText::titled("组件实例"),
        OptionText {
            title: "大扫除模式",
            description: Some(
                "启用此选项将重命名用户自定义的图层名称。禁用时，仅重命名宿主和插件自动生成的图层名称",
            ),
        },
        OptionText::titled("显示间距"),
        OptionText::titled("使用大驼峰命名"),
    ],
};

impl Messages {
    /// Table for `language`
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// Notification text for a finished run
    #[inline]
    #[must_use]
    pub fn rename_outcome(&self, renamed: bool) -> &'static str {
        if renamed {
            self.rename_complete
        } else {
            self.nothing_to_rename
        }
    }

    /// Title and description of `key`
    #[must_use]
    pub fn option(&self, key: OptionKey) -> OptionText {
        let index = match key {
            OptionKey::Locked => 0,
            OptionKey::Hidden => 1,
            OptionKey::Instance => 2,
            OptionKey::RenameCustomNames => 3,
            OptionKey::ShowSpacing => 4,
            OptionKey::UsePascalCase => 5,
        };
        self.options[index]
    }
}
