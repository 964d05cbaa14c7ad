//! Name formatting
//!
//! Turns a [`SemanticName`] into the string written to the layer, applying
//! the selected case convention to the leading token while leaving a
//! trailing bracketed suffix (`-[8, 12]`) untouched.

use crate::strategy::NamingOptions;
use std::fmt;
use tidy_scene::NodeCategory;

/// Pre-formatting name produced by a strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticName {
    /// Base name, possibly with a bracketed suffix (`row-[8]`)
    pub text: String,
    /// Skip case conversion
    pub preserve_case: bool,
}

impl SemanticName {
    /// Structural label subject to case conversion
    #[inline]
    #[must_use]
    pub fn structural(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preserve_case: false,
        }
    }

    /// Name written exactly as given
    #[inline]
    #[must_use]
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preserve_case: true,
        }
    }
}

impl fmt::Display for SemanticName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Separator that introduces a bracketed suffix
pub const SUFFIX_SEPARATOR: &str = "-[";

/// Split `text` into its leading token and a trailing bracketed suffix
///
/// The suffix starts at the first `-[` and must run to a closing `]` at the
/// end of the string; otherwise the whole text is the leading token.
#[must_use]
pub fn split_suffix(text: &str) -> (&str, &str) {
    match text.find(SUFFIX_SEPARATOR) {
        Some(at) if text.ends_with(']') => text.split_at(at),
        _ => (text, ""),
    }
}

/// Case-convention renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFormatter;

impl NameFormatter {
    /// Create formatter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the final layer name
    ///
    /// Components and component sets are proper nouns and keep their case,
    /// as do names flagged `preserve_case`.
    #[must_use]
    pub fn format(
        &self,
        name: &SemanticName,
        category: &NodeCategory,
        options: &NamingOptions,
    ) -> String {
        if name.preserve_case || category.is_component_like() {
            return name.text.clone();
        }

        let (head, suffix) = split_suffix(&name.text);
        let head = head.to_lowercase();
        let head = if options.use_pascal_case {
            to_pascal_case(&head)
        } else {
            to_kebab_case(&head)
        };

        format!("{head}{suffix}")
    }
}

fn is_word_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// `"primary button"` → `"PrimaryButton"`
///
/// Segments that are already fully upper-case (`"URL"`) are kept as
/// acronyms.
#[must_use]
pub fn to_pascal_case(text: &str) -> String {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .map(|word| {
            if word.chars().any(char::is_alphabetic) && word == word.to_uppercase() {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// `"primaryButton"` → `"primary-button"`
#[must_use]
pub fn to_kebab_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_gap = false;

    for c in text.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_gap {
                out.push('-');
                in_gap = true;
            }
            prev = Some(c);
            continue;
        }
        in_gap = false;

        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// `"primary button"` → `"primaryButton"`
#[must_use]
pub fn to_camel_case(text: &str) -> String {
    let pascal = to_pascal_case(text);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
