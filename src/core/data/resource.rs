//! Parsed resource entries.
//!
//! A resource file is reduced once, during parsing, to a flat sequence of
//! [`ResourceEntry`] values. Everything downstream switches on the variant and
//! never looks at the markup again.

use super::key::CanonicalKey;

/// Prefix marking a comment as a section header (`<!-- $Settings -->`).
pub const SECTION_SENTINEL: char = '$';

/// Prefix of a text that forwards to another string resource.
pub const STRING_REFERENCE_PREFIX: &str = "@string/";

/// Returns true when the text is a forwarding reference like `@string/ok`.
pub fn is_string_reference(text: &str) -> bool {
    text.starts_with(STRING_REFERENCE_PREFIX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralItem {
    /// Category label (`zero`, `one`, `few`, `many`, `other`, ...).
    pub quantity: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEntry {
    Comment {
        /// Comment text with the section sentinel stripped.
        text: String,
        is_section_header: bool,
    },
    SimpleString {
        name: String,
        text: String,
        /// False only when the element says `translatable="false"`.
        translatable: bool,
    },
    PluralSet {
        name: String,
        items: Vec<PluralItem>,
    },
    StringArray {
        name: String,
        items: Vec<String>,
    },
}

/// One translatable unit of an entry, keyed canonically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit<'a> {
    pub key: CanonicalKey,
    pub text: &'a str,
}

impl ResourceEntry {
    pub fn comment(raw: &str) -> Self {
        match raw.strip_prefix(SECTION_SENTINEL) {
            Some(rest) => Self::Comment {
                text: rest.to_string(),
                is_section_header: true,
            },
            None => Self::Comment {
                text: raw.to_string(),
                is_section_header: false,
            },
        }
    }

    /// Element name, `None` for comments.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Comment { .. } => None,
            Self::SimpleString { name, .. }
            | Self::PluralSet { name, .. }
            | Self::StringArray { name, .. } => Some(name.as_str()),
        }
    }

    /// Expand the entry into its translatable units, in source order.
    ///
    /// Comments have none; a simple string has exactly one; plural sets and
    /// string arrays have one per item.
    pub fn units(&self) -> Vec<TranslationUnit<'_>> {
        match self {
            Self::Comment { .. } => Vec::new(),
            Self::SimpleString { name, text, .. } => vec![TranslationUnit {
                key: CanonicalKey::simple(name),
                text,
            }],
            Self::PluralSet { name, items } => items
                .iter()
                .map(|item| TranslationUnit {
                    key: CanonicalKey::plural(name, &item.quantity),
                    text: &item.text,
                })
                .collect(),
            Self::StringArray { name, items } => items
                .iter()
                .enumerate()
                .map(|(index, text)| TranslationUnit {
                    key: CanonicalKey::array_item(name, index),
                    text,
                })
                .collect(),
        }
    }
}
