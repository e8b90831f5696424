//! Locale merging.
//!
//! Folds one locale's entries into the fixed [`KeyIndex`] built from the base
//! locale and works out which canonical keys the locale is missing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::Path,
};

use tracing::debug;

use crate::core::{
    ExportError,
    canonicalize::{KeyIndex, Untranslatable},
    data::{CanonicalKey, ResourceEntry},
};

/// Merge outcome for one non-base locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleResult {
    pub locale: String,
    /// Translated text for every canonical key the locale defines.
    pub translations: HashMap<CanonicalKey, String>,
    /// Absent keys that need a translator's attention.
    pub missing_reportable: BTreeSet<CanonicalKey>,
    /// Absent keys whose base text is a string reference; expected, not reported.
    pub missing_suppressed: BTreeSet<CanonicalKey>,
    /// Keys the locale defines but the base does not, in locale order.
    pub extra_keys: Vec<CanonicalKey>,
}

impl LocaleResult {
    pub fn translated_count(&self) -> usize {
        self.translations.len()
    }

    pub fn is_clean(&self) -> bool {
        self.missing_reportable.is_empty()
    }
}

/// Merge one locale's entries against the base index.
///
/// Simple strings marked `translatable="false"` in the locale are skipped, as
/// are entries whose name is on the index's ignored list.
/// Keys unknown to the base are collected as extras, not treated as errors.
/// A key defined twice in the same locale file is a
/// [`ExportError::DuplicateKey`].
pub fn merge_locale(
    index: &KeyIndex,
    locale: &str,
    entries: &[ResourceEntry],
    path: &Path,
) -> Result<LocaleResult, ExportError> {
    let mut remaining: HashSet<&CanonicalKey> = index.expected_keys().collect();
    let mut result = LocaleResult {
        locale: locale.to_string(),
        ..LocaleResult::default()
    };

    for entry in entries {
        if let ResourceEntry::SimpleString {
            translatable: false,
            ..
        } = entry
        {
            continue;
        }
        if entry.name().is_some_and(|name| index.is_ignored(name)) {
            continue;
        }

        for unit in entry.units() {
            if !index.contains(unit.key.as_str()) {
                debug!(locale, key = %unit.key, "key not in base, ignored for this locale");
                result.extra_keys.push(unit.key);
                continue;
            }

            remaining.remove(&unit.key);
            if result
                .translations
                .insert(unit.key.clone(), unit.text.to_string())
                .is_some()
            {
                return Err(ExportError::DuplicateKey {
                    path: path.to_path_buf(),
                    key: unit.key.into(),
                });
            }
        }
    }

    for key in remaining {
        let suppressed = index
            .get(key.as_str())
            .is_some_and(|slot| slot.untranslatable == Some(Untranslatable::Reference));
        if suppressed {
            result.missing_suppressed.insert(key.clone());
        } else {
            result.missing_reportable.insert(key.clone());
        }
    }

    Ok(result)
}
