//! Key canonicalization for the base locale.
//!
//! Walks the base locale's entries once, giving every translatable unit a
//! canonical key and a fixed output row. The resulting [`KeyIndex`] is the
//! frame every other locale is merged into and is read-only afterwards.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use serde::Serialize;

use crate::core::{
    ExportError,
    data::{CanonicalKey, ResourceEntry, is_string_reference},
};

/// Row of the first base entry. Row 0 is the header.
pub const FIRST_ROW: usize = 1;

/// Why a key does not need a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Untranslatable {
    /// `translatable="false"` on a simple string. The key is base-only and no
    /// locale is expected to define it.
    Explicit,
    /// A plural or array item whose base text is a `@string/` reference.
    /// Locales may omit it; the absence is recorded but not reported.
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub row: usize,
    pub untranslatable: Option<Untranslatable>,
}

/// Canonical key to output row, in base-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    slots: HashMap<CanonicalKey, KeySlot>,
    order: Vec<CanonicalKey>,
    /// Element names left out of the run; locales skip them too.
    ignored: HashSet<String>,
}

impl KeyIndex {
    pub fn get(&self, key: &str) -> Option<&KeySlot> {
        self.slots.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in base-file order.
    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.order.iter()
    }

    /// Keys paired with their slot, in base-file order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &KeySlot)> {
        self.order.iter().map(|key| (key, &self.slots[key]))
    }

    /// Keys every locale is expected to define: everything except base-only
    /// (`translatable="false"`) strings.
    pub fn expected_keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.iter()
            .filter(|(_, slot)| slot.untranslatable != Some(Untranslatable::Explicit))
            .map(|(key, _)| key)
    }

    /// Whether an element name is on the ignored list.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    pub fn is_untranslatable(&self, key: &str) -> bool {
        self.get(key).is_some_and(|s| s.untranslatable.is_some())
    }

    fn insert(&mut self, key: CanonicalKey, slot: KeySlot) -> bool {
        if self.slots.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.slots.insert(key, slot);
        true
    }
}

/// A row of the base locale, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseRow {
    Comment {
        text: String,
        is_section_header: bool,
    },
    /// Informational row heading the items of a plural set.
    PluralGroup { name: String },
    Key {
        key: CanonicalKey,
        text: String,
        /// Base text is a `@string/` reference (presentation only).
        is_reference: bool,
        untranslatable: Option<Untranslatable>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalized {
    pub index: KeyIndex,
    /// `rows[i]` sits at output row `FIRST_ROW + i`.
    pub rows: Vec<BaseRow>,
}

/// Single-pass builder owning the row counter for one base file.
pub struct Canonicalizer<'a> {
    path: &'a Path,
    ignored: &'a HashSet<String>,
    index: KeyIndex,
    rows: Vec<BaseRow>,
}

impl<'a> Canonicalizer<'a> {
    pub fn new(path: &'a Path, ignored: &'a HashSet<String>) -> Self {
        Self {
            path,
            ignored,
            index: KeyIndex::default(),
            rows: Vec::new(),
        }
    }

    fn next_row(&self) -> usize {
        FIRST_ROW + self.rows.len()
    }

    pub fn push(&mut self, entry: &ResourceEntry) -> Result<(), ExportError> {
        if entry.name().is_some_and(|name| self.ignored.contains(name)) {
            return Ok(());
        }

        match entry {
            ResourceEntry::Comment {
                text,
                is_section_header,
            } => {
                self.rows.push(BaseRow::Comment {
                    text: text.clone(),
                    is_section_header: *is_section_header,
                });
            }
            ResourceEntry::SimpleString {
                name,
                text,
                translatable,
            } => {
                let untranslatable = (!translatable).then_some(Untranslatable::Explicit);
                self.register(CanonicalKey::simple(name), text, untranslatable)?;
            }
            ResourceEntry::PluralSet { name, .. } => {
                self.rows
                    .push(BaseRow::PluralGroup { name: name.clone() });
                self.register_items(entry)?;
            }
            ResourceEntry::StringArray { .. } => {
                self.register_items(entry)?;
            }
        }
        Ok(())
    }

    fn register_items(&mut self, entry: &ResourceEntry) -> Result<(), ExportError> {
        for unit in entry.units() {
            let untranslatable =
                is_string_reference(unit.text).then_some(Untranslatable::Reference);
            self.register(unit.key, unit.text, untranslatable)?;
        }
        Ok(())
    }

    fn register(
        &mut self,
        key: CanonicalKey,
        text: &str,
        untranslatable: Option<Untranslatable>,
    ) -> Result<(), ExportError> {
        let slot = KeySlot {
            row: self.next_row(),
            untranslatable,
        };
        if !self.index.insert(key.clone(), slot) {
            return Err(ExportError::DuplicateKey {
                path: self.path.to_path_buf(),
                key: key.into(),
            });
        }
        self.rows.push(BaseRow::Key {
            key,
            text: text.to_string(),
            is_reference: is_string_reference(text),
            untranslatable,
        });
        Ok(())
    }

    pub fn finish(self) -> Canonicalized {
        let mut index = self.index;
        index.ignored = self.ignored.clone();
        Canonicalized {
            index,
            rows: self.rows,
        }
    }
}

/// Canonicalize a complete base entry sequence.
pub fn canonicalize(
    entries: &[ResourceEntry],
    ignored: &HashSet<String>,
    path: &Path,
) -> Result<Canonicalized, ExportError> {
    let mut canonicalizer = Canonicalizer::new(path, ignored);
    for entry in entries {
        canonicalizer.push(entry)?;
    }
    Ok(canonicalizer.finish())
}
