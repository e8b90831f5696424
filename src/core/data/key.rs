//! Canonical keys for translatable units.

use std::{borrow::Borrow, fmt};

use serde::Serialize;

/// Separator between a plural set name and its quantity (`apples#one`).
pub const PLURAL_SEPARATOR: char = '#';

/// Globally unique identifier for one translatable unit.
///
/// Derived from the structural position of the unit:
///
/// - simple string: its name (`app_name`)
/// - plural item: name + `#` + quantity (`apples#other`)
/// - array item: name + `[index]` (`colors[2]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn simple(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn plural(name: &str, quantity: &str) -> Self {
        Self(format!("{}{}{}", name, PLURAL_SEPARATOR, quantity))
    }

    pub fn array_item(name: &str, index: usize) -> Self {
        Self(format!("{}[{}]", name, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalKey> for String {
    fn from(key: CanonicalKey) -> Self {
        key.0
    }
}
