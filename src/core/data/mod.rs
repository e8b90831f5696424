//! Data types shared by the pipeline phases.
//!
//! - `key`: CanonicalKey, the flat identifier of one translatable unit
//! - `resource`: ResourceEntry, one parsed element of a resource file

pub mod key;
pub mod resource;

pub use key::{CanonicalKey, PLURAL_SEPARATOR};
pub use resource::{
    PluralItem, ResourceEntry, SECTION_SENTINEL, STRING_REFERENCE_PREFIX, TranslationUnit,
    is_string_reference,
};
