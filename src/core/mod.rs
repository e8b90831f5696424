//! Export pipeline.
//!
//! ## Module Structure
//!
//! - `locate`: resource directory and locale discovery
//! - `parsers`: resource XML parsing into ordered entries
//! - `data`: canonical keys and resource entry types
//! - `canonicalize`: base locale KeyIndex and row layout
//! - `merge`: per-locale merge against the KeyIndex
//! - `context`: ExportContext, which drives one run end to end

pub mod canonicalize;
pub mod context;
pub mod data;
mod error;
pub mod locate;
pub mod merge;
pub mod parsers;

pub use context::{ExportContext, FileExport, LocaleOutcome};
pub use error::ExportError;
