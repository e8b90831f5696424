//! Resource file parsers.
//!
//! - `resource`: Android `<resources>` XML parser (roxmltree)

pub mod resource;
