//! Langsheet - Android string resources to spreadsheet exporter
//!
//! Langsheet is a CLI tool and library that collects the `strings.xml` files of
//! every locale in an Android project into one table per resource file, keyed
//! by the default language, and reports which translations are missing.
//!
//! ## Module Structure
//!
//! - `artifact`: Sheet model and CSV writer
//! - `cli`: Command-line interface layer (export, check, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Export pipeline (locate, parse, canonicalize, merge)
//! - `report`: Run report types

pub mod artifact;
pub mod cli;
pub mod config;
pub mod core;
pub mod report;
