pub mod check;
mod command_result;
pub mod export;
pub mod init;

pub use command_result::*;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::args::CommonArgs;
use crate::{config::load_config, core::ExportContext};

/// Load config for the project, apply CLI overrides and resolve the layout.
pub fn build_context(args: &CommonArgs) -> Result<ExportContext> {
    let project: &Path = &args.project;
    if !project.is_dir() {
        anyhow::bail!("project directory not found: {}", project.display());
    }

    let loaded = load_config(project)
        .with_context(|| format!("Failed to load config for {}", project.display()))?;
    debug!(from_file = loaded.from_file, "config loaded");

    let mut config = loaded.config;
    config.extend(&args.files, &args.ignored_keys);
    config.validate()?;

    ExportContext::new(project, config)
}
