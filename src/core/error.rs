//! Error taxonomy for the export pipeline.
//!
//! Whether an error aborts the run depends on where it is raised: errors on the
//! base locale propagate out of [`crate::core::ExportContext::run`], while the
//! same errors on a secondary locale are caught at the per-locale boundary and
//! turned into a skipped locale in the report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The file is not well-formed markup, or a translatable element lacks a
    /// required `name` / `quantity` attribute.
    #[error("malformed resource file '{}': {reason}", path.display())]
    MalformedResource { path: PathBuf, reason: String },

    /// Two entries in one file resolve to the same canonical key.
    #[error("duplicate key '{key}' in '{}'", path.display())]
    DuplicateKey { path: PathBuf, key: String },

    #[error(
        "cannot find resource directory under '{}' (looked for: {})",
        project.display(),
        candidates.join(", ")
    )]
    UnresolvedDirectory {
        project: PathBuf,
        candidates: Vec<String>,
    },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedResource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
