//! Resource directory discovery.
//!
//! Finds the resource directory of a project, its base `values` directory, the
//! locale-suffixed sibling directories, and the eligible resource files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::debug;

use crate::core::ExportError;

/// A locale-suffixed values directory (`values-fr`, `values-pt-rBR`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub locale: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResourceLayout {
    pub res_dir: PathBuf,
    pub base_dir: PathBuf,
    /// Sorted by locale id.
    pub locales: Vec<LocaleDir>,
}

/// Locale id of a values directory: the part after the first `-`.
///
/// Returns `None` for the base directory itself, for directories that do not
/// start with the base name, and for directories without a `-`.
///
/// ```
/// use langsheet::core::locate::locale_from_dir_name;
///
/// assert_eq!(locale_from_dir_name("values-fr", "values"), Some("fr".to_string()));
/// assert_eq!(locale_from_dir_name("values-pt-rBR", "values"), Some("pt-rBR".to_string()));
/// assert_eq!(locale_from_dir_name("values", "values"), None);
/// assert_eq!(locale_from_dir_name("drawable-hdpi", "values"), None);
/// ```
pub fn locale_from_dir_name(dir_name: &str, base_dir_name: &str) -> Option<String> {
    if dir_name == base_dir_name || !dir_name.starts_with(base_dir_name) {
        return None;
    }
    dir_name
        .split_once('-')
        .map(|(_, locale)| locale.to_string())
        .filter(|locale| !locale.is_empty())
}

/// First existing candidate directory under the project root.
pub fn find_resource_dir(project: &Path, candidates: &[String]) -> Result<PathBuf, ExportError> {
    candidates
        .iter()
        .map(|candidate| project.join(candidate))
        .find(|path| path.is_dir())
        .ok_or_else(|| ExportError::UnresolvedDirectory {
            project: project.to_path_buf(),
            candidates: candidates.to_vec(),
        })
}

/// Resolve the resource layout of a project.
pub fn discover_layout(
    project: &Path,
    candidates: &[String],
    base_dir_name: &str,
) -> Result<ResourceLayout, ExportError> {
    let res_dir = find_resource_dir(project, candidates)?;
    let base_dir = res_dir.join(base_dir_name);
    if !base_dir.is_dir() {
        return Err(ExportError::UnresolvedDirectory {
            project: project.to_path_buf(),
            candidates: candidates
                .iter()
                .map(|c| format!("{}/{}", c, base_dir_name))
                .collect(),
        });
    }

    let mut locales = Vec::new();
    for entry in fs::read_dir(&res_dir).map_err(|e| ExportError::io(&res_dir, e))? {
        let entry = entry.map_err(|e| ExportError::io(&res_dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match locale_from_dir_name(dir_name, base_dir_name) {
            Some(locale) => locales.push(LocaleDir { locale, path }),
            None => debug!(dir = dir_name, "not a locale directory, skipped"),
        }
    }
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));

    Ok(ResourceLayout {
        res_dir,
        base_dir,
        locales,
    })
}

/// File names in the base directory matching an eligible pattern.
///
/// Files are ordered by the first pattern they match, then by name, so the
/// configured default file comes before files added later.
pub fn eligible_files(base_dir: &Path, patterns: &[Pattern]) -> Result<Vec<String>, ExportError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(base_dir).map_err(|e| ExportError::io(base_dir, e))? {
        let entry = entry.map_err(|e| ExportError::io(base_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(rank) = patterns.iter().position(|p| p.matches(name)) {
            files.push((rank, name.to_string()));
        }
    }
    files.sort();
    Ok(files.into_iter().map(|(_, name)| name).collect())
}
