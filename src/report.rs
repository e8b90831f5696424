//! Run report types.
//!
//! The report is produced alongside the artifact and is what the CLI prints
//! (as text or JSON) after an export or check.

use serde::Serialize;

use crate::core::merge::LocaleResult;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Total missing-reportable keys across all files and locales.
    pub fn missing_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.locales)
            .map(|l| l.missing.len())
            .sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.locales)
            .filter(|l| l.skipped.is_some())
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.missing_count() == 0
    }
}

/// Report for one exported resource file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    /// Number of canonical keys in the base locale.
    pub base_keys: usize,
    /// In processing order.
    pub locales: Vec<LocaleReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleReport {
    pub locale: String,
    pub translated: usize,
    /// Sorted missing-reportable keys.
    pub missing: Vec<String>,
    pub suppressed: usize,
    /// Keys present in the locale but not in the base.
    pub extra: Vec<String>,
    /// Set when the locale could not be merged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

impl LocaleReport {
    pub fn from_result(result: &LocaleResult) -> Self {
        Self {
            locale: result.locale.clone(),
            translated: result.translated_count(),
            missing: result
                .missing_reportable
                .iter()
                .map(|k| k.to_string())
                .collect(),
            suppressed: result.missing_suppressed.len(),
            extra: result.extra_keys.iter().map(|k| k.to_string()).collect(),
            skipped: None,
        }
    }

    pub fn skipped(locale: &str, reason: String) -> Self {
        Self {
            locale: locale.to_string(),
            translated: 0,
            missing: Vec::new(),
            suppressed: 0,
            extra: Vec::new(),
            skipped: Some(reason),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_none() && self.missing.is_empty()
    }
}
