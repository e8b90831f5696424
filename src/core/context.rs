use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    artifact::{Sheet, SheetWriter},
    config::Config,
    core::{
        ExportError,
        canonicalize::{Canonicalized, canonicalize},
        locate::{LocaleDir, ResourceLayout, discover_layout, eligible_files},
        merge::{LocaleResult, merge_locale},
        parsers::resource::parse_resource_file,
    },
    report::{FileReport, LocaleReport, RunReport},
};

/// Outcome of one locale for one resource file.
#[derive(Debug)]
pub enum LocaleOutcome {
    Merged(LocaleResult),
    /// The locale file could not be merged; other locales are unaffected.
    Skipped { locale: String, error: ExportError },
}

/// Everything produced for one resource file.
#[derive(Debug)]
pub struct FileExport {
    pub sheet: Sheet,
    pub report: FileReport,
}

/// Export coordinator for one run.
///
/// Owns all run-scoped state: the merged configuration, the resolved resource
/// layout and the ignored key set. Nothing is process-wide, so independent
/// runs can share a process.
///
/// For each eligible resource file the base locale is canonicalized once,
/// then every locale is merged against the resulting index in parallel.
/// Results are committed to the sheet afterwards, in locale order.
pub struct ExportContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory.
    pub project: PathBuf,

    pub layout: ResourceLayout,

    ignored: HashSet<String>,

    patterns: Vec<Pattern>,
}

impl ExportContext {
    /// Resolve the project's resource layout.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config has invalid resource file patterns
    /// - No resource directory or base values directory can be found
    pub fn new(project: &Path, config: Config) -> Result<Self> {
        let patterns = config.resource_file_patterns()?;
        let layout = discover_layout(project, &config.resource_dirs, &config.base_dir)?;
        debug!(
            res_dir = %layout.res_dir.display(),
            locales = layout.locales.len(),
            "resource layout resolved"
        );

        Ok(Self {
            ignored: config.ignored_key_set(),
            patterns,
            project: project.to_path_buf(),
            layout,
            config,
        })
    }

    /// Eligible resource files present in the base directory.
    pub fn files(&self) -> Result<Vec<String>, ExportError> {
        eligible_files(&self.layout.base_dir, &self.patterns)
    }

    /// Run the pipeline for every eligible file without writing anything.
    ///
    /// Errors on a base file (malformed markup, duplicate keys) abort the run.
    pub fn run(&self) -> Result<Vec<FileExport>, ExportError> {
        self.files()?
            .iter()
            .map(|file| self.export_file(file))
            .collect()
    }

    /// Run the pipeline and hand each sheet to `writer`.
    pub fn export(&self, writer: &mut dyn SheetWriter) -> Result<(RunReport, Vec<PathBuf>)> {
        let mut report = RunReport::default();
        let mut outputs = Vec::new();

        for file in self.run()? {
            outputs.push(writer.write_sheet(&file.sheet)?);
            report.files.push(file.report);
        }

        Ok((report, outputs))
    }

    pub fn export_file(&self, file_name: &str) -> Result<FileExport, ExportError> {
        let base_path = self.layout.base_dir.join(file_name);
        info!(file = file_name, "processing default language");

        let entries = parse_resource_file(&base_path)?;
        let base = canonicalize(&entries, &self.ignored, &base_path)?;

        let outcomes: Vec<LocaleOutcome> = self
            .layout
            .locales
            .par_iter()
            .filter_map(|locale_dir| self.merge_locale_file(&base, locale_dir, file_name))
            .collect();

        let mut sheet = Sheet::from_base(file_name, &base);
        let mut locales = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                LocaleOutcome::Merged(result) => {
                    sheet.add_locale(&base.index, &result);
                    locales.push(LocaleReport::from_result(&result));
                }
                LocaleOutcome::Skipped { locale, error } => {
                    locales.push(LocaleReport::skipped(&locale, error.to_string()));
                }
            }
        }

        Ok(FileExport {
            sheet,
            report: FileReport {
                file: file_name.to_string(),
                base_keys: base.index.len(),
                locales,
            },
        })
    }

    /// Parse and merge one locale's copy of a file. `None` when the locale
    /// has no such file.
    fn merge_locale_file(
        &self,
        base: &Canonicalized,
        locale_dir: &LocaleDir,
        file_name: &str,
    ) -> Option<LocaleOutcome> {
        let path = locale_dir.path.join(file_name);
        if !path.is_file() {
            debug!(locale = %locale_dir.locale, file = file_name, "no file for locale");
            return None;
        }
        info!(locale = %locale_dir.locale, file = file_name, "start processing");

        let merged = parse_resource_file(&path)
            .and_then(|entries| merge_locale(&base.index, &locale_dir.locale, &entries, &path));

        Some(match merged {
            Ok(result) => LocaleOutcome::Merged(result),
            Err(error) => {
                warn!(locale = %locale_dir.locale, %error, "locale skipped");
                LocaleOutcome::Skipped {
                    locale: locale_dir.locale.clone(),
                    error,
                }
            }
        })
    }
}
