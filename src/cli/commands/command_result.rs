use std::path::PathBuf;

use crate::report::RunReport;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExportSummary {
    /// Artifact files written, first sheet first.
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running langsheet commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub report: RunReport,
    /// If true, exit code 1 should be returned when the report is not clean.
    /// `export` always exits 0 once the artifact is written.
    pub exit_on_missing: bool,
}

impl CommandResult {
    pub fn export(report: RunReport, outputs: Vec<PathBuf>) -> Self {
        Self {
            summary: CommandSummary::Export(ExportSummary { outputs }),
            report,
            exit_on_missing: false,
        }
    }

    pub fn check(report: RunReport) -> Self {
        Self {
            summary: CommandSummary::Check,
            report,
            exit_on_missing: true,
        }
    }

    pub fn init(summary: InitSummary) -> Self {
        Self {
            summary: CommandSummary::Init(summary),
            report: RunReport::default(),
            exit_on_missing: false,
        }
    }

    /// Whether this result should turn into a failing exit status.
    pub fn is_failure(&self) -> bool {
        match &self.summary {
            CommandSummary::Init(summary) => summary.error.is_some(),
            _ => {
                self.exit_on_missing
                    && (!self.report.is_clean() || self.report.skipped_count() > 0)
            }
        }
    }
}
