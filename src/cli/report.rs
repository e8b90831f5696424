//! Report formatting and printing utilities.
//!
//! Prints the run report as colored text or JSON. Kept apart from the core
//! pipeline so langsheet can be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::ReportFormat,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::report::{FileReport, LocaleReport, RunReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout in the requested format.
pub fn print(result: &CommandResult, format: ReportFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        ReportFormat::Text => print_to(result, &mut stdout),
        ReportFormat::Json => print_json_to(result, &mut stdout)?,
    }
    Ok(())
}

/// Print a command result as text to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, writer),
        CommandSummary::Export(summary) => {
            report_to(&result.report, writer);
            for output in &summary.outputs {
                let _ = writeln!(writer, "{} {}", "Wrote".bold(), output.display());
            }
            print_summary(&result.report, writer);
        }
        CommandSummary::Check => {
            report_to(&result.report, writer);
            print_summary(&result.report, writer);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    outputs: Vec<String>,
    #[serde(flatten)]
    report: &'a RunReport,
}

/// Print a command result as pretty JSON to a custom writer.
pub fn print_json_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    if let CommandSummary::Init(summary) = &result.summary {
        print_init(summary, writer);
        return Ok(());
    }

    let outputs = match &result.summary {
        CommandSummary::Export(summary) => summary
            .outputs
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        _ => Vec::new(),
    };
    let json = serde_json::to_string_pretty(&JsonOutput {
        outputs,
        report: &result.report,
    })?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print the per-file, per-locale report.
pub fn report_to<W: Write>(report: &RunReport, writer: &mut W) {
    for file in &report.files {
        print_file(file, writer);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_file<W: Write>(file: &FileReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} ({} {})",
        file.file.bold(),
        file.base_keys,
        if file.base_keys == 1 { "key" } else { "keys" }
    );

    let label_width = file
        .locales
        .iter()
        .map(|l| UnicodeWidthStr::width(l.locale.as_str()) + 2)
        .max()
        .unwrap_or(0);

    for locale in &file.locales {
        print_locale(locale, writer, label_width);
    }
}

fn print_locale<W: Write>(locale: &LocaleReport, writer: &mut W, label_width: usize) {
    let label = format!("'{}'", locale.locale);
    let padding = label_width.saturating_sub(UnicodeWidthStr::width(label.as_str()));

    if let Some(reason) = &locale.skipped {
        let _ = writeln!(
            writer,
            "  {}{:padding$} {} {}",
            label.yellow(),
            "",
            "was skipped:".yellow(),
            reason,
            padding = padding
        );
        return;
    }

    if locale.missing.is_empty() {
        let _ = writeln!(
            writer,
            "  {}{:padding$} was processed ({} translated)",
            label.green(),
            "",
            locale.translated,
            padding = padding
        );
    } else {
        let _ = writeln!(
            writer,
            "  {}{:padding$} was processed ({} translated) with {} - {}",
            label.red(),
            "",
            locale.translated,
            "MISSED KEYS".red().bold(),
            locale.missing.len(),
            padding = padding
        );
        for key in &locale.missing {
            let _ = writeln!(writer, "      {}", key);
        }
    }

    for key in &locale.extra {
        let _ = writeln!(
            writer,
            "      {} '{}' is not in the default language",
            "note:".dimmed(),
            key
        );
    }
}

fn print_summary<W: Write>(report: &RunReport, writer: &mut W) {
    let locales: usize = report.files.iter().map(|f| f.locales.len()).sum();
    let missing = report.missing_count();
    let skipped = report.skipped_count();

    if missing == 0 && skipped == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Processed {} {}, {} {} - no missing keys",
                report.files.len(),
                if report.files.len() == 1 { "file" } else { "files" },
                locales,
                if locales == 1 { "locale" } else { "locales" }
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} missing {}, {} skipped {}",
        FAILURE_MARK.red(),
        missing,
        if missing == 1 { "key" } else { "keys" }.red(),
        skipped,
        if skipped == 1 { "locale" } else { "locales" }.yellow()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
    }
}

// ============================================================
// Tests
// ============================================================
