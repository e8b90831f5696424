use anyhow::{Ok, Result};
use chrono::Utc;
use tracing::info;

use super::super::args::ExportCommand;
use super::{CommandResult, build_context};
use crate::artifact::{csv_writer::CsvSheetWriter, default_output_path, normalize_output_path};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = build_context(&cmd.common)?;

    let output = match &cmd.output {
        Some(path) => normalize_output_path(path),
        None => default_output_path(Utc::now().timestamp_millis()),
    };
    info!(output = %output.display(), "exporting");

    let mut writer = CsvSheetWriter::new(output);
    let (report, outputs) = ctx.export(&mut writer)?;

    Ok(CommandResult::export(report, outputs))
}
