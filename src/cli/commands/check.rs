use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, build_context};
use crate::report::RunReport;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = build_context(&cmd.common)?;

    let report = RunReport {
        files: ctx.run()?.into_iter().map(|file| file.report).collect(),
    };

    Ok(CommandResult::check(report))
}
