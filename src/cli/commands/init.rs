use anyhow::{Context, Result};

use super::super::args::InitCommand;
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::{source::XLSX_SUFFIX, strings, utils, workbook};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    execute(&cmd, &ctx)
}

pub(crate) fn execute(cmd: &InitCommand, ctx: &CommandContext) -> Result<CommandResult> {
    utils::require_exists(&cmd.strings, "Strings file")?;
    utils::require_suffix(&cmd.output, XLSX_SUFFIX, "Output")?;

    let records = strings::read_records(&cmd.strings)?;
    let outcome = workbook::save_records(&cmd.output, ctx.lang.as_str(), &records, &ctx.title())
        .with_context(|| {
            format!(
                "Failed to write translation sheet: {}",
                cmd.output.display()
            )
        })?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            output: cmd.output.clone(),
            lang: ctx.lang,
            record_count: outcome.records_written,
            sheet_created: outcome.sheet_created,
            rows_cleared: outcome.rows_cleared,
        }),
        config_path: ctx.config_path.clone(),
    })
}
