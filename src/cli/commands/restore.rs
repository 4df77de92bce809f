use anyhow::{Context, Result};

use super::super::args::RestoreCommand;
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, RestoreSummary};
use crate::{source::XLSX_SUFFIX, strings, utils, workbook};

pub fn restore(cmd: RestoreCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    execute(&cmd, &ctx)
}

pub(crate) fn execute(cmd: &RestoreCommand, ctx: &CommandContext) -> Result<CommandResult> {
    utils::require_exists(&cmd.translate, "Translation file")?;
    utils::require_suffix(&cmd.translate, XLSX_SUFFIX, "Translation file")?;

    let translations = workbook::read_table(&cmd.translate, ctx.lang.as_str())?;
    let dir = cmd.output.join(ctx.lang.dir_name());
    let output_file =
        strings::write_translations(&translations, &dir, &ctx.config.strings_file_name)
            .context("Failed to restore strings file")?;

    Ok(CommandResult {
        summary: CommandSummary::Restore(RestoreSummary {
            output_file,
            lang: ctx.lang,
            key_count: translations.len(),
        }),
        config_path: ctx.config_path.clone(),
    })
}
