use anyhow::{Context, Result, anyhow};
use tracing::debug;

use super::super::args::PatchCommand;
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, PatchSummary};
use crate::{
    merge::merge,
    source::{STRINGS_SUFFIX, SourceKind, XLSX_SUFFIX},
    utils, workbook,
};

pub fn patch(cmd: PatchCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    execute(&cmd, &ctx)
}

pub(crate) fn execute(cmd: &PatchCommand, ctx: &CommandContext) -> Result<CommandResult> {
    utils::require_exists(&cmd.patch, "Patch file")?;
    utils::require_exists(&cmd.translate, "Translation file")?;
    let kind = SourceKind::detect(&cmd.patch).ok_or_else(|| {
        anyhow!(
            "Patch file must be a {} or {} file: {}",
            XLSX_SUFFIX,
            STRINGS_SUFFIX,
            cmd.patch.display()
        )
    })?;
    utils::require_suffix(&cmd.translate, XLSX_SUFFIX, "Translation file")?;

    let sheet = ctx.lang.as_str();
    let patch = kind.load(&cmd.patch, ctx.lang)?;
    let existing = workbook::read_table(&cmd.translate, sheet)?;
    let merged = merge(&existing, &patch);
    for key in &merged.ignored {
        debug!(key = %key, "patch key not in translation file, ignored");
    }

    let cells_written =
        workbook::update_values(&cmd.translate, sheet, &merged.updates).with_context(|| {
            format!(
                "Failed to update translation file: {}",
                cmd.translate.display()
            )
        })?;

    Ok(CommandResult {
        summary: CommandSummary::Patch(PatchSummary {
            translate: cmd.translate.clone(),
            lang: ctx.lang,
            key_count: existing.len(),
            matched_count: merged.matched,
            changed_count: merged.changed,
            cells_written,
            ignored_keys: merged.ignored,
        }),
        config_path: ctx.config_path.clone(),
    })
}
