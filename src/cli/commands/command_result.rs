use std::path::PathBuf;

use crate::lang::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Init,
    Patch,
    Restore,
}

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Patch(PatchSummary),
    Restore(RestoreSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Init(_) => CommandKind::Init,
            CommandSummary::Patch(_) => CommandKind::Patch,
            CommandSummary::Restore(_) => CommandKind::Restore,
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub output: PathBuf,
    pub lang: Lang,
    pub record_count: usize,
    pub sheet_created: bool,
    pub rows_cleared: usize,
}

#[derive(Debug)]
pub struct PatchSummary {
    pub translate: PathBuf,
    pub lang: Lang,
    /// Keys in the target sheet.
    pub key_count: usize,
    /// Target keys also present in the patch source.
    pub matched_count: usize,
    /// Matched keys whose value changed.
    pub changed_count: usize,
    /// Value cells rewritten. A key on several rows counts once per row.
    pub cells_written: usize,
    /// Patch keys the target sheet does not have. They are not added.
    pub ignored_keys: Vec<String>,
}

#[derive(Debug)]
pub struct RestoreSummary {
    pub output_file: PathBuf,
    pub lang: Lang,
    pub key_count: usize,
}

/// Result of running a locsheet command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Where the configuration came from, if a config file was found.
    pub config_path: Option<PathBuf>,
}

impl CommandResult {
    pub fn kind(&self) -> CommandKind {
        self.summary.kind()
    }
}
