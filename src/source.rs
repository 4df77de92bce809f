//! Patch sources: either a `.xlsx` workbook or a `.strings` file, told apart by suffix.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    lang::Lang,
    record::{Translations, to_translations},
    strings, utils, workbook,
};

pub const XLSX_SUFFIX: &str = ".xlsx";
pub const STRINGS_SUFFIX: &str = ".strings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Workbook,
    Strings,
}

impl SourceKind {
    /// Detect the kind of `path` from its suffix.
    pub fn detect(path: &Path) -> Option<Self> {
        if utils::has_suffix(path, XLSX_SUFFIX) {
            Some(Self::Workbook)
        } else if utils::has_suffix(path, STRINGS_SUFFIX) {
            Some(Self::Strings)
        } else {
            None
        }
    }

    /// Load a translation table from `path`. Workbooks are read from the `lang` sheet.
    pub fn load(self, path: &Path, lang: Lang) -> Result<Translations> {
        match self {
            Self::Workbook => workbook::read_table(path, lang.as_str())
                .with_context(|| format!("Failed to read patch workbook: {}", path.display())),
            Self::Strings => strings::read_records(path).map(|records| to_translations(&records)),
        }
    }
}
