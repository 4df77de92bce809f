//! `.xlsx` translation sheets.
//!
//! Each language lives on its own sheet named after the language code. Column A
//! holds keys, column B holds values, and row 1 is a header.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet, reader, structs::XlsxError, writer};

use crate::{
    lang::Title,
    record::{Record, Translations},
};

const KEY_COLUMN: u32 = 1;
const VALUE_COLUMN: u32 = 2;
const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = 2;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("Failed to open workbook {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
    #[error("Failed to save workbook {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
    #[error("Sheet \"{sheet}\" not found in {}", path.display())]
    MissingSheet { path: PathBuf, sheet: String },
    #[error("Failed to create sheet \"{sheet}\": {reason}")]
    CreateSheet { sheet: String, reason: &'static str },
}

pub type Result<T, E = WorkbookError> = std::result::Result<T, E>;

/// Outcome of writing records into a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub records_written: usize,
    /// True when the sheet did not exist before.
    pub sheet_created: bool,
    /// Rows left over from a previous, longer version of the sheet that were blanked.
    pub rows_cleared: usize,
}

fn open(path: &Path) -> Result<Spreadsheet> {
    reader::xlsx::read(path).map_err(|source| WorkbookError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn save(book: &Spreadsheet, path: &Path) -> Result<()> {
    writer::xlsx::write(book, path).map_err(|source| WorkbookError::Save {
        path: path.to_path_buf(),
        source,
    })
}

fn sheet<'a>(book: &'a Spreadsheet, path: &Path, name: &str) -> Result<&'a Worksheet> {
    book.get_sheet_by_name(name)
        .ok_or_else(|| WorkbookError::MissingSheet {
            path: path.to_path_buf(),
            sheet: name.to_string(),
        })
}

fn sheet_mut<'a>(book: &'a mut Spreadsheet, path: &Path, name: &str) -> Result<&'a mut Worksheet> {
    book.get_sheet_by_name_mut(name)
        .ok_or_else(|| WorkbookError::MissingSheet {
            path: path.to_path_buf(),
            sheet: name.to_string(),
        })
}

/// Collect key/value rows of one sheet. The header row is skipped, as are rows
/// with an empty key or with no cell past the key column. A row whose value
/// cell is missing but which has a later cell reads as an empty value. Later
/// rows win on duplicate keys.
fn collect_rows(worksheet: &Worksheet) -> Translations {
    let last_column = worksheet.get_highest_column();
    let mut translations = Translations::new();
    for row in FIRST_DATA_ROW..=worksheet.get_highest_row() {
        let has_value_side =
            (VALUE_COLUMN..=last_column).any(|column| worksheet.get_cell((column, row)).is_some());
        if !has_value_side {
            continue;
        }
        let key = worksheet.get_value((KEY_COLUMN, row));
        if key.is_empty() {
            continue;
        }
        let value = worksheet.get_value((VALUE_COLUMN, row));
        translations.insert(key, value);
    }
    translations
}

/// Read the translation table stored on `sheet_name`.
pub fn read_table(path: &Path, sheet_name: &str) -> Result<Translations> {
    let book = open(path)?;
    let translations = collect_rows(sheet(&book, path, sheet_name)?);
    debug!(
        path = %path.display(),
        sheet = sheet_name,
        count = translations.len(),
        "read translation sheet"
    );
    Ok(translations)
}

/// Write `records` to `sheet_name` under a `title` header row.
///
/// The workbook at `path` is opened if it exists, otherwise created. An existing
/// sheet is reused and its old rows are overwritten. The sheet becomes the
/// active one.
pub fn save_records(
    path: &Path,
    sheet_name: &str,
    records: &[Record],
    title: &Title,
) -> Result<SaveOutcome> {
    let mut book = if path.exists() {
        open(path)?
    } else {
        umya_spreadsheet::new_file_empty_worksheet()
    };

    let sheet_created = book.get_sheet_by_name(sheet_name).is_none();
    if sheet_created {
        book.new_sheet(sheet_name)
            .map_err(|reason| WorkbookError::CreateSheet {
                sheet: sheet_name.to_string(),
                reason,
            })?;
    }

    let worksheet = sheet_mut(&mut book, path, sheet_name)?;
    let previous_last_row = worksheet.get_highest_row();

    set_text(worksheet, KEY_COLUMN, HEADER_ROW, &title.keyword);
    set_text(worksheet, VALUE_COLUMN, HEADER_ROW, &title.value);

    let mut row = FIRST_DATA_ROW;
    for record in records {
        set_text(worksheet, KEY_COLUMN, row, &record.key);
        set_text(worksheet, VALUE_COLUMN, row, &record.value);
        row += 1;
    }

    let mut rows_cleared = 0;
    for stale in row..=previous_last_row {
        set_text(worksheet, KEY_COLUMN, stale, "");
        set_text(worksheet, VALUE_COLUMN, stale, "");
        rows_cleared += 1;
    }

    if let Some(index) = book
        .get_sheet_collection()
        .iter()
        .position(|ws| ws.get_name() == sheet_name)
    {
        book.set_active_sheet(index as u32);
    }

    save(&book, path)?;
    info!(
        path = %path.display(),
        sheet = sheet_name,
        records = records.len(),
        sheet_created,
        "saved translation sheet"
    );

    Ok(SaveOutcome {
        records_written: records.len(),
        sheet_created,
        rows_cleared,
    })
}

/// Overwrite the value column of every row whose key is in `translations`.
///
/// Rows with keys absent from `translations` are untouched, and keys absent
/// from the sheet are not added. The workbook is saved in place. Returns the
/// number of cells written.
pub fn update_values(path: &Path, sheet_name: &str, translations: &Translations) -> Result<usize> {
    let mut book = open(path)?;
    let worksheet = sheet_mut(&mut book, path, sheet_name)?;

    let mut updated = 0;
    for row in FIRST_DATA_ROW..=worksheet.get_highest_row() {
        let key = worksheet.get_value((KEY_COLUMN, row));
        if let Some(value) = translations.get(&key) {
            debug!(row, key = %key, "updating value cell");
            set_text(worksheet, VALUE_COLUMN, row, value);
            updated += 1;
        }
    }

    save(&book, path)?;
    info!(path = %path.display(), sheet = sheet_name, updated, "updated translation sheet");
    Ok(updated)
}

fn set_text(worksheet: &mut Worksheet, column: u32, row: u32, text: &str) {
    worksheet
        .get_cell_mut((column, row))
        .set_value_string(text);
}
