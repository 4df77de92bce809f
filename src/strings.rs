//! Reading and writing `.strings` files.
//!
//! Only the single-line `"key"="value";` form is understood. Comments, blank
//! lines and anything else that does not start with `"` and end with `;` are
//! skipped.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::record::{Record, Translations};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Parse a single line into a record, or `None` if the line is not a record.
///
/// ```
/// use locsheet::strings::parse_line;
///
/// let record = parse_line(r#""hello"="world";"#).unwrap();
/// assert_eq!(record.key, "hello");
/// assert_eq!(record.value, "world");
/// assert!(parse_line("hello=world").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Record> {
    if !line.starts_with('"') || !line.ends_with(';') {
        return None;
    }
    let (key, rest) = split_quoted(line)?;
    let value = rest.trim_start().strip_prefix('=')?;
    let value = value.trim().trim_matches(|c: char| c == '"' || c == ';');
    Some(Record::new(key, value))
}

/// Split a line starting with `"` after the closing quote of that first
/// string. A quote preceded by a backslash does not close it.
fn split_quoted(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('"')?;
    let mut escaped = false;
    for (index, c) in body.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some((&body[..index], &body[index + 1..])),
            _ => escaped = false,
        }
    }
    None
}

/// Parse file content into records, keeping input order and duplicates.
pub fn parse(content: &str) -> Vec<Record> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let record = parse_line(line);
            if record.is_none() && !line.trim().is_empty() {
                debug!(line = index + 1, "skipping non-record line");
            }
            record
        })
        .collect()
}

/// Read and parse a `.strings` file.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content =
        decode(&bytes).with_context(|| format!("Failed to decode file: {}", path.display()))?;
    let records = parse(&content);
    debug!(path = %path.display(), count = records.len(), "parsed strings file");
    Ok(records)
}

fn decode(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)
        .context("File is not valid UTF-8")?
        .to_string())
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        bail!("UTF-16 content has an odd number of bytes");
    }
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .context("File is not valid UTF-16")
}

/// Render a table in sorted key order, one `"key"="value";` line per entry.
///
/// ```
/// use locsheet::record::Translations;
/// use locsheet::strings::render;
///
/// let table: Translations = [("b", "2"), ("a", "1")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// assert_eq!(render(&table), "\"a\"=\"1\";\n\"b\"=\"2\";\n");
/// ```
pub fn render(translations: &Translations) -> String {
    translations
        .iter()
        .map(|(key, value)| format!("\"{}\"=\"{}\";\n", key, value))
        .collect()
}

/// Write `translations` to `dir/file_name`, creating `dir` if needed and
/// replacing any existing file. Returns the path written.
pub fn write_translations(
    translations: &Translations,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let target = dir.join(file_name);
    let file = File::create(&target)
        .with_context(|| format!("Failed to create file: {}", target.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render(translations).as_bytes())
        .with_context(|| format!("Failed to write file: {}", target.display()))?;
    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush file: {}", target.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync file: {}", target.display()))?;

    Ok(target)
}
