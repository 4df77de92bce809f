//! Common utility functions shared across the codebase.

use std::path::Path;

use anyhow::{Result, bail};

/// Checks if the path ends with the given suffix, e.g. `".xlsx"`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use locsheet::utils::has_suffix;
///
/// assert!(has_suffix(Path::new("out/translate.xlsx"), ".xlsx"));
/// assert!(!has_suffix(Path::new("Localizable.strings"), ".xlsx"));
/// assert!(!has_suffix(Path::new("xlsx"), ".xlsx"));
/// ```
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(suffix))
}

/// Fail with `what` if nothing exists at `path`.
pub fn require_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} not found: {}", what, path.display());
    }
    Ok(())
}

/// Fail unless `path` ends with `suffix`.
pub fn require_suffix(path: &Path, suffix: &str, what: &str) -> Result<()> {
    if !has_suffix(path, suffix) {
        bail!("{} must be a {} file: {}", what, suffix, path.display());
    }
    Ok(())
}
