//! Patching an existing translation table from a secondary source.

use crate::record::Translations;

/// Result of merging a patch table into an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Merge {
    /// Patch entries whose key the existing table has. Only these rows get written.
    pub updates: Translations,
    /// Existing keys that the patch also has.
    pub matched: usize,
    /// Matched keys whose value actually differs from before.
    pub changed: usize,
    /// Patch keys that the existing table does not have, in sorted order.
    pub ignored: Vec<String>,
}

/// Pick the patch entries that apply to `existing`, counting how many differ.
///
/// ```
/// use locsheet::merge::merge;
/// use locsheet::record::Translations;
///
/// let existing: Translations = [("ok".to_string(), "OK".to_string())].into();
/// let patch: Translations = [
///     ("ok".to_string(), "Okay".to_string()),
///     ("new".to_string(), "New".to_string()),
/// ]
/// .into();
///
/// let merged = merge(&existing, &patch);
/// assert_eq!(merged.updates["ok"], "Okay");
/// assert!(!merged.updates.contains_key("new"));
/// assert_eq!(merged.ignored, vec!["new".to_string()]);
/// ```
pub fn merge(existing: &Translations, patch: &Translations) -> Merge {
    let mut result = Merge::default();

    for (key, patched) in patch {
        match existing.get(key) {
            Some(current) => {
                result.matched += 1;
                if current != patched {
                    result.changed += 1;
                }
                result.updates.insert(key.clone(), patched.clone());
            }
            None => result.ignored.push(key.clone()),
        }
    }

    result
}
