use std::collections::BTreeMap;

/// One translatable string and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Translation table for one language: unique keys, iterated in sorted key order.
pub type Translations = BTreeMap<String, String>;

/// Collect records into a table. A later record wins over an earlier one with the same key.
pub fn to_translations(records: &[Record]) -> Translations {
    records
        .iter()
        .map(|r| (r.key.clone(), r.value.clone()))
        .collect()
}
