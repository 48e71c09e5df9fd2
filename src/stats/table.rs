use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No occurrences recorded for bucket: {0}")]
    MissingBucket(String),
}

/// Occurrence counts keyed by bucket name.
///
/// Buckets that never occurred are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsTable {
    counts: BTreeMap<String, usize>,
}

impl StatsTable {
    pub(crate) fn from_counts(counts: BTreeMap<String, usize>) -> Self {
        Self { counts }
    }

    pub fn get(&self, key: &str) -> Result<usize, LookupError> {
        self.counts
            .get(key)
            .copied()
            .ok_or_else(|| LookupError::MissingBucket(key.to_string()))
    }

    pub fn count_or_zero(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Format a single stat as `"<key>: <count>"`.
pub fn format_stat(table: &StatsTable, key: &str) -> Result<String, LookupError> {
    let count = table.get(key)?;
    Ok(format!("{key}: {count}"))
}
