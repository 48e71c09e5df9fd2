use std::collections::BTreeMap;

use crate::stats::table::StatsTable;
use crate::types::label::{Label, INTEGER};

/// Count label occurrences.
///
/// Numeric labels all land in the `integer` bucket. Anything else is counted
/// under its own literal text, so unknown labels get their own buckets.
pub fn aggregate<I, S>(labels: I) -> StatsTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut seen = 0usize;

    for label in labels {
        let label = label.as_ref();
        let key = if is_numeric(label) { INTEGER } else { label };
        *counts.entry(key.to_string()).or_insert(0) += 1;
        seen += 1;
    }

    let table = StatsTable::from_counts(counts);
    debug_assert_eq!(table.total(), seen);
    log::debug!(
        "aggregated {seen} labels into {} buckets",
        table.len()
    );
    table
}

impl StatsTable {
    pub fn from_labels(labels: &[Label]) -> Self {
        aggregate(labels.iter().map(Label::to_string))
    }
}

/// Optional sign followed by at least one ASCII digit.
pub fn is_numeric(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
