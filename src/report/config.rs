use serde::{Deserialize, Serialize};

/// What a report does when one of its fixed buckets never occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Fail with a lookup error.
    #[default]
    Strict,
    /// Report the bucket with a count of zero.
    ZeroFill,
}

/// What a report does when `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Treat it as an empty range.
    #[default]
    Permissive,
    /// Fail with an invalid range error.
    Reject,
}

// Serializable, comparable, explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub lookup: LookupPolicy,
    pub range: RangePolicy,
    pub separator: String,
}

impl ReportConfig {
    pub fn v0() -> Self {
        Self {
            lookup: LookupPolicy::Strict,
            range: RangePolicy::Permissive,
            separator: " ".into(),
        }
    }

    pub fn with_lookup(mut self, lookup: LookupPolicy) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_range(mut self, range: RangePolicy) -> Self {
        self.range = range;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::v0()
    }
}
