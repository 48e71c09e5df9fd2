use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::stats::{LookupError, StatsTable};
use crate::types::label::Label;
use crate::types::range::Range;

/// Content hash of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportFingerprint(String);

impl ReportFingerprint {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ReportFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Structured form of a report.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub range: Range,
    pub labels: Vec<Label>,
    pub stats: StatsTable,
    /// Hash of the rendered report text. Does not cover `generated_at`.
    pub fingerprint: ReportFingerprint,
    pub generated_at: DateTime<Utc>, // informational only
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
