pub mod config;

use chrono::Utc;

use crate::classify::{Classifier, LuckyFizzBuzz};
use crate::generate::{join, RangeGenerator};
use crate::stats::{format_stat, StatsTable};
use crate::types::label::{Bucket, Label};
use crate::types::range::Range;
use crate::types::report::{ReportDocument, ReportError, ReportFingerprint};
pub use config::{LookupPolicy, RangePolicy, ReportConfig};

pub struct Reporter<C> {
	generator: RangeGenerator<C>,
	config: ReportConfig,
}

impl Default for Reporter<LuckyFizzBuzz> {
	fn default() -> Self {
		Self {
			generator: RangeGenerator::default(),
			config: ReportConfig::v0(),
		}
	}
}

impl Reporter<LuckyFizzBuzz> {
	pub fn with_config(config: ReportConfig) -> Self {
		Self::new(LuckyFizzBuzz, config)
	}
}

impl<C> Reporter<C>
where
	C: Classifier,
{
	pub fn new(classifier: C, config: ReportConfig) -> Self {
		Self {
			generator: RangeGenerator::new(classifier),
			config,
		}
	}

	pub fn config(&self) -> &ReportConfig {
		&self.config
	}

	/// Labels for `range`, after applying the range policy.
	pub fn labels(&self, range: Range) -> Result<Vec<Label>, ReportError> {
		if range.is_inverted() && self.config.range == RangePolicy::Reject {
			log::debug!("rejecting inverted range [{}, {}]", range.min(), range.max());
			return Err(ReportError::InvalidRange {
				min: range.min(),
				max: range.max(),
			});
		}
		Ok(self.generator.generate(range))
	}

	pub fn render(&self, range: Range) -> Result<String, ReportError> {
		let labels = self.labels(range)?;
		Ok(join(&labels, &self.config.separator))
	}

	/// Rendered labels followed by the fizz, buzz, fizzbuzz, lucky and integer counts.
	pub fn report(&self, range: Range) -> Result<String, ReportError> {
		let labels = self.labels(range)?;
		let stats = StatsTable::from_labels(&labels);
		self.report_text(&labels, &stats)
	}

	pub fn document(&self, range: Range) -> Result<ReportDocument, ReportError> {
		let labels = self.labels(range)?;
		let stats = StatsTable::from_labels(&labels);
		let text = self.report_text(&labels, &stats)?;

		Ok(ReportDocument {
			range,
			labels,
			stats,
			fingerprint: ReportFingerprint::from_content(text.as_bytes()),
			generated_at: Utc::now(),
		})
	}

	pub fn document_json(&self, range: Range) -> Result<String, ReportError> {
		let document = self.document(range)?;
		Ok(serde_json::to_string_pretty(&document)?)
	}

	fn report_text(&self, labels: &[Label], stats: &StatsTable) -> Result<String, ReportError> {
		let mut parts: Vec<String> = labels.iter().map(Label::to_string).collect();
		for bucket in Bucket::REPORT_ORDER {
			let key = bucket.as_str();
			let stat = match self.config.lookup {
				LookupPolicy::Strict => format_stat(stats, key)?,
				LookupPolicy::ZeroFill => format!("{key}: {}", stats.count_or_zero(key)),
			};
			parts.push(stat);
		}
		debug_assert_eq!(stats.total(), labels.len());
		Ok(parts.join(&self.config.separator))
	}
}

/// Space-joined labels for `[min, max]`.
pub fn render(min: i64, max: i64) -> String {
	RangeGenerator::default().render(Range::new(min, max))
}

/// [`render`] followed by the five bucket counts.
///
/// Fails with a lookup error when any of the five buckets is empty for the range.
pub fn report(min: i64, max: i64) -> Result<String, ReportError> {
	Reporter::default().report(Range::new(min, max))
}

