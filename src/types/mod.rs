pub mod label;
pub mod range;
pub mod report;

pub use label::{Bucket, Label, ParseLabelError};
pub use range::{Range, RangeError};
pub use report::{ReportDocument, ReportError, ReportFingerprint};
