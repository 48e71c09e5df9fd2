use lucky_fizzbuzz::report::{LookupPolicy, RangePolicy, ReportConfig, Reporter};
use lucky_fizzbuzz::types::{Bucket, Label, Range, ReportDocument, ReportFingerprint};
use serde_json::Value;

#[test]
fn golden_report_document() {
    let reporter = Reporter::default();
    let range = Range::new(1, 20);
    let doc = reporter.document(range).unwrap();

    let json_str = serde_json::to_string(&doc).unwrap();

    // Field order: range -> labels -> stats -> fingerprint -> generated_at
    let range_pos = json_str.find("\"range\":").unwrap();
    let labels_pos = json_str.find("\"labels\":").unwrap();
    let stats_pos = json_str.find("\"stats\":").unwrap();
    let fp_pos = json_str.find("\"fingerprint\":").unwrap();
    let at_pos = json_str.find("\"generated_at\":").unwrap();
    assert!(range_pos < labels_pos);
    assert!(labels_pos < stats_pos);
    assert!(stats_pos < fp_pos);
    assert!(fp_pos < at_pos);

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed["range"], serde_json::json!({"min": 1, "max": 20}));
    assert_eq!(parsed["labels"][0], "1");
    assert_eq!(parsed["labels"][2], "lucky");
    assert_eq!(parsed["labels"][14], "fizzbuzz");
    assert_eq!(parsed["labels"].as_array().unwrap().len(), 20);
    assert_eq!(
        parsed["stats"],
        serde_json::json!({"buzz": 3, "fizz": 4, "fizzbuzz": 1, "integer": 10, "lucky": 2})
    );

    let expected_fp = ReportFingerprint::from_content(reporter.report(range).unwrap().as_bytes());
    assert_eq!(parsed["fingerprint"], expected_fp.as_str());
    assert!(expected_fp.as_str().starts_with("sha256:"));
    assert_eq!(expected_fp.as_str().len(), "sha256:".len() + 64);
}

#[test]
fn report_document_deserializes() {
    let reporter = Reporter::default();
    let json = reporter.document_json(Range::new(1, 20)).unwrap();
    let doc: ReportDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(doc.range, Range::new(1, 20));
    assert_eq!(doc.labels[4], Label::Buzz);
    assert_eq!(doc.labels[6], Label::Number(7));
    assert_eq!(doc.stats.get("integer"), Ok(10));
}

#[test]
fn labels_reject_unknown_text() {
    let result: Result<Label, _> = serde_json::from_str("\"wobble\"");
    assert!(result.is_err());
    let label: Label = serde_json::from_str("\"-12\"").unwrap();
    assert_eq!(label, Label::Number(-12));
}

#[test]
fn buckets_serialize_lowercase() {
    let json = serde_json::to_string(&Bucket::REPORT_ORDER).unwrap();
    assert_eq!(json, r#"["fizz","buzz","fizzbuzz","lucky","integer"]"#);
}

#[test]
fn golden_config_serialization() {
    let json = serde_json::to_string(&ReportConfig::v0()).unwrap();
    assert_eq!(json, r#"{"lookup":"strict","range":"permissive","separator":" "}"#);

    let config: ReportConfig = serde_json::from_str(r#"{"lookup":"zero_fill"}"#).unwrap();
    assert_eq!(config.lookup, LookupPolicy::ZeroFill);
    assert_eq!(config.range, RangePolicy::Permissive);
    assert_eq!(config.separator, " ");

    let config: ReportConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ReportConfig::default());
}
