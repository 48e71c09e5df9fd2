use lucky_fizzbuzz::report::{LookupPolicy, ReportConfig, Reporter};
use lucky_fizzbuzz::types::Range;
use lucky_fizzbuzz::{render, report};

#[test]
fn render_is_idempotent() {
    assert_eq!(render(1, 100), render(1, 100));
    assert_eq!(report(1, 20).unwrap(), report(1, 20).unwrap());
}

#[test]
fn fingerprint_is_stable_across_documents() {
    let reporter = Reporter::default();
    let a = reporter.document(Range::new(1, 50)).unwrap();
    let b = reporter.document(Range::new(1, 50)).unwrap();

    // generated_at is informational and not part of the fingerprint
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a.labels, b.labels);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn fingerprint_tracks_rendered_content() {
    let spaced = Reporter::default();
    let commas = Reporter::with_config(ReportConfig::v0().with_separator(","));
    let range = Range::new(1, 20);

    assert_ne!(
        spaced.document(range).unwrap().fingerprint,
        commas.document(range).unwrap().fingerprint
    );

    let zero_fill = Reporter::with_config(ReportConfig::v0().with_lookup(LookupPolicy::ZeroFill));
    assert_ne!(
        zero_fill.document(Range::new(1, 20)).unwrap().fingerprint,
        zero_fill.document(Range::new(1, 21)).unwrap().fingerprint
    );
}
