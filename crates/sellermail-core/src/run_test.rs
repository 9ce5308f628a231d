use chrono::Utc;

use super::*;
use crate::brand::{BrandInput, SellerInfo};

fn success(name: &str, email: &str) -> BrandOutcome {
    BrandOutcome::Success(SuccessRecord {
        brand: BrandInput::named(name),
        product_url: format!("https://example.com/products/{name}"),
        seller_info: SellerInfo {
            email: Some(email.to_owned()),
            company: Some("Brandcorp".to_owned()),
            ..SellerInfo::default()
        },
        collected_at: Utc::now(),
        elapsed_ms: 10,
    })
}

fn failure(name: &str, message: &str) -> BrandOutcome {
    BrandOutcome::Failure(FailureRecord {
        brand: BrandInput::named(name),
        error_message: message.to_owned(),
        collected_at: Utc::now(),
        elapsed_ms: 5,
    })
}

#[test]
fn record_preserves_insertion_order_per_set() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));
    acc.record(failure("b", "no product found"));
    acc.record(success("c", "c@x.kr"));

    let names: Vec<&str> = acc
        .results()
        .iter()
        .map(|r| r.brand.primary_name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "c"]);
    assert_eq!(acc.failed()[0].brand.primary_name, "b");
}

#[test]
fn counts_always_sum_to_processed() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));
    acc.record(failure("b", "no product found"));
    acc.record(failure("c", "no email found"));

    assert_eq!(acc.processed_count(), 3);
    assert_eq!(acc.success_count() + acc.failed_count(), acc.processed_count());
}

#[test]
fn success_rate_empty_run() {
    assert_eq!(RunAccumulator::new().success_rate(), "0%");
}

#[test]
fn success_rate_one_decimal() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));
    acc.record(success("b", "b@x.kr"));
    acc.record(failure("c", "no product found"));
    assert_eq!(acc.success_rate(), "66.7%");
}

#[test]
fn snapshot_counts_match_accumulator_state() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));
    acc.record(failure("b", "no product found"));

    let snap = acc.snapshot();
    assert_eq!(snap.processed_count, 2);
    assert_eq!(snap.success_count, 1);
    assert_eq!(snap.failed_count, 1);
    assert_eq!(snap.results.len(), 1);
    assert_eq!(snap.failed.len(), 1);

    // The snapshot is a detached view: further appends don't affect it.
    acc.record(success("c", "c@x.kr"));
    assert_eq!(snap.processed_count, 2);
}

#[test]
fn summary_emails_projection() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));
    acc.record(failure("b", "no product found"));

    let summary = acc.summary();
    assert_eq!(summary.total_processed, 2);
    assert_eq!(summary.success_rate, "50.0%");
    assert_eq!(summary.emails.len(), 1);
    assert_eq!(summary.emails[0].primary_name, "a");
    assert_eq!(summary.emails[0].email, "a@x.kr");
    assert_eq!(summary.emails[0].company.as_deref(), Some("Brandcorp"));
}

#[test]
fn snapshot_serializes_camel_case() {
    let mut acc = RunAccumulator::new();
    acc.record(success("a", "a@x.kr"));

    let value = serde_json::to_value(acc.snapshot()).unwrap();
    assert!(value.get("processedCount").is_some());
    assert!(value.get("successCount").is_some());
    assert!(value.get("failedCount").is_some());
    assert!(value.get("results").is_some());
    assert!(value.get("failed").is_some());
}
