//! Unit tests for the sweep report

use conformance_harness::{SweepReport, SweepResult};

#[test]
fn test_new_report_is_empty() {
    let report = SweepReport::new();
    assert_eq!(report.total, 0);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 0);
    assert!(report.failures.is_empty());
    assert!(report.is_success());
}

#[test]
fn test_add_pass_result() {
    let mut report = SweepReport::new();
    report.add_result("en", SweepResult::Pass);

    assert_eq!(report.total, 1);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 0);
    assert!(report.is_success());
}

#[test]
fn test_add_fail_result() {
    let mut report = SweepReport::new();
    report.add_result("en", SweepResult::Pass);
    report.add_result("xy", SweepResult::Fail("bad token".to_string()));

    assert_eq!(report.total, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());
    assert_eq!(report.failures[0], ("xy".to_string(), "bad token".to_string()));
}

#[test]
fn test_pass_rate() {
    let mut report = SweepReport::new();
    assert_eq!(report.pass_rate(), 0.0);

    report.add_result("aa", SweepResult::Pass);
    report.add_result("ab", SweepResult::Pass);
    report.add_result("ac", SweepResult::Fail("reason".to_string()));

    assert!((report.pass_rate() - 66.7).abs() < 0.1);
}

#[test]
fn test_summary_contains_counts() {
    let mut report = SweepReport::new();
    report.add_result("aa", SweepResult::Pass);

    let summary = report.summary();
    assert!(summary.contains("Total: 1"));
    assert!(summary.contains("Passed: 1"));
    assert!(summary.contains("Failed: 0"));
}

#[test]
fn test_detailed_summary_includes_failures() {
    let mut report = SweepReport::new();
    report.add_result("xy", SweepResult::Fail("token out of shape".to_string()));

    let detailed = report.detailed_summary();
    assert!(detailed.contains("Failures:"));
    assert!(detailed.contains("xy"));
    assert!(detailed.contains("token out of shape"));
}

#[test]
fn test_detailed_summary_without_failures() {
    let mut report = SweepReport::new();
    report.add_result("aa", SweepResult::Pass);

    assert!(!report.detailed_summary().contains("Failures:"));
}

#[test]
fn test_json_round_trip() {
    let mut report = SweepReport::new();
    report.add_result("aa", SweepResult::Pass);
    report.add_result("xy", SweepResult::Fail("reason".to_string()));

    let json = report.to_json().unwrap();
    let parsed = SweepReport::from_json(&json).unwrap();

    assert_eq!(parsed.total, report.total);
    assert_eq!(parsed.passed, report.passed);
    assert_eq!(parsed.failed, report.failed);
    assert_eq!(parsed.failures, report.failures);
}

#[test]
fn test_default_equals_new() {
    let report = SweepReport::default();
    assert_eq!(report.total, 0);
}
