use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use super::common::*;
use crate::workflows::leads::{
    CasePipeline, Clock, EnrichmentStatus, FixedClock, InMemorySource, PipelineConfig,
    PipelineError, RawCase,
};

struct CountingClock {
    inner: FixedClock,
    reads: AtomicUsize,
}

impl Clock for CountingClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.now()
    }
}

fn clock() -> FixedClock {
    FixedClock::on(today())
}

#[test]
fn judged_closed_and_out_of_window_cases_are_filtered() {
    let judged = RawCase {
        has_judgement: true,
        ..raw_case("2025-CV-0001", 100)
    };
    let closed = RawCase {
        status: "CLOSED".to_string(),
        ..raw_case("2025-CV-0002", 100)
    };
    let too_young = raw_case("2025-CV-0003", 10);
    let too_old = raw_case("2025-CV-0004", 400);
    let kept = RawCase {
        status: "Open - Active".to_string(),
        ..raw_case("2025-CV-0005", 100)
    };

    let output = CasePipeline::default()
        .run(
            &[judged, closed, too_young, too_old, kept],
            &InMemorySource::new(),
            &clock(),
        )
        .expect("pipeline runs");

    let numbers: Vec<&str> = output
        .cases
        .iter()
        .map(|c| c.case.case_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["2025-CV-0005"]);

    let filtered = output.statistics.filtered;
    assert_eq!(filtered.input_records, 5);
    assert_eq!(filtered.judgment_entered, 1);
    assert_eq!(filtered.not_open, 1);
    assert_eq!(filtered.outside_age_window, 2);
    assert_eq!(filtered.removed(), 4);
}

#[test]
fn judged_case_is_excluded_even_with_a_strong_docket() {
    let judged = RawCase {
        has_judgement: true,
        ..raw_case_at("2025-CV-0009", 200, "25 ASPEN WAYSCHWENKSVILLE, PA 19473")
    };
    let source = source_with(vec![(
        "2025-CV-0009",
        vec![(150, "PETITION TO WITHDRAW AS COUNSEL"), (120, "MATTER SETTLED")],
    )]);

    let output = CasePipeline::default()
        .run(&[judged], &source, &clock())
        .expect("pipeline runs");
    assert!(output.cases.is_empty());
}

#[test]
fn unavailable_docket_is_recorded_not_raised() {
    let cases = vec![
        raw_case_at("2025-CV-0010", 200, "25 ASPEN WAYSCHWENKSVILLE, PA 19473"),
        raw_case_at("2025-CV-0011", 150, "14 FARM LN, HATFIELD, PA 19440"),
    ];
    let source = source_with(vec![("2025-CV-0010", vec![(100, "MATTER SETTLED")])]);

    let output = CasePipeline::default()
        .run(&cases, &source, &clock())
        .expect("pipeline runs");

    let missing = output
        .cases
        .iter()
        .find(|c| c.case.case_number == "2025-CV-0011")
        .expect("case kept");
    assert!(matches!(
        missing.enrichment,
        EnrichmentStatus::DocketUnavailable { .. }
    ));
    assert_eq!(missing.docket_summary.total_entries, 0);
    // 120-179 day band plus a parsed address
    assert_eq!(missing.lead_score, 8);

    let stats = &output.statistics;
    assert_eq!(stats.total_cases, 2);
    assert_eq!(stats.with_docket, 1);
    assert_eq!(stats.missing_docket, 1);
    assert_eq!(stats.with_address, 2);
    assert_eq!(stats.in_target_county, 2);
    assert_eq!(stats.grades.total(), 2);
}

#[test]
fn output_is_ranked_by_score() {
    let cases = vec![
        raw_case("2025-CV-0020", 60),
        raw_case("2025-CV-0021", 250),
        raw_case("2025-CV-0022", 130),
    ];
    let source = source_with(vec![
        ("2025-CV-0020", vec![(50, "COMPLAINT")]),
        ("2025-CV-0021", vec![(200, "COMPLAINT"), (100, "MATTER SETTLED")]),
        ("2025-CV-0022", vec![(120, "COMPLAINT")]),
    ]);

    let output = CasePipeline::default()
        .run(&cases, &source, &clock())
        .expect("pipeline runs");
    let scores: Vec<u8> = output.cases.iter().map(|c| c.lead_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert_eq!(output.cases[0].case.case_number, "2025-CV-0021");
}

#[test]
fn clock_is_read_once_per_run() {
    let counting = CountingClock {
        inner: clock(),
        reads: AtomicUsize::new(0),
    };
    let cases: Vec<RawCase> = (0..12)
        .map(|n| raw_case(&format!("2025-CV-1{n:03}"), 60 + n * 10))
        .collect();

    let output = CasePipeline::default()
        .run(&cases, &InMemorySource::new(), &counting)
        .expect("pipeline runs");
    assert_eq!(output.cases.len(), 12);
    assert_eq!(counting.reads.load(Ordering::SeqCst), 1);
    assert_eq!(output.generated_at, clock().now());
}

#[test]
fn wholly_unreadable_input_fails_the_run() {
    let broken = vec![
        RawCase {
            commenced: "someday".to_string(),
            ..raw_case("2025-CV-0030", 100)
        },
        RawCase {
            case_number: "   ".to_string(),
            ..raw_case("2025-CV-0031", 100)
        },
    ];
    let error = CasePipeline::default()
        .run(&broken, &InMemorySource::new(), &clock())
        .expect_err("run fails");
    match error {
        PipelineError::MalformedInput { records, .. } => assert_eq!(records, 2),
    }
}

#[test]
fn partially_unreadable_input_is_counted() {
    let cases = vec![
        RawCase {
            commenced: "someday".to_string(),
            ..raw_case("2025-CV-0040", 100)
        },
        raw_case("2025-CV-0041", 100),
    ];
    let output = CasePipeline::default()
        .run(&cases, &InMemorySource::new(), &clock())
        .expect("pipeline runs");
    assert_eq!(output.cases.len(), 1);
    assert_eq!(output.statistics.filtered.invalid_records, 1);
}

#[test]
fn empty_input_is_an_empty_run() {
    let output = CasePipeline::default()
        .run(&[], &InMemorySource::new(), &clock())
        .expect("pipeline runs");
    assert!(output.cases.is_empty());
    assert_eq!(output.statistics.average_score, None);
}

#[test]
fn custom_window_widens_the_filter() {
    let config = PipelineConfig {
        min_days_old: 0,
        max_days_old: 1000,
        ..PipelineConfig::default()
    };
    let output = CasePipeline::new(config)
        .run(
            &[raw_case("2025-CV-0050", 10), raw_case("2025-CV-0051", 900)],
            &InMemorySource::new(),
            &clock(),
        )
        .expect("pipeline runs");
    assert_eq!(output.cases.len(), 2);
}
