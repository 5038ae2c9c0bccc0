use chrono::{Duration, NaiveDate};

use crate::workflows::leads::{
    analyze_docket, Case, DocketEntry, DocketSignals, InMemorySource, PropertyAddress, RawCase,
    RawDocketRow,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub(super) fn entry(days_before_today: i64, description: &str) -> DocketEntry {
    DocketEntry::new(days_ago(days_before_today), description)
}

pub(super) fn raw_case(case_number: &str, days_open: i64) -> RawCase {
    RawCase {
        case_number: case_number.to_string(),
        commenced: days_ago(days_open).format("%m/%d/%Y").to_string(),
        plaintiff: "FIRST NATIONAL MORTGAGE".to_string(),
        defendant: "JANE SMITH".to_string(),
        has_judgement: false,
        status: "OPEN".to_string(),
        address: None,
    }
}

pub(super) fn raw_case_at(case_number: &str, days_open: i64, address: &str) -> RawCase {
    RawCase {
        address: Some(address.to_string()),
        ..raw_case(case_number, days_open)
    }
}

pub(super) fn docket_rows(entries: &[(i64, &str)]) -> Vec<RawDocketRow> {
    entries
        .iter()
        .map(|(days, description)| {
            RawDocketRow::new(days_ago(*days).format("%m/%d/%Y").to_string(), *description)
        })
        .collect()
}

pub(super) fn source_with(dockets: Vec<(&str, Vec<(i64, &str)>)>) -> InMemorySource {
    dockets
        .into_iter()
        .fold(InMemorySource::new(), |source, (case_number, entries)| {
            source.with_docket(case_number, docket_rows(&entries))
        })
}

/// A case as the pipeline would hand it to the scorer, plus its signals.
pub(super) fn enriched_case(
    days_open: i64,
    defendant: &str,
    address: Option<PropertyAddress>,
    docket: Vec<DocketEntry>,
) -> (Case, DocketSignals) {
    let mut case = Case::from_raw(&raw_case("2025-CV-0001", days_open), today())
        .expect("fixture case builds");
    case.defendant = defendant.to_string();
    case.address = address;
    case.docket = docket;
    let signals = analyze_docket(&case.docket, today());
    (case, signals)
}

pub(super) fn parsed_address() -> PropertyAddress {
    PropertyAddress {
        street: "25 ASPEN WAY".to_string(),
        city: "SCHWENKSVILLE".to_string(),
        state: "PA".to_string(),
        zip: "19473".to_string(),
        in_target_county: true,
        county_municipality: Some("SCHWENKSVILLE".to_string()),
    }
}
