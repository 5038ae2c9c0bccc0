use super::super::pipeline::ScoredCase;
use super::super::scoring::is_business_entity;
use serde::Serialize;
use std::io::Write;

const TOP_FACTOR_LIMIT: usize = 3;

/// Flat spreadsheet row; flags are rendered as Yes/No.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadExportRow {
    #[serde(rename = "Case Number")]
    pub case_number: String,
    #[serde(rename = "Commenced")]
    pub commenced: String,
    #[serde(rename = "Days Open")]
    pub days_open: i64,
    #[serde(rename = "Plaintiff")]
    pub plaintiff: String,
    #[serde(rename = "Defendant")]
    pub defendant: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
    #[serde(rename = "In Target County")]
    pub in_target_county: &'static str,
    #[serde(rename = "Lead Score")]
    pub lead_score: u8,
    #[serde(rename = "Lead Grade")]
    pub lead_grade: &'static str,
    #[serde(rename = "Docket Entries")]
    pub docket_entries: usize,
    #[serde(rename = "Days Since Activity")]
    pub days_since_activity: String,
    #[serde(rename = "Default Motion")]
    pub default_motion: &'static str,
    #[serde(rename = "Default Judgment")]
    pub default_judgment: &'static str,
    #[serde(rename = "Defendant Attorney")]
    pub defendant_attorney: &'static str,
    #[serde(rename = "Defendant Response")]
    pub defendant_response: &'static str,
    #[serde(rename = "Conciliation")]
    pub conciliation: &'static str,
    #[serde(rename = "Conciliation Status")]
    pub conciliation_status: &'static str,
    #[serde(rename = "Writ of Execution")]
    pub writ_of_execution: &'static str,
    #[serde(rename = "Bankruptcy")]
    pub bankruptcy: &'static str,
    #[serde(rename = "Stayed")]
    pub stayed: &'static str,
    #[serde(rename = "Continuances")]
    pub continuances: u32,
    #[serde(rename = "Failed Service")]
    pub failed_service: u32,
    #[serde(rename = "Business Entity")]
    pub business_entity: &'static str,
    #[serde(rename = "Docket Available")]
    pub docket_available: &'static str,
    #[serde(rename = "Top Factors")]
    pub top_factors: String,
}

const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl LeadExportRow {
    pub fn from_case(scored: &ScoredCase) -> Self {
        let case = &scored.case;
        let signals = &scored.docket_summary;
        let address = case.address.clone().unwrap_or_default();
        let top_factors = scored
            .score()
            .top_factors(TOP_FACTOR_LIMIT)
            .iter()
            .map(|factor| format!("{} ({:+})", factor.description, factor.point_delta))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            case_number: case.case_number.clone(),
            commenced: case.commenced_date.format("%m/%d/%Y").to_string(),
            days_open: case.days_open,
            plaintiff: case.plaintiff.clone(),
            defendant: case.defendant.clone(),
            street: address.street,
            city: address.city,
            state: address.state,
            zip: address.zip,
            in_target_county: yes_no(address.in_target_county),
            lead_score: scored.lead_score,
            lead_grade: scored.lead_grade.label(),
            docket_entries: signals.total_entries,
            days_since_activity: signals
                .days_since_last_activity
                .map(|days| days.to_string())
                .unwrap_or_default(),
            default_motion: yes_no(signals.has_default_motion),
            default_judgment: yes_no(signals.has_default_judgment),
            defendant_attorney: yes_no(signals.has_defendant_attorney),
            defendant_response: yes_no(signals.has_defendant_response),
            conciliation: yes_no(signals.has_conciliation),
            conciliation_status: signals.conciliation_status.label(),
            writ_of_execution: yes_no(signals.has_writ_of_execution),
            bankruptcy: yes_no(signals.has_bankruptcy),
            stayed: yes_no(signals.is_stayed),
            continuances: signals.continuance_count,
            failed_service: signals.failed_service_attempts,
            business_entity: yes_no(is_business_entity(&case.defendant)),
            docket_available: yes_no(!scored.enrichment.is_docket_unavailable()),
            top_factors,
        }
    }
}

/// One row per case, in the order given.
pub fn write_csv<W: Write>(writer: W, cases: &[ScoredCase]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for scored in cases {
        csv_writer.serialize(LeadExportRow::from_case(scored))?;
    }
    csv_writer.flush()?;
    Ok(())
}
