use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Case metadata exactly as the document source hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCase {
    pub case_number: String,
    pub commenced: String,
    #[serde(default)]
    pub plaintiff: String,
    #[serde(default)]
    pub defendant: String,
    #[serde(default)]
    pub has_judgement: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// One unparsed docket row (date text, description text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocketRow {
    pub date: String,
    pub description: String,
}

impl RawDocketRow {
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
        }
    }

    /// Rows whose date cannot be read are dropped rather than failing the case.
    pub fn to_entry(&self) -> Option<DocketEntry> {
        parse_court_date(&self.date).map(|date| DocketEntry {
            date,
            description: self.description.trim().to_string(),
        })
    }
}

/// A dated filing or event on a case docket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocketEntry {
    pub date: NaiveDate,
    pub description: String,
}

impl DocketEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

/// Parsed postal location for a case property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub in_target_county: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_municipality: Option<String>,
}

impl PropertyAddress {
    pub fn empty(default_state: &str) -> Self {
        Self {
            state: default_state.to_string(),
            ..Self::default()
        }
    }

    pub fn is_found(&self) -> bool {
        !self.street.is_empty()
    }

    /// Missing ZIP or city means the split heuristics were guessing.
    pub fn is_low_confidence(&self) -> bool {
        self.zip.is_empty() || self.city.is_empty()
    }
}

/// One court proceeding plus the fields the pipeline enriches it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub case_number: String,
    pub commenced_date: NaiveDate,
    pub plaintiff: String,
    pub defendant: String,
    pub has_judgement: bool,
    pub status: String,
    pub days_open: i64,
    #[serde(default)]
    pub address: Option<PropertyAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docket: Vec<DocketEntry>,
}

impl Case {
    pub fn from_raw(raw: &RawCase, today: NaiveDate) -> Result<Self, RecordDefect> {
        let case_number = raw.case_number.trim();
        if case_number.is_empty() {
            return Err(RecordDefect::MissingCaseNumber);
        }

        let commenced_date =
            parse_court_date(&raw.commenced).ok_or_else(|| RecordDefect::UnreadableCommenced {
                case_number: case_number.to_string(),
                value: raw.commenced.clone(),
            })?;

        Ok(Self {
            case_number: case_number.to_string(),
            commenced_date,
            plaintiff: raw.plaintiff.trim().to_string(),
            defendant: raw.defendant.trim().to_string(),
            has_judgement: raw.has_judgement,
            status: raw.status.trim().to_string(),
            days_open: (today - commenced_date).num_days(),
            address: None,
            docket: Vec::new(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.status.to_ascii_uppercase().contains("OPEN")
    }
}

/// Reason a raw record could not become a [`Case`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordDefect {
    #[error("record has no case number")]
    MissingCaseNumber,
    #[error("case {case_number} has unreadable commenced date '{value}'")]
    UnreadableCommenced { case_number: String, value: String },
}

/// Accepts the date shapes seen on court listings: `MM/DD/YYYY`, ISO dates and RFC 3339.
pub fn parse_court_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
