use super::normalizer::{html_line_breaks, normalize_case_number, normalize_header, parse_flag};
use crate::workflows::leads::{RawCase, RawDocketRow};
use serde::{Deserialize, Deserializer};
use std::io::Read;

fn reader_with_normalized_headers<R: Read>(reader: R) -> Result<csv::Reader<R>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    csv_reader.set_headers(headers);
    Ok(csv_reader)
}

pub(crate) fn parse_cases<R: Read>(reader: R) -> Result<Vec<RawCase>, csv::Error> {
    let mut csv_reader = reader_with_normalized_headers(reader)?;
    let mut cases = Vec::new();

    for record in csv_reader.deserialize::<CaseRow>() {
        cases.push(record?.into_raw_case());
    }

    Ok(cases)
}

/// Returns `(case number, row)` pairs; rows without a case number are skipped.
pub(crate) fn parse_docket_rows<R: Read>(
    reader: R,
) -> Result<Vec<(String, RawDocketRow)>, csv::Error> {
    let mut csv_reader = reader_with_normalized_headers(reader)?;
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<DocketRow>() {
        let row = record?;
        let case_number = normalize_case_number(&row.case_number);
        if case_number.is_empty() {
            continue;
        }
        rows.push((
            case_number,
            RawDocketRow::new(
                row.date.unwrap_or_default(),
                row.description.unwrap_or_default(),
            ),
        ));
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CaseRow {
    #[serde(rename = "case number", default)]
    case_number: String,
    #[serde(rename = "commenced", default)]
    commenced: String,
    #[serde(rename = "plaintiff", default, deserialize_with = "empty_string_as_none")]
    plaintiff: Option<String>,
    #[serde(rename = "defendant", default, deserialize_with = "empty_string_as_none")]
    defendant: Option<String>,
    #[serde(rename = "judgment", default, deserialize_with = "empty_string_as_none")]
    judgment: Option<String>,
    #[serde(rename = "status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
}

impl CaseRow {
    fn into_raw_case(self) -> RawCase {
        RawCase {
            case_number: normalize_case_number(&self.case_number),
            commenced: self.commenced,
            plaintiff: self.plaintiff.unwrap_or_default(),
            defendant: self.defendant.unwrap_or_default(),
            has_judgement: parse_flag(self.judgment.as_deref()),
            status: self.status.unwrap_or_default(),
            address: self.address.as_deref().map(html_line_breaks),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DocketRow {
    #[serde(rename = "case number", default)]
    case_number: String,
    #[serde(rename = "date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
    #[serde(rename = "description", default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
