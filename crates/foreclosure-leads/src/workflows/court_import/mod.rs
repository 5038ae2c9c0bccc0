//! CSV-backed document source for court case listings and docket exports.

mod normalizer;
mod parser;

use crate::workflows::leads::{
    CaseDetail, DocumentSource, EnrichmentUnavailable, RawCase, RawDocketRow,
};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum CourtImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CourtImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourtImportError::Io(err) => write!(f, "failed to read court export: {}", err),
            CourtImportError::Csv(err) => write!(f, "invalid court CSV data: {}", err),
        }
    }
}

impl std::error::Error for CourtImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourtImportError::Io(err) => Some(err),
            CourtImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CourtImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CourtImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Case listing plus docket rows loaded from CSV exports.
#[derive(Debug, Clone, Default)]
pub struct CourtCsvSource {
    cases: Vec<RawCase>,
    dockets: HashMap<String, Vec<RawDocketRow>>,
}

impl CourtCsvSource {
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        cases_path: P,
        dockets_path: Option<Q>,
    ) -> Result<Self, CourtImportError> {
        let source = Self::from_reader(std::fs::File::open(cases_path)?)?;
        match dockets_path {
            Some(path) => source.with_dockets(std::fs::File::open(path)?),
            None => Ok(source),
        }
    }

    /// Loads the case listing only; every case will report its docket as unavailable.
    pub fn from_reader<R: Read>(cases: R) -> Result<Self, CourtImportError> {
        let cases = parser::parse_cases(cases)?;
        debug!(cases = cases.len(), "loaded court case listing");
        Ok(Self {
            cases,
            dockets: HashMap::new(),
        })
    }

    pub fn with_dockets<R: Read>(mut self, dockets: R) -> Result<Self, CourtImportError> {
        let rows = parser::parse_docket_rows(dockets)?;
        debug!(rows = rows.len(), "loaded court docket rows");
        for (case_number, row) in rows {
            self.dockets.entry(case_number).or_default().push(row);
        }
        Ok(self)
    }

    pub fn cases(&self) -> &[RawCase] {
        &self.cases
    }

    pub fn docket_rows(&self, case_number: &str) -> &[RawDocketRow] {
        self.dockets
            .get(case_number)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl DocumentSource for CourtCsvSource {
    fn fetch_detail(&self, case_number: &str) -> Result<CaseDetail, EnrichmentUnavailable> {
        let docket = self.docket_rows(case_number);
        if docket.is_empty() {
            return Err(EnrichmentUnavailable::new(
                case_number,
                "no docket rows in import",
            ));
        }

        Ok(CaseDetail {
            docket: docket.to_vec(),
            address: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CASES: &str = "\u{feff}Case Number,Commenced,Plaintiff,Defendant,Judgment,Status,Address\n\
2025-CV-0101,01/15/2025,FIRST NATIONAL MORTGAGE,JANE SMITH,No,OPEN,\"25 ASPEN WAY<br>SCHWENKSVILLE, PA 19473\"\n\
2025-CV-0102,02/01/2025,HOME LOANS INC,ACME HOLDINGS LLC,Yes,OPEN,\n";

    const DOCKETS: &str = "case  number, date ,Description\n\
2025-CV-0101,01/15/2025,COMPLAINT IN MORTGAGE FORECLOSURE\n\
2025-CV-0101,03/02/2025,CONTINUANCE GRANTED\n\
,03/05/2025,ORPHAN ROW\n";

    #[test]
    fn header_normalization_strips_bom_and_spacing() {
        assert_eq!(
            normalizer::normalize_header_for_tests("\u{feff}Case   Number "),
            "case number"
        );
    }

    #[test]
    fn loads_cases_and_dockets() {
        let source = CourtCsvSource::from_reader(Cursor::new(CASES))
            .and_then(|source| source.with_dockets(Cursor::new(DOCKETS)))
            .expect("import succeeds");

        assert_eq!(source.cases().len(), 2);
        let first = &source.cases()[0];
        assert_eq!(first.case_number, "2025-CV-0101");
        assert!(!first.has_judgement);
        assert_eq!(
            first.address.as_deref(),
            Some("25 ASPEN WAY\nSCHWENKSVILLE, PA 19473")
        );
        assert!(source.cases()[1].has_judgement);
        assert!(source.cases()[1].address.is_none());

        let detail = source.fetch_detail("2025-CV-0101").expect("docket present");
        assert_eq!(detail.docket.len(), 2);
    }

    #[test]
    fn case_without_docket_rows_is_unavailable() {
        let source = CourtCsvSource::from_reader(Cursor::new(CASES)).expect("import succeeds");
        let err = source.fetch_detail("2025-CV-0102").unwrap_err();
        assert_eq!(err.case_number, "2025-CV-0102");
    }

    #[test]
    fn from_paths_propagates_io_errors() {
        let error = CourtCsvSource::from_paths("./does-not-exist.csv", None::<&str>)
            .expect_err("expected io error");
        match error {
            CourtImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
