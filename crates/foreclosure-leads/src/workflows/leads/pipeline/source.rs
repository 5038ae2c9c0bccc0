use super::super::domain::RawDocketRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-case detail fetched after filtering: the raw docket table and, when the source has one, an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetail {
    pub docket: Vec<RawDocketRow>,
    pub address: Option<String>,
}

/// The source could not supply detail for one case. Recorded on the case, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("enrichment unavailable for case {case_number}: {reason}")]
pub struct EnrichmentUnavailable {
    pub case_number: String,
    pub reason: String,
}

impl EnrichmentUnavailable {
    pub fn new(case_number: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            reason: reason.into(),
        }
    }
}

/// Boundary to whatever fetches docket pages. Shared across enrichment workers.
pub trait DocumentSource: Send + Sync {
    fn fetch_detail(&self, case_number: &str) -> Result<CaseDetail, EnrichmentUnavailable>;
}

/// Dockets already held in memory, keyed by case number.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    details: HashMap<String, CaseDetail>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_docket(mut self, case_number: impl Into<String>, docket: Vec<RawDocketRow>) -> Self {
        self.insert_docket(case_number, docket);
        self
    }

    pub fn insert_docket(&mut self, case_number: impl Into<String>, docket: Vec<RawDocketRow>) {
        self.details
            .entry(case_number.into().trim().to_string())
            .or_default()
            .docket
            .extend(docket);
    }

    pub fn insert_address(&mut self, case_number: impl Into<String>, address: impl Into<String>) {
        self.details
            .entry(case_number.into().trim().to_string())
            .or_default()
            .address = Some(address.into());
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl DocumentSource for InMemorySource {
    fn fetch_detail(&self, case_number: &str) -> Result<CaseDetail, EnrichmentUnavailable> {
        self.details
            .get(case_number)
            .cloned()
            .ok_or_else(|| EnrichmentUnavailable::new(case_number, "no docket on file"))
    }
}
