//! Foreclosure lead scoring: address parsing, docket analysis, scoring and ranking.

pub mod address;
pub mod docket;
pub mod domain;
pub mod pipeline;
pub mod report;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use address::{parse_address, AddressParser, Jurisdiction};
pub use docket::{
    analyze_docket, ConciliationStatus, DocketFlag, DocketSignal, DocketSignals, SignalTier,
};
pub use domain::{
    parse_court_date, Case, DocketEntry, PropertyAddress, RawCase, RawDocketRow, RecordDefect,
};
pub use pipeline::{
    run_pipeline, CaseDetail, CasePipeline, Clock, DocumentSource, EnrichmentStatus,
    EnrichmentUnavailable, FilterCounts, FixedClock, GradeCounts, InMemorySource, PipelineConfig,
    PipelineError, PipelineOutput, PipelineStatistics, ScoredCase, SystemClock,
};
pub use report::{write_csv, ExportError, LeadDocument, LeadExportRow};
pub use router::leads_router;
pub use scoring::{score_lead, FactorKind, LeadGrade, LeadScore, ScoreFactor};
pub use service::{LeadScoringService, ScoreRequest};
