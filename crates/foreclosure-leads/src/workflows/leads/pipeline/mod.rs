//! Filters raw cases, enriches the survivors and ranks them by lead score.

mod clock;
mod source;
mod stats;

pub use clock::{Clock, FixedClock, SystemClock};
pub use source::{CaseDetail, DocumentSource, EnrichmentUnavailable, InMemorySource};
pub use stats::{FilterCounts, GradeCounts, PipelineStatistics};

use super::address::{AddressParser, Jurisdiction};
use super::docket::{analyze_docket, sort_recent_first, DocketSignals};
use super::domain::{Case, DocketEntry, RawCase, RecordDefect};
use super::scoring::{score_lead, LeadGrade, LeadScore, ScoreFactor};
use chrono::{DateTime, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Filter window and ordering knobs for one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub min_days_old: i64,
    pub max_days_old: i64,
    /// Cases inside this band are enriched first.
    pub ideal_min_days: i64,
    pub ideal_max_days: i64,
    pub jurisdiction: Jurisdiction,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_days_old: 45,
            max_days_old: 270,
            ideal_min_days: 60,
            ideal_max_days: 180,
            jurisdiction: Jurisdiction::montgomery_county_pa(),
        }
    }
}

impl PipelineConfig {
    fn within_window(&self, days_open: i64) -> bool {
        (self.min_days_old..=self.max_days_old).contains(&days_open)
    }

    fn is_ideal_age(&self, days_open: i64) -> bool {
        (self.ideal_min_days..=self.ideal_max_days).contains(&days_open)
    }
}

/// Whether the document source supplied a docket for this case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EnrichmentStatus {
    Complete,
    DocketUnavailable { reason: String },
}

impl EnrichmentStatus {
    pub fn is_docket_unavailable(&self) -> bool {
        matches!(self, EnrichmentStatus::DocketUnavailable { .. })
    }
}

/// A case as persisted: metadata, parsed address, docket summary and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCase {
    #[serde(flatten)]
    pub case: Case,
    pub docket_summary: DocketSignals,
    pub lead_score: u8,
    pub lead_grade: LeadGrade,
    pub score_factors: Vec<ScoreFactor>,
    pub enrichment: EnrichmentStatus,
}

impl ScoredCase {
    pub fn new(
        case: Case,
        docket_summary: DocketSignals,
        score: LeadScore,
        enrichment: EnrichmentStatus,
    ) -> Self {
        Self {
            case,
            docket_summary,
            lead_score: score.score,
            lead_grade: score.grade,
            score_factors: score.factors,
            enrichment,
        }
    }

    pub fn score(&self) -> LeadScore {
        LeadScore {
            score: self.lead_score,
            grade: self.lead_grade,
            factors: self.score_factors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub generated_at: DateTime<Utc>,
    pub cases: Vec<ScoredCase>,
    pub statistics: PipelineStatistics,
}

/// Whole-run failure; per-case problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("none of the {records} input record(s) is usable: {first_defect}")]
    MalformedInput {
        records: usize,
        first_defect: RecordDefect,
    },
}

pub struct CasePipeline {
    config: PipelineConfig,
    parser: AddressParser,
}

impl CasePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let parser = AddressParser::new(config.jurisdiction.clone());
        Self { config, parser }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(
        &self,
        raw_cases: &[RawCase],
        source: &dyn DocumentSource,
        clock: &dyn Clock,
    ) -> Result<PipelineOutput, PipelineError> {
        let generated_at = clock.now();
        let today = generated_at.date_naive();
        info!(records = raw_cases.len(), %today, "starting lead pipeline run");

        let (candidates, filtered) = self.filter(raw_cases, today)?;
        debug!(
            kept = candidates.len(),
            not_open = filtered.not_open,
            judgment_entered = filtered.judgment_entered,
            outside_age_window = filtered.outside_age_window,
            invalid = filtered.invalid_records,
            "filtered input records"
        );

        let mut cases: Vec<ScoredCase> = candidates
            .into_par_iter()
            .map(|(case, raw_address)| self.enrich(case, raw_address, source, today))
            .collect();
        cases.sort_by(|a, b| b.lead_score.cmp(&a.lead_score));

        let statistics = PipelineStatistics::from_cases(&cases, filtered);
        info!(
            scored = statistics.total_cases,
            missing_docket = statistics.missing_docket,
            grade_a = statistics.grades.a,
            "lead pipeline run complete"
        );

        Ok(PipelineOutput {
            generated_at,
            cases,
            statistics,
        })
    }

    /// Drops closed, judged and out-of-window cases, then puts ideal-age cases first.
    fn filter(
        &self,
        raw_cases: &[RawCase],
        today: NaiveDate,
    ) -> Result<(Vec<(Case, Option<String>)>, FilterCounts), PipelineError> {
        let mut counts = FilterCounts {
            input_records: raw_cases.len(),
            ..FilterCounts::default()
        };
        let mut first_defect = None;
        let mut kept = Vec::new();

        for raw in raw_cases {
            let case = match Case::from_raw(raw, today) {
                Ok(case) => case,
                Err(defect) => {
                    warn!(error = %defect, "skipping unreadable case record");
                    counts.invalid_records += 1;
                    first_defect.get_or_insert(defect);
                    continue;
                }
            };

            if !case.is_open() {
                counts.not_open += 1;
            } else if case.has_judgement {
                counts.judgment_entered += 1;
            } else if !self.config.within_window(case.days_open) {
                counts.outside_age_window += 1;
            } else {
                kept.push((case, raw.address.clone()));
            }
        }

        if let Some(first_defect) = first_defect {
            if counts.invalid_records == raw_cases.len() {
                return Err(PipelineError::MalformedInput {
                    records: raw_cases.len(),
                    first_defect,
                });
            }
        }

        kept.sort_by(|(a, _), (b, _)| {
            self.config
                .is_ideal_age(b.days_open)
                .cmp(&self.config.is_ideal_age(a.days_open))
                .then_with(|| b.days_open.cmp(&a.days_open))
                .then_with(|| a.case_number.cmp(&b.case_number))
        });

        Ok((kept, counts))
    }

    fn enrich(
        &self,
        mut case: Case,
        raw_address: Option<String>,
        source: &dyn DocumentSource,
        today: NaiveDate,
    ) -> ScoredCase {
        let (rows, address_text, enrichment) = match source.fetch_detail(&case.case_number) {
            Ok(detail) => (
                detail.docket,
                detail.address.or(raw_address),
                EnrichmentStatus::Complete,
            ),
            Err(unavailable) => {
                warn!(
                    case_number = %case.case_number,
                    reason = %unavailable.reason,
                    "docket unavailable, scoring from case and address only"
                );
                (
                    Vec::new(),
                    raw_address,
                    EnrichmentStatus::DocketUnavailable {
                        reason: unavailable.reason,
                    },
                )
            }
        };

        let entries: Vec<DocketEntry> = rows.iter().filter_map(|row| row.to_entry()).collect();
        if entries.len() < rows.len() {
            debug!(
                case_number = %case.case_number,
                dropped = rows.len() - entries.len(),
                "dropped docket rows with unreadable dates"
            );
        }

        case.address = address_text.map(|text| self.parser.parse(&text));
        case.docket = sort_recent_first(&entries);

        let signals = analyze_docket(&case.docket, today);
        let score = score_lead(&case, &signals);
        debug!(
            case_number = %case.case_number,
            score = score.score,
            grade = score.grade.label(),
            "scored case"
        );

        ScoredCase::new(case, signals, score, enrichment)
    }
}

impl Default for CasePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// One-shot convenience over [`CasePipeline::run`].
pub fn run_pipeline(
    raw_cases: &[RawCase],
    source: &dyn DocumentSource,
    clock: &dyn Clock,
    config: PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    CasePipeline::new(config).run(raw_cases, source, clock)
}
