use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{RawCase, RawDocketRow};
use super::pipeline::{
    CasePipeline, Clock, DocumentSource, FixedClock, InMemorySource, PipelineConfig,
    PipelineError, SystemClock,
};
use super::report::LeadDocument;

/// Inline scoring request: case listings plus dockets keyed by case number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub cases: Vec<RawCase>,
    #[serde(default)]
    pub dockets: BTreeMap<String, Vec<RawDocketRow>>,
    /// Pins the evaluation day; defaults to the service clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl ScoreRequest {
    fn source(&self) -> InMemorySource {
        self.dockets
            .iter()
            .fold(InMemorySource::new(), |source, (case_number, rows)| {
                source.with_docket(case_number.as_str(), rows.clone())
            })
    }
}

/// Runs the pipeline for callers that hand over data rather than a source.
pub struct LeadScoringService {
    pipeline: CasePipeline,
    clock: Arc<dyn Clock>,
}

impl LeadScoringService {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: PipelineConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            pipeline: CasePipeline::new(config),
            clock,
        }
    }

    pub fn pipeline(&self) -> &CasePipeline {
        &self.pipeline
    }

    pub fn score(&self, request: &ScoreRequest) -> Result<LeadDocument, PipelineError> {
        let source = request.source();
        match request.today {
            Some(today) => self.score_from(&request.cases, &source, &FixedClock::on(today)),
            None => self.score_from(&request.cases, &source, self.clock.as_ref()),
        }
    }

    pub fn score_from(
        &self,
        cases: &[RawCase],
        source: &dyn DocumentSource,
        clock: &dyn Clock,
    ) -> Result<LeadDocument, PipelineError> {
        self.pipeline
            .run(cases, source, clock)
            .map(LeadDocument::from)
    }
}

impl Default for LeadScoringService {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
