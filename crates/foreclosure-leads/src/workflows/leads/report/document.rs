use super::super::pipeline::{PipelineOutput, PipelineStatistics, ScoredCase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// The persisted form of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDocument {
    pub last_updated: DateTime<Utc>,
    pub total_cases: usize,
    pub statistics: PipelineStatistics,
    pub cases: Vec<ScoredCase>,
}

impl LeadDocument {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

impl From<PipelineOutput> for LeadDocument {
    fn from(output: PipelineOutput) -> Self {
        Self {
            last_updated: output.generated_at,
            total_cases: output.cases.len(),
            statistics: output.statistics,
            cases: output.cases,
        }
    }
}
