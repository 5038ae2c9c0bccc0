use super::super::scoring::LeadGrade;
use super::ScoredCase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "B")]
    pub b: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "D")]
    pub d: usize,
    #[serde(rename = "F")]
    pub f: usize,
}

impl GradeCounts {
    pub fn get(&self, grade: LeadGrade) -> usize {
        match grade {
            LeadGrade::A => self.a,
            LeadGrade::B => self.b,
            LeadGrade::C => self.c,
            LeadGrade::D => self.d,
            LeadGrade::F => self.f,
        }
    }

    fn record(&mut self, grade: LeadGrade) {
        match grade {
            LeadGrade::A => self.a += 1,
            LeadGrade::B => self.b += 1,
            LeadGrade::C => self.c += 1,
            LeadGrade::D => self.d += 1,
            LeadGrade::F => self.f += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d + self.f
    }
}

/// Why input records never reached enrichment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCounts {
    pub input_records: usize,
    pub invalid_records: usize,
    pub not_open: usize,
    pub judgment_entered: usize,
    pub outside_age_window: usize,
}

impl FilterCounts {
    pub fn removed(&self) -> usize {
        self.invalid_records + self.not_open + self.judgment_entered + self.outside_age_window
    }
}

/// Aggregates over the final scored collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStatistics {
    pub total_cases: usize,
    pub grades: GradeCounts,
    pub with_address: usize,
    pub in_target_county: usize,
    pub with_docket: usize,
    pub missing_docket: usize,
    pub average_score: Option<f64>,
    pub filtered: FilterCounts,
}

impl PipelineStatistics {
    pub fn from_cases(cases: &[ScoredCase], filtered: FilterCounts) -> Self {
        let mut stats = PipelineStatistics {
            total_cases: cases.len(),
            filtered,
            ..PipelineStatistics::default()
        };

        let mut score_sum: u64 = 0;
        for case in cases {
            stats.grades.record(case.lead_grade);
            score_sum += u64::from(case.lead_score);

            if let Some(address) = &case.case.address {
                if address.is_found() {
                    stats.with_address += 1;
                }
                if address.in_target_county {
                    stats.in_target_county += 1;
                }
            }

            if case.docket_summary.has_docket() {
                stats.with_docket += 1;
            }
            if case.enrichment.is_docket_unavailable() {
                stats.missing_docket += 1;
            }
        }

        if !cases.is_empty() {
            stats.average_score = Some(score_sum as f64 / cases.len() as f64);
        }

        stats
    }
}
