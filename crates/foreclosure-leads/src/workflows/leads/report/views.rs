use super::super::pipeline::{PipelineStatistics, ScoredCase};
use super::super::scoring::LeadGrade;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankedLeadView {
    pub rank: usize,
    pub case_number: String,
    pub defendant: String,
    pub city: String,
    pub days_open: i64,
    pub score: u8,
    pub grade_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest_factor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeBreakdownEntry {
    pub grade: LeadGrade,
    pub grade_label: &'static str,
    pub count: usize,
}

/// The first `limit` cases in ranked order, as shown by the CLI.
pub fn ranked_leads(cases: &[ScoredCase], limit: usize) -> Vec<RankedLeadView> {
    cases
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, scored)| RankedLeadView {
            rank: idx + 1,
            case_number: scored.case.case_number.clone(),
            defendant: scored.case.defendant.clone(),
            city: scored
                .case
                .address
                .as_ref()
                .map(|address| address.city.clone())
                .unwrap_or_default(),
            days_open: scored.case.days_open,
            score: scored.lead_score,
            grade_label: scored.lead_grade.label(),
            strongest_factor: scored
                .score()
                .top_factors(1)
                .first()
                .map(|factor| format!("{} ({:+})", factor.description, factor.point_delta)),
        })
        .collect()
}

pub fn grade_breakdown(statistics: &PipelineStatistics) -> Vec<GradeBreakdownEntry> {
    LeadGrade::ALL
        .into_iter()
        .map(|grade| GradeBreakdownEntry {
            grade,
            grade_label: grade.label(),
            count: statistics.grades.get(grade),
        })
        .collect()
}
