mod policy;
mod rules;

pub use policy::LeadGrade;

use super::docket::DocketSignals;
use super::domain::Case;
use policy::clamp_score;
use serde::{Deserialize, Serialize};

pub(crate) use rules::is_business_entity;

/// Which rule produced a factor; lets reports group contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    CaseAge,
    DocketActivity,
    Continuances,
    ActiveResistance,
    Capitulation,
    Settlement,
    StayLifted,
    SilenceAfterActivity,
    Recency,
    FalseHope,
    Bankruptcy,
    Address,
    BusinessEntity,
}

/// Discrete contribution to a lead score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactor {
    pub kind: FactorKind,
    pub description: String,
    pub point_delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScore {
    pub score: u8,
    pub grade: LeadGrade,
    pub factors: Vec<ScoreFactor>,
}

impl LeadScore {
    /// Sum of every factor before clamping.
    pub fn unclamped_total(&self) -> i32 {
        self.factors.iter().map(|factor| factor.point_delta).sum()
    }

    /// Factors ordered by absolute impact, largest first; ties keep evaluation order.
    pub fn top_factors(&self, limit: usize) -> Vec<&ScoreFactor> {
        let mut ranked: Vec<&ScoreFactor> = self
            .factors
            .iter()
            .filter(|factor| factor.point_delta != 0)
            .collect();
        ranked.sort_by_key(|factor| std::cmp::Reverse(factor.point_delta.abs()));
        ranked.truncate(limit);
        ranked
    }
}

/// Scores one case from zero upwards. Pure: the only date input is what `signals` already carries.
///
/// Keyword rules read `case.docket`, while count and recency rules read `signals`. Both must
/// describe the same entries: pass the docket that `analyze_docket` was given, or the
/// keyword-driven factors (resistance, capitulation, settlement, stay, bankruptcy) silently drop out.
pub fn score_lead(case: &Case, signals: &DocketSignals) -> LeadScore {
    let (factors, total) = rules::score_case(case, signals);
    let score = clamp_score(total);

    LeadScore {
        score,
        grade: LeadGrade::from_score(score),
        factors,
    }
}
