//! Derives litigation posture from a case's docket entries.

mod keywords;

use super::domain::DocketEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub(crate) use keywords::mentions_any;

const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Keyword tier a docket signal was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalTier {
    High,
    Medium,
    Positive,
}

impl SignalTier {
    pub const fn label(self) -> &'static str {
        match self {
            SignalTier::High => "high",
            SignalTier::Medium => "medium",
            SignalTier::Positive => "positive",
        }
    }
}

/// Boolean facts the analyzer can raise; each raise is backed by a [`DocketSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocketFlag {
    DefaultJudgment,
    DefaultMotion,
    WritOfExecution,
    Conciliation,
    Bankruptcy,
    Stayed,
    DefendantAttorney,
    DefendantResponse,
}

impl DocketFlag {
    pub const ALL: [DocketFlag; 8] = [
        DocketFlag::DefaultJudgment,
        DocketFlag::DefaultMotion,
        DocketFlag::WritOfExecution,
        DocketFlag::Conciliation,
        DocketFlag::Bankruptcy,
        DocketFlag::Stayed,
        DocketFlag::DefendantAttorney,
        DocketFlag::DefendantResponse,
    ];

    pub fn is_set(self, signals: &DocketSignals) -> bool {
        match self {
            DocketFlag::DefaultJudgment => signals.has_default_judgment,
            DocketFlag::DefaultMotion => signals.has_default_motion,
            DocketFlag::WritOfExecution => signals.has_writ_of_execution,
            DocketFlag::Conciliation => signals.has_conciliation,
            DocketFlag::Bankruptcy => signals.has_bankruptcy,
            DocketFlag::Stayed => signals.is_stayed,
            DocketFlag::DefendantAttorney => signals.has_defendant_attorney,
            DocketFlag::DefendantResponse => signals.has_defendant_response,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConciliationStatus {
    #[default]
    None,
    Scheduled,
    Failed,
    Completed,
}

impl ConciliationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ConciliationStatus::None => "None",
            ConciliationStatus::Scheduled => "Scheduled",
            ConciliationStatus::Failed => "Failed",
            ConciliationStatus::Completed => "Completed",
        }
    }
}

/// Audit record explaining why a signal or flag was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocketSignal {
    pub keyword: String,
    pub tier: SignalTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<DocketFlag>,
    pub date: NaiveDate,
    pub description: String,
}

/// Summary of a docket; `Default` is the zero value used when no entries exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocketSignals {
    pub total_entries: usize,
    pub last_activity_date: Option<NaiveDate>,
    pub days_since_last_activity: Option<i64>,
    pub has_default_motion: bool,
    pub has_default_judgment: bool,
    pub has_defendant_attorney: bool,
    pub has_defendant_response: bool,
    pub has_conciliation: bool,
    pub has_writ_of_execution: bool,
    pub has_bankruptcy: bool,
    pub is_stayed: bool,
    pub conciliation_status: ConciliationStatus,
    pub continuance_count: u32,
    pub service_attempts: u32,
    pub failed_service_attempts: u32,
    pub distress_signals: Vec<DocketSignal>,
    pub positive_signals: Vec<DocketSignal>,
    pub recent_activity: Vec<DocketEntry>,
}

impl DocketSignals {
    pub fn has_docket(&self) -> bool {
        self.total_entries > 0
    }

    /// Signals recorded as evidence for `flag`.
    pub fn evidence_for(&self, flag: DocketFlag) -> impl Iterator<Item = &DocketSignal> {
        self.distress_signals
            .iter()
            .chain(self.positive_signals.iter())
            .filter(move |signal| signal.flag == Some(flag))
    }
}

/// Most recent first; same-day entries fall back to description order so input order never matters.
pub fn sort_recent_first(entries: &[DocketEntry]) -> Vec<DocketEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.description.cmp(&b.description))
    });
    sorted
}

/// Classifies every entry against the keyword tiers. `today` anchors the recency figures.
pub fn analyze_docket(entries: &[DocketEntry], today: NaiveDate) -> DocketSignals {
    if entries.is_empty() {
        return DocketSignals::default();
    }

    let sorted = sort_recent_first(entries);
    let last_activity = sorted[0].date;
    let mut signals = DocketSignals {
        total_entries: sorted.len(),
        last_activity_date: Some(last_activity),
        days_since_last_activity: Some((today - last_activity).num_days().max(0)),
        recent_activity: sorted.iter().take(RECENT_ACTIVITY_LIMIT).cloned().collect(),
        ..DocketSignals::default()
    };

    for entry in &sorted {
        let description = entry.description.to_lowercase();
        classify_entry(entry, &description, &mut signals);

        if keywords::is_continuance(&description) {
            signals.continuance_count += 1;
        }

        let (attempted, failed) = keywords::service_outcome(&description);
        if attempted {
            signals.service_attempts += 1;
        }
        if failed {
            signals.failed_service_attempts += 1;
        }
    }

    if signals.has_conciliation && signals.conciliation_status == ConciliationStatus::None {
        signals.conciliation_status = ConciliationStatus::Scheduled;
    }

    signals
}

fn classify_entry(entry: &DocketEntry, description: &str, signals: &mut DocketSignals) {
    for tier in keywords::KEYWORD_TIERS {
        for rule in tier.rules {
            if !description.contains(rule.keyword) {
                continue;
            }

            let signal = DocketSignal {
                keyword: rule.keyword.to_string(),
                tier: tier.tier,
                flag: rule.flag,
                date: entry.date,
                description: entry.description.clone(),
            };
            match tier.tier {
                SignalTier::High | SignalTier::Medium => signals.distress_signals.push(signal),
                SignalTier::Positive => signals.positive_signals.push(signal),
            }

            if let Some(flag) = rule.flag {
                flag.raise(signals);
                if flag == DocketFlag::Conciliation
                    && signals.conciliation_status == ConciliationStatus::None
                {
                    // Entries arrive newest first, so the first qualified status is the current one.
                    if let Some(status) = keywords::conciliation_status(description) {
                        signals.conciliation_status = status;
                    }
                }
            }
        }
    }
}
