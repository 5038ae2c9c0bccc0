use super::{ConciliationStatus, DocketFlag, DocketSignals, SignalTier};

pub(crate) struct KeywordRule {
    pub(crate) keyword: &'static str,
    pub(crate) flag: Option<DocketFlag>,
}

pub(crate) struct TierRules {
    pub(crate) tier: SignalTier,
    pub(crate) rules: &'static [KeywordRule],
}

const fn rule(keyword: &'static str, flag: Option<DocketFlag>) -> KeywordRule {
    KeywordRule { keyword, flag }
}

/// Every docket classification lives here; matching is by lowercase substring.
pub(crate) const KEYWORD_TIERS: &[TierRules] = &[
    TierRules {
        tier: SignalTier::High,
        rules: &[
            rule("default judgment", Some(DocketFlag::DefaultJudgment)),
            rule("judgment entered", Some(DocketFlag::DefaultJudgment)),
            rule("motion for default", Some(DocketFlag::DefaultMotion)),
            rule("writ of execution", Some(DocketFlag::WritOfExecution)),
            rule("praecipe for writ", Some(DocketFlag::WritOfExecution)),
            rule("sheriff sale", None),
            rule("sheriff's sale", None),
            rule("rule to show cause", None),
            rule("failure to appear", None),
        ],
    },
    TierRules {
        tier: SignalTier::Medium,
        rules: &[
            rule("conciliation", Some(DocketFlag::Conciliation)),
            rule("mediation", Some(DocketFlag::Conciliation)),
            rule("service accepted", None),
            rule("answer filed", None),
            rule("discovery", None),
            rule("bankruptcy", Some(DocketFlag::Bankruptcy)),
            rule("automatic stay", Some(DocketFlag::Stayed)),
            rule("stay of proceedings", Some(DocketFlag::Stayed)),
            rule("stayed", Some(DocketFlag::Stayed)),
        ],
    },
    TierRules {
        tier: SignalTier::Positive,
        rules: &[
            rule("motion to dismiss", None),
            rule("answer and new matter", Some(DocketFlag::DefendantResponse)),
            rule("counterclaim", Some(DocketFlag::DefendantResponse)),
            rule("preliminary objections", Some(DocketFlag::DefendantResponse)),
            rule("counsel appearance", Some(DocketFlag::DefendantAttorney)),
            rule("attorney appearance", Some(DocketFlag::DefendantAttorney)),
            rule("entry of appearance", Some(DocketFlag::DefendantAttorney)),
        ],
    },
];

const CONTINUANCE_MARKERS: &[&str] = &["continuance", "continued", "postpone"];
const SERVICE_MARKERS: &[&str] = &["service", "served"];
const SERVICE_FAILURE_MARKERS: &[&str] = &["fail", "unable", "not found", "return"];

pub(crate) fn mentions_any(description: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| description.contains(marker))
}

pub(crate) fn is_continuance(description: &str) -> bool {
    mentions_any(description, CONTINUANCE_MARKERS)
}

/// Returns `(attempted, failed)` for a lowercase description.
pub(crate) fn service_outcome(description: &str) -> (bool, bool) {
    let attempted = mentions_any(description, SERVICE_MARKERS);
    (
        attempted,
        attempted && mentions_any(description, SERVICE_FAILURE_MARKERS),
    )
}

/// Status words in the same description; checked in this order.
pub(crate) fn conciliation_status(description: &str) -> Option<ConciliationStatus> {
    if mentions_any(description, &["failed", "no show"]) {
        Some(ConciliationStatus::Failed)
    } else if mentions_any(description, &["scheduled", "set for"]) {
        Some(ConciliationStatus::Scheduled)
    } else if mentions_any(description, &["completed", "held"]) {
        Some(ConciliationStatus::Completed)
    } else {
        None
    }
}

impl DocketFlag {
    pub(crate) fn raise(self, signals: &mut DocketSignals) {
        match self {
            DocketFlag::DefaultJudgment => signals.has_default_judgment = true,
            DocketFlag::DefaultMotion => signals.has_default_motion = true,
            DocketFlag::WritOfExecution => signals.has_writ_of_execution = true,
            DocketFlag::Conciliation => signals.has_conciliation = true,
            DocketFlag::Bankruptcy => signals.has_bankruptcy = true,
            DocketFlag::Stayed => signals.is_stayed = true,
            DocketFlag::DefendantAttorney => signals.has_defendant_attorney = true,
            DocketFlag::DefendantResponse => signals.has_defendant_response = true,
        }
    }
}
