use super::super::docket::{mentions_any, DocketFlag, DocketSignals};
use super::super::domain::Case;
use super::{FactorKind, ScoreFactor};
use chrono::NaiveDate;

const CONTINUANCE_CAP: i32 = 25;
const STAY_LIFT_MARKERS: &[&str] = &[
    "stay lifted",
    "lift stay",
    "lifting stay",
    "relief from stay",
    "relief from automatic stay",
];
const ENTITY_TOKENS: &[&str] = &["LLC", "INC", "CORP", "CORPORATION", "TRUST", "BANK"];

/// Dated, lowercased docket descriptions, matched one filing at a time.
struct DocketText {
    entries: Vec<(NaiveDate, String)>,
}

impl DocketText {
    fn from_case(case: &Case) -> Self {
        Self {
            entries: case
                .docket
                .iter()
                .map(|entry| (entry.date, entry.description.to_lowercase()))
                .collect(),
        }
    }

    fn any(&self, markers: &[&str]) -> bool {
        self.any_entry(|description| mentions_any(description, markers))
    }

    fn any_entry(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.entries
            .iter()
            .any(|(_, description)| predicate(description))
    }

    /// Latest filing date among entries mentioning any marker.
    fn latest_mention(&self, markers: &[&str]) -> Option<NaiveDate> {
        self.entries
            .iter()
            .filter(|(_, description)| mentions_any(description, markers))
            .map(|(date, _)| *date)
            .max()
    }
}

struct Ledger {
    factors: Vec<ScoreFactor>,
    total: i32,
}

impl Ledger {
    fn add(&mut self, kind: FactorKind, point_delta: i32, description: impl Into<String>) {
        self.factors.push(ScoreFactor {
            kind,
            description: description.into(),
            point_delta,
        });
        self.total += point_delta;
    }
}

/// Applies every contribution in evaluation order; returns the factors and the unclamped total.
pub(crate) fn score_case(case: &Case, signals: &DocketSignals) -> (Vec<ScoreFactor>, i32) {
    let mut ledger = Ledger {
        factors: Vec::new(),
        total: 0,
    };

    case_age(case.days_open, &mut ledger);

    if signals.has_docket() {
        let text = DocketText::from_case(case);
        docket_intensity(signals.total_entries, &mut ledger);
        continuances(signals.continuance_count, &mut ledger);
        let active_fighting = active_resistance(&text, &mut ledger);
        capitulation(&text, &mut ledger);
        settlement(&text, &mut ledger);
        transitions(&text, signals, &mut ledger);
        recency(signals.days_since_last_activity, &mut ledger);
        false_hope(case.days_open, signals, active_fighting, &text, &mut ledger);
        bankruptcy(&text, signals, &mut ledger);
    }

    property_and_defendant(case, &mut ledger);

    (ledger.factors, ledger.total)
}

fn case_age(days_open: i64, ledger: &mut Ledger) {
    let (points, band) = match days_open {
        ..=119 => (0, "under 120 days"),
        120..=179 => (5, "120-179 days"),
        180..=269 => (12, "180-269 days"),
        270..=540 => (25, "270-540 days, sweet spot"),
        541..=720 => (18, "541-720 days"),
        _ => (10, "over 720 days, possible zombie case"),
    };
    ledger.add(
        FactorKind::CaseAge,
        points,
        format!("case open {days_open} days ({band})"),
    );
}

fn docket_intensity(total_entries: usize, ledger: &mut Ledger) {
    let points = match total_entries {
        0..=4 => 2,
        5..=8 => 8,
        9..=14 => 14,
        _ => 20,
    };
    ledger.add(
        FactorKind::DocketActivity,
        points,
        format!("{total_entries} docket entries"),
    );
}

fn continuance_points(count: u32) -> i32 {
    let raw: i32 = (1..=count)
        .map(|nth| match nth {
            1..=3 => 5,
            4..=6 => 3,
            _ => 1,
        })
        .sum();
    raw.min(CONTINUANCE_CAP)
}

fn continuances(count: u32, ledger: &mut Ledger) {
    if count == 0 {
        return;
    }
    ledger.add(
        FactorKind::Continuances,
        continuance_points(count),
        format!("{count} continuance(s)"),
    );
}

/// Returns whether the defendant is actively fighting the case.
fn active_resistance(text: &DocketText, ledger: &mut Ledger) -> bool {
    let before = ledger.factors.len();

    if text.any(&["answer and new matter", "answer with new matter"]) {
        ledger.add(FactorKind::ActiveResistance, -5, "answer with new matter filed");
    }
    if text.any(&["preliminary objection"]) {
        ledger.add(FactorKind::ActiveResistance, -5, "preliminary objections filed");
    }
    if text.any_entry(|d| d.contains("objection") && d.contains("opposition")) {
        ledger.add(FactorKind::ActiveResistance, -5, "objection and opposition filed");
    }
    if text.any_entry(|d| d.contains("motion for summary judgment") && d.contains("defendant")) {
        ledger.add(
            FactorKind::ActiveResistance,
            -10,
            "defendant motion for summary judgment",
        );
    }
    if text.any(&["counterclaim"]) {
        ledger.add(FactorKind::ActiveResistance, -8, "counterclaim filed");
    }
    if text.any(&["reply to new matter"]) {
        ledger.add(FactorKind::ActiveResistance, -3, "reply to new matter");
    }

    ledger.factors.len() > before
}

fn capitulation(text: &DocketText, ledger: &mut Ledger) {
    if text.any(&["reinstat"]) {
        ledger.add(FactorKind::Capitulation, 5, "case reinstated after pause");
    }
    if text.any(&["alternate service", "alternative service"]) {
        ledger.add(
            FactorKind::Capitulation,
            5,
            "motion for alternate service, defendant not located",
        );
    }
    if text.any(&["not found", "unable to serve", "failure of service"]) {
        ledger.add(FactorKind::Capitulation, 5, "service failed or defendant not found");
    }
    if text.any(&[
        "withdraw as counsel",
        "withdrawal of counsel",
        "withdraw appearance",
        "withdrawal of appearance",
    ]) {
        ledger.add(FactorKind::Capitulation, 12, "defense counsel withdrew");
    }
    if text.any(&["substitution of counsel"]) {
        ledger.add(FactorKind::Capitulation, 3, "substitution of counsel");
    }
}

fn settlement(text: &DocketText, ledger: &mut Ledger) {
    if text.any(&["matter settled"]) {
        ledger.add(FactorKind::Settlement, 15, "matter settled notation");
    }
    if text.any_entry(|d| d.contains("stipulation") && !d.contains("dismiss")) {
        ledger.add(FactorKind::Settlement, 10, "stipulation between parties");
    }
    if text.any_entry(|d| d.contains("stipulation") && d.contains("dismiss")) {
        ledger.add(FactorKind::Settlement, 8, "stipulation of dismissal");
    }
}

fn transitions(text: &DocketText, signals: &DocketSignals, ledger: &mut Ledger) {
    if let Some(lifted_on) = text.latest_mention(STAY_LIFT_MARKERS) {
        // The lifting filing itself mentions the stay; only a separate, earlier stay counts.
        let stayed_before = signals.evidence_for(DocketFlag::Stayed).any(|signal| {
            signal.date <= lifted_on
                && !mentions_any(&signal.description.to_lowercase(), STAY_LIFT_MARKERS)
        });
        if stayed_before {
            ledger.add(FactorKind::StayLifted, 12, "stay lifted after case was stayed");
        } else {
            ledger.add(FactorKind::StayLifted, 8, "stay lifted");
        }
    }

    let Some(quiet_days) = signals.days_since_last_activity else {
        return;
    };
    let entries = signals.total_entries;
    if entries >= 8 && quiet_days >= 90 {
        ledger.add(
            FactorKind::SilenceAfterActivity,
            10,
            format!("{quiet_days} days quiet after {entries} entries"),
        );
    } else if entries >= 5 && quiet_days >= 60 {
        ledger.add(
            FactorKind::SilenceAfterActivity,
            5,
            format!("{quiet_days} days quiet after {entries} entries"),
        );
    }
}

fn recency(days_since_last_activity: Option<i64>, ledger: &mut Ledger) {
    let Some(days) = days_since_last_activity else {
        return;
    };
    let points = match days {
        ..=13 => -12,
        14..=29 => -8,
        30..=59 => -4,
        60..=89 => 0,
        _ => return,
    };
    ledger.add(
        FactorKind::Recency,
        points,
        format!("last docket activity {days} days ago"),
    );
}

fn false_hope(
    days_open: i64,
    signals: &DocketSignals,
    active_fighting: bool,
    text: &DocketText,
    ledger: &mut Ledger,
) {
    if days_open >= 360 || signals.total_entries < 6 || !active_fighting {
        return;
    }

    let adverse_ruling = text.any(&["denied", "overruled"])
        || text.any_entry(|d| {
            d.contains("motion") && d.contains("granted") && d.contains("plaintiff")
        });
    if !adverse_ruling {
        ledger.add(
            FactorKind::FalseHope,
            -8,
            "young, contested case with no adverse ruling yet",
        );
    }
}

fn bankruptcy(text: &DocketText, signals: &DocketSignals, ledger: &mut Ledger) {
    if !signals.has_bankruptcy {
        return;
    }

    if text.any_entry(|d| d.contains("bankruptcy") && d.contains("discharg")) {
        ledger.add(FactorKind::Bankruptcy, 8, "bankruptcy discharged");
        return;
    }

    let days = signals.days_since_last_activity.unwrap_or(0);
    let points = match days {
        ..=89 => -25,
        90..=179 => -18,
        _ => -10,
    };
    ledger.add(
        FactorKind::Bankruptcy,
        points,
        format!("bankruptcy on docket, last activity {days} days ago"),
    );
}

fn property_and_defendant(case: &Case, ledger: &mut Ledger) {
    match &case.address {
        Some(address) if address.is_found() => {
            ledger.add(FactorKind::Address, 3, "property address parsed");
        }
        Some(_) => ledger.add(FactorKind::Address, -5, "no property address found"),
        None => {}
    }

    if is_business_entity(&case.defendant) {
        ledger.add(
            FactorKind::BusinessEntity,
            -8,
            format!("defendant '{}' appears to be a business entity", case.defendant),
        );
    }
}

pub(crate) fn is_business_entity(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    if upper.contains("ESTATE OF") {
        return true;
    }
    upper
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| ENTITY_TOKENS.contains(&token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuances_have_diminishing_returns() {
        assert_eq!(continuance_points(1), 5);
        assert_eq!(continuance_points(3), 15);
        assert_eq!(continuance_points(4), 18);
        assert_eq!(continuance_points(6), 24);
        assert_eq!(continuance_points(7), 25);
        assert_eq!(continuance_points(30), 25);
    }

    #[test]
    fn entity_detection_uses_whole_tokens() {
        assert!(is_business_entity("Acme Holdings, LLC"));
        assert!(is_business_entity("ESTATE OF JOHN DOE"));
        assert!(is_business_entity("First Community Bank"));
        assert!(!is_business_entity("Vincent Prince"));
        assert!(!is_business_entity("Mary Trustworthy"));
    }
}
