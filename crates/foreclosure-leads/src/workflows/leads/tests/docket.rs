use super::common::*;
use crate::workflows::leads::{analyze_docket, DocketEntry, DocketFlag, SignalTier};

fn contested_docket() -> Vec<DocketEntry> {
    vec![
        entry(200, "COMPLAINT IN MORTGAGE FORECLOSURE"),
        entry(150, "ENTRY OF APPEARANCE - COUNSEL FOR DEFENDANT"),
        entry(120, "CONCILIATION CONFERENCE SCHEDULED"),
        entry(90, "ANSWER AND NEW MATTER"),
        entry(60, "SHERIFF'S RETURN OF SERVICE - NOT FOUND"),
        entry(30, "HEARING CONTINUED"),
    ]
}

#[test]
fn analysis_ignores_input_order() {
    let entries = contested_docket();
    let mut reversed = entries.clone();
    reversed.reverse();

    let first = analyze_docket(&entries, today());
    let second = analyze_docket(&entries, today());
    let shuffled = analyze_docket(&reversed, today());

    assert_eq!(first, second);
    assert_eq!(first, shuffled);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&shuffled).unwrap()
    );
}

#[test]
fn high_distress_entries_never_clear_flags() {
    let high_distress = [
        "DEFAULT JUDGMENT ENTERED",
        "MOTION FOR DEFAULT JUDGMENT",
        "PRAECIPE FOR WRIT OF EXECUTION",
        "SHERIFF SALE SCHEDULED",
        "RULE TO SHOW CAUSE ISSUED",
        "FAILURE TO APPEAR",
    ];
    let base = contested_docket();
    let before = analyze_docket(&base, today());

    for description in high_distress {
        let mut extended = base.clone();
        extended.push(entry(5, description));
        let after = analyze_docket(&extended, today());

        for flag in DocketFlag::ALL {
            if flag.is_set(&before) {
                assert!(flag.is_set(&after), "{flag:?} cleared by '{description}'");
            }
        }
        assert!(after.distress_signals.len() > before.distress_signals.len());
    }
}

#[test]
fn every_raised_flag_has_evidence() {
    let mut entries = contested_docket();
    entries.extend([
        entry(20, "MOTION FOR DEFAULT JUDGMENT"),
        entry(15, "WRIT OF EXECUTION ISSUED"),
        entry(10, "NOTICE OF BANKRUPTCY - AUTOMATIC STAY"),
        entry(8, "COUNTERCLAIM FILED"),
    ]);
    let signals = analyze_docket(&entries, today());

    let raised: Vec<DocketFlag> = DocketFlag::ALL
        .into_iter()
        .filter(|flag| flag.is_set(&signals))
        .collect();
    assert!(raised.len() >= 7);
    for flag in raised {
        let evidence: Vec<_> = signals.evidence_for(flag).collect();
        assert!(!evidence.is_empty(), "{flag:?} has no evidence");
        assert!(evidence
            .iter()
            .all(|signal| entries.iter().any(|e| e.description == signal.description)));
    }
}

#[test]
fn default_motion_is_recorded_alongside_judgment() {
    let entries = vec![
        entry(40, "MOTION FOR DEFAULT JUDGMENT"),
        entry(10, "DEFAULT JUDGMENT ENTERED"),
    ];
    let signals = analyze_docket(&entries, today());
    assert!(signals.has_default_motion);
    assert!(signals.has_default_judgment);
    assert!(signals
        .distress_signals
        .iter()
        .all(|signal| signal.tier == SignalTier::High));
}

#[test]
fn contested_docket_summary() {
    let signals = analyze_docket(&contested_docket(), today());
    assert_eq!(signals.total_entries, 6);
    assert_eq!(signals.days_since_last_activity, Some(30));
    assert!(signals.has_defendant_attorney);
    assert!(signals.has_defendant_response);
    assert!(signals.has_conciliation);
    assert_eq!(signals.continuance_count, 1);
    assert_eq!(signals.service_attempts, 1);
    assert_eq!(signals.failed_service_attempts, 1);
    assert!(!signals.has_default_judgment);
    assert_eq!(signals.recent_activity.len(), 5);
    assert_eq!(signals.recent_activity[0].description, "HEARING CONTINUED");
}
