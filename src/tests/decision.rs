use crate::decision::{audit_mode, decide, AlertPriority, AuditMode, Decision};

#[test]
fn block_above_threshold() {
    let ruling = decide(0.71);
    assert_eq!(ruling.decision, Decision::Block);
    assert_eq!(ruling.alert_priority, Some(AlertPriority::Critical));
    assert!(ruling.voice_alert_text.is_some());
}

#[test]
fn boundary_at_block_threshold_flags() {
    // exactly 0.70 is review, not block
    let ruling = decide(0.70);
    assert_eq!(ruling.decision, Decision::FlagForReview);
    assert_eq!(ruling.alert_priority, Some(AlertPriority::Warning));
}

#[test]
fn boundary_at_review_threshold_flags() {
    // exactly 0.40 is review, not allow
    let ruling = decide(0.40);
    assert_eq!(ruling.decision, Decision::FlagForReview);
    assert!(ruling.voice_alert_text.is_some());
}

#[test]
fn near_boundary_value_rounds_into_review() {
    // the scorer rounds to two decimals before deciding, so 0.399 arrives as 0.40
    let rounded = (0.399_f64 * 100.0).round() / 100.0;
    assert_eq!(decide(rounded).decision, Decision::FlagForReview);
}

#[test]
fn allow_below_threshold_carries_no_alert() {
    let ruling = decide(0.39);
    assert_eq!(ruling.decision, Decision::Allow);
    assert_eq!(ruling.alert_priority, None);
    assert_eq!(ruling.voice_alert_text, None);
}

#[test]
fn extremes_map_to_allow_and_block() {
    assert_eq!(decide(0.0).decision, Decision::Allow);
    assert_eq!(decide(1.0).decision, Decision::Block);
}

#[test]
fn high_stakes_verbs_force_synchronous_mode() {
    assert_eq!(audit_mode("Please delete the old logs"), AuditMode::Synchronous);
    assert_eq!(audit_mode("TRANSFER the balance today"), AuditMode::Synchronous);
}

#[test]
fn other_actions_audit_asynchronously() {
    assert_eq!(audit_mode("Summarize this report"), AuditMode::Asynchronous);
    // "wire" is risky but is not one of the synchronous trigger literals
    assert_eq!(
        audit_mode("Wire a payment to the vendor"),
        AuditMode::Asynchronous
    );
}

#[test]
fn decision_wire_spellings() {
    assert_eq!(
        serde_json::to_string(&Decision::FlagForReview).unwrap(),
        "\"FLAG_FOR_REVIEW\""
    );
    assert_eq!(serde_json::to_string(&Decision::Allow).unwrap(), "\"ALLOW\"");
    assert_eq!(serde_json::to_string(&Decision::Block).unwrap(), "\"BLOCK\"");
    assert_eq!(
        serde_json::to_string(&AlertPriority::Critical).unwrap(),
        "\"CRITICAL\""
    );
    assert_eq!(
        serde_json::to_string(&AuditMode::Synchronous).unwrap(),
        "\"Synchronous\""
    );
}
