//! Semantic delta scoring and the audit pipeline entry point.
//!
//! The delta score combines keyword misalignment, risk phrasing, and the
//! resolved trust baseline into a single [0.0, 1.0] measure of how far a
//! proposed action has drifted from the agent's mission. The weights are
//! fixed design constants; changing them changes the behavioral contract.

use serde::{Deserialize, Serialize};

use crate::context::{self, PolicyType, TrustBaseline};
use crate::decision::{self, AlertPriority, AuditMode, Decision};
use crate::risk;
use crate::text_analysis::{extract_keywords, keyword_overlap, MIN_KEYWORD_LENGTH};

/// Weight applied to keyword misalignment (1 - Jaccard overlap).
pub const MISALIGNMENT_WEIGHT: f64 = 0.6;

/// Weight applied to the risk keyword score.
pub const RISK_WEIGHT: f64 = 0.4;

/// Discount applied when the action falls under an approved vendor policy.
pub const VENDOR_TRUST_MODIFIER: f64 = -0.1;

/// The full result of auditing one proposed action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub delta_score: f64,
    pub audit_mode: AuditMode,
    pub decision: Decision,
    pub trust_baseline: TrustBaseline,
    pub alert_priority: Option<AlertPriority>,
    pub voice_alert_text: Option<String>,
}

/// Calculate the semantic delta score between a mission statement and a
/// proposed action, in the context of a resolved trust baseline.
///
/// 0.0 means the action matches the mission; 1.0 means maximal hijack risk.
/// The result is clamped to [0.0, 1.0] and rounded to two decimal places.
pub fn semantic_delta(mission_statement: &str, proposed_action: &str, baseline: &TrustBaseline) -> f64 {
    let mission_keywords = extract_keywords(mission_statement, MIN_KEYWORD_LENGTH);
    let action_keywords = extract_keywords(proposed_action, MIN_KEYWORD_LENGTH);

    let alignment = keyword_overlap(&mission_keywords, &action_keywords);
    let risk = risk::risk_score(proposed_action);

    let baseline_modifier = match baseline.policy_type {
        PolicyType::ApprovedVendor => VENDOR_TRUST_MODIFIER,
        PolicyType::GeneralSafety => 0.0,
    };

    let raw = (1.0 - alignment) * MISALIGNMENT_WEIGHT + risk * RISK_WEIGHT + baseline_modifier;
    round_to_hundredths(raw.clamp(0.0, 1.0))
}

/// Run the full scoring and decision pipeline for one proposed action.
///
/// Resolves the trust baseline and audit mode from the action text, scores
/// the delta against the mission, and maps the rounded delta to a decision
/// with alert metadata.
pub fn audit(mission_statement: &str, proposed_action: &str) -> AuditOutcome {
    let trust_baseline = context::resolve_baseline(proposed_action);
    let audit_mode = decision::audit_mode(proposed_action);
    let delta_score = semantic_delta(mission_statement, proposed_action, &trust_baseline);
    let ruling = decision::decide(delta_score);

    tracing::debug!(
        delta_score,
        audit_mode = ?audit_mode,
        decision = ?ruling.decision,
        policy = ?trust_baseline.policy_type,
        "audit evaluated"
    );

    AuditOutcome {
        delta_score,
        audit_mode,
        decision: ruling.decision,
        trust_baseline,
        alert_priority: ruling.alert_priority,
        voice_alert_text: ruling.voice_alert_text,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
