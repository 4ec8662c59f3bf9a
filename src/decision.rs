//! Decision engine: audit-mode tiering and delta-score thresholding.
//!
//! The audit mode depends only on the action text; the decision depends
//! only on the rounded delta score. Thresholds are part of the behavioral
//! contract and are not configurable.

use serde::{Deserialize, Serialize};

/// Delta scores strictly above this are blocked outright.
pub const BLOCK_THRESHOLD: f64 = 0.70;

/// Delta scores at or above this (and at or below the block threshold)
/// are flagged for review.
pub const REVIEW_THRESHOLD: f64 = 0.40;

/// Action-text literals that force a blocking, synchronous audit gate.
const SYNCHRONOUS_TRIGGERS: [&str; 2] = ["transfer", "delete"];

const BLOCK_ALERT_TEXT: &str = "Critical alert. Semantic delta exceeds the block threshold. \
     The proposed action deviates sharply from the stated mission and has been blocked \
     pending operator review.";

const REVIEW_ALERT_TEXT: &str = "Warning. The proposed action drifts from the stated mission \
     and has been flagged for human review.";

/// Whether an action must wait on a blocking policy gate (`Synchronous`)
/// or may be audited in the background (`Asynchronous`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditMode {
    Synchronous,
    Asynchronous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Allow,
    FlagForReview,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    Critical,
    Warning,
}

/// A decision plus its alert metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruling {
    pub decision: Decision,
    pub alert_priority: Option<AlertPriority>,
    pub voice_alert_text: Option<String>,
}

/// Determine the audit mode for a proposed action.
///
/// High-stakes verbs ("transfer", "delete") require the agent to block on a
/// synchronous human/policy gate; everything else is audited in the
/// background. Case-insensitive substring match on the raw action text.
pub fn audit_mode(proposed_action: &str) -> AuditMode {
    let lowered = proposed_action.to_lowercase();
    if SYNCHRONOUS_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        AuditMode::Synchronous
    } else {
        AuditMode::Asynchronous
    }
}

/// Map a rounded delta score to a decision and alert metadata.
///
/// Evaluated highest-severity first so the boundaries are unambiguous:
/// exactly 0.70 flags for review, exactly 0.40 flags for review. ALLOW
/// never carries alert fields.
pub fn decide(delta_score: f64) -> Ruling {
    if delta_score > BLOCK_THRESHOLD {
        Ruling {
            decision: Decision::Block,
            alert_priority: Some(AlertPriority::Critical),
            voice_alert_text: Some(BLOCK_ALERT_TEXT.to_string()),
        }
    } else if delta_score >= REVIEW_THRESHOLD {
        Ruling {
            decision: Decision::FlagForReview,
            alert_priority: Some(AlertPriority::Warning),
            voice_alert_text: Some(REVIEW_ALERT_TEXT.to_string()),
        }
    } else {
        Ruling {
            decision: Decision::Allow,
            alert_priority: None,
            voice_alert_text: None,
        }
    }
}
