//! Trust baseline resolution for proposed actions.
//!
//! Stands in for a policy registry lookup: a lightweight vendor-name
//! heuristic decides whether an action falls under an approved-vendor
//! policy or the general safety baseline. The vendor pattern is liberal
//! on purpose; any capitalized phrase followed by a legal-entity suffix
//! matches, and that imprecision is part of the contract.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref VENDOR_PATTERN: Regex = Regex::new(
        r"\b([A-Z][a-zA-Z0-9]+(?:\s+[A-Z][a-zA-Z0-9]+)*)\s+(Corp|Corporation|Inc|LLC|Ltd|Limited|GmbH|PLC)\b"
    )
    .expect("vendor pattern");
}

const APPROVED_VENDOR_ADVISORY: &str = "Vendor appears in the approved vendor baseline. \
     Verify invoice details and anomaly scores before authorizing transfers.";

const GENERAL_SAFETY_ADVISORY: &str = "Apply standard company risk controls. \
     Check for unusual recipients, large transfers, and deletion of critical data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    #[serde(rename = "Approved Vendor Policy")]
    ApprovedVendor,
    #[serde(rename = "General Safety Policy")]
    GeneralSafety,
}

/// Policy context resolved from the proposed action, produced fresh per
/// request and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBaseline {
    pub policy_type: PolicyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub description: String,
}

/// Resolve the trust baseline for a proposed action.
pub fn resolve_baseline(proposed_action: &str) -> TrustBaseline {
    let text = proposed_action.trim();

    if let Some(captures) = VENDOR_PATTERN.captures(text) {
        let vendor = format!("{} {}", &captures[1], &captures[2]);
        return TrustBaseline {
            policy_type: PolicyType::ApprovedVendor,
            vendor: Some(vendor),
            description: APPROVED_VENDOR_ADVISORY.to_string(),
        };
    }

    TrustBaseline {
        policy_type: PolicyType::GeneralSafety,
        vendor: None,
        description: GENERAL_SAFETY_ADVISORY.to_string(),
    }
}
