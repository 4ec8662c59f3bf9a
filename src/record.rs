//! Ledger record representation for committed audits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auditor::AuditOutcome;
use crate::canonical;
use crate::errors::VanguardResult;

pub const LEDGER_STATUS_COMMITTED: &str = "committed";

/// One committed audit: the original request, the outcome, and the
/// reasoning-chain digest that makes the record tamper-evident.
///
/// Records are immutable once appended; the transaction ID is the only
/// handle for read-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub transaction_id: String,
    pub timestamp: DateTime<Utc>,
    pub agent_id: String,
    pub mission_statement: String,
    pub proposed_action: String,
    pub reasoning_chain: Vec<String>,
    pub reasoning_hash: String,
    #[serde(flatten)]
    pub outcome: AuditOutcome,
    pub ledger_status: String,
}

impl LedgerRecord {
    /// Build a committed record from an audit request and its outcome,
    /// assigning a fresh transaction ID and timestamp.
    pub fn new(
        agent_id: &str,
        mission_statement: &str,
        proposed_action: &str,
        reasoning_chain: Vec<String>,
        outcome: AuditOutcome,
    ) -> VanguardResult<Self> {
        let reasoning_hash = canonical::hash_reasoning_chain(&reasoning_chain)?;

        Ok(LedgerRecord {
            transaction_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            agent_id: agent_id.to_string(),
            mission_statement: mission_statement.to_string(),
            proposed_action: proposed_action.to_string(),
            reasoning_chain,
            reasoning_hash,
            outcome,
            ledger_status: LEDGER_STATUS_COMMITTED.to_string(),
        })
    }
}
