//! HTTP surface for the audit pipeline and ledger read-back.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::analytics::{self, LedgerAnalytics};
use crate::api_errors::AppError;
use crate::app_state::AppState;
use crate::auditor;
use crate::context::TrustBaseline;
use crate::decision::{AlertPriority, AuditMode, Decision};
use crate::ledger_store::ListOrder;
use crate::record::LedgerRecord;
use crate::simulator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub agent_id: String,
    pub mission_statement: String,
    pub proposed_action: String,
    pub reasoning_chain: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub transaction_id: String,
    pub timestamp: DateTime<Utc>,
    pub delta_score: f64,
    pub audit_mode: AuditMode,
    pub decision: Decision,
    pub trust_baseline: TrustBaseline,
    pub alert_priority: Option<AlertPriority>,
    pub voice_alert_text: Option<String>,
    pub reasoning_hash: String,
}

impl AuditResponse {
    fn from_record(record: LedgerRecord) -> Self {
        AuditResponse {
            transaction_id: record.transaction_id,
            timestamp: record.timestamp,
            delta_score: record.outcome.delta_score,
            audit_mode: record.outcome.audit_mode,
            decision: record.outcome.decision,
            trust_baseline: record.outcome.trust_baseline,
            alert_priority: record.outcome.alert_priority,
            voice_alert_text: record.outcome.voice_alert_text,
            reasoning_hash: record.reasoning_hash,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    pub order: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub request: AuditRequest,
    pub outcome: AuditResponse,
}

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/audit", post(audit_action))
        .route("/api/ledger", get(ledger_list))
        .route("/api/ledger/analytics", get(ledger_analytics))
        .route("/api/ledger/{transaction_id}", get(ledger_entry))
        .route("/api/simulate", post(simulate_audit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Score a proposed action, commit the record, and return the outcome.
async fn audit_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuditRequest>,
) -> Result<Json<AuditResponse>, AppError> {
    let outcome = auditor::audit(&req.mission_statement, &req.proposed_action);
    let record = LedgerRecord::new(
        &req.agent_id,
        &req.mission_statement,
        &req.proposed_action,
        req.reasoning_chain,
        outcome,
    )?;
    state.commit_record(&record)?;
    Ok(Json(AuditResponse::from_record(record)))
}

async fn ledger_list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LedgerQuery>,
) -> Result<Json<Vec<LedgerRecord>>, AppError> {
    let order = parse_order(query.order.as_deref())?;
    let records = state.ledger_list(order, query.limit)?;
    Ok(Json(records))
}

async fn ledger_entry(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<LedgerRecord>, AppError> {
    match state.ledger_load(&transaction_id)? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::not_found(format!(
            "no audit record for transaction '{transaction_id}'"
        ))),
    }
}

async fn ledger_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LedgerAnalytics>, AppError> {
    let records = state.ledger_list(ListOrder::Chronological, None)?;
    Ok(Json(analytics::summarize(
        &records,
        state.config.analytics_window,
    )))
}

/// Fabricate a plausible agent request and run it through the real pipeline.
async fn simulate_audit(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SimulateResponse>, AppError> {
    let request = simulator::generate_request();
    let outcome = auditor::audit(&request.mission_statement, &request.proposed_action);
    let record = LedgerRecord::new(
        &request.agent_id,
        &request.mission_statement,
        &request.proposed_action,
        request.reasoning_chain.clone(),
        outcome,
    )?;
    state.commit_record(&record)?;
    Ok(Json(SimulateResponse {
        request,
        outcome: AuditResponse::from_record(record),
    }))
}

fn parse_order(raw: Option<&str>) -> Result<ListOrder, AppError> {
    match raw {
        None | Some("desc") => Ok(ListOrder::ReverseChronological),
        Some("asc") => Ok(ListOrder::Chronological),
        Some(other) => Err(AppError::bad_request(format!(
            "unknown order '{other}', expected 'asc' or 'desc'"
        ))),
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Vanguard Protocol API",
        "status": "operational",
    }))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readyz(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let ready = state.ledger.lock().is_ok();
    Json(serde_json::json!({ "ready": ready }))
}
