// End-to-end flow against a sled-backed ledger.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use vanguard_protocol::app_state::AppState;
use vanguard_protocol::config_loader::VanguardConfig;
use vanguard_protocol::ledger_store_sled::LedgerStoreSled;
use vanguard_protocol::web::build_router;
use vanguard_protocol::LedgerStore;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn audit_flow_persists_to_sled_ledger() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LedgerStoreSled::new(dir.path()).expect("open store");
    let ledger: Arc<Mutex<dyn LedgerStore>> = Arc::new(Mutex::new(store));
    let state = Arc::new(AppState::new(VanguardConfig::default(), ledger));
    let app = build_router(state);

    let requests = [
        json!({
            "agent_id": "agent-archive-03",
            "mission_statement": "Maintain the document archive",
            "proposed_action": "Delete stale export logs older than ninety days",
            "reasoning_chain": ["Retention policy marks exports older than ninety days as stale."],
        }),
        json!({
            "agent_id": "agent-support-02",
            "mission_statement": "Respond to customer support tickets",
            "proposed_action": "Summarize this week's unresolved tickets",
            "reasoning_chain": ["Fourteen tickets remain unresolved this week."],
        }),
    ];

    let mut transaction_ids = Vec::new();
    for payload in &requests {
        let request = Request::builder()
            .uri("/api/audit")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        transaction_ids.push(body["transaction_id"].as_str().unwrap().to_string());
    }

    // the deletion gates synchronously; the summary does not
    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/ledger/{}", transaction_ids[0]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let first_body = body_json(first).await;
    assert_eq!(first_body["audit_mode"], "Synchronous");

    // default listing is reverse-chronological: latest audit first
    let listed = app
        .clone()
        .oneshot(Request::builder().uri("/api/ledger").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let records = body_json(listed).await;
    let ids: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["transaction_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![transaction_ids[1].as_str(), transaction_ids[0].as_str()]);

    let analytics = app
        .oneshot(
            Request::builder()
                .uri("/api/ledger/analytics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let summary = body_json(analytics).await;
    assert_eq!(summary["total_audits"], 2);
}
