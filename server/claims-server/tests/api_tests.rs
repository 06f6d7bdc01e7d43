use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use claims_server::{create_app, ClaimsServer};
use claims_service::{
    AdjudicationValueCode, CarcCode, ClaimAdjustmentGroupCode, ClaimsError, ClaimsResult, ClaimsService,
    CodeReferenceStore, InMemoryClaimSource, InMemoryCodeStore, RarcCode,
};
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/sample_claims.json");

async fn fixture_app() -> Router {
    let source = InMemoryClaimSource::load_json_file(FIXTURES).await.unwrap();
    let service = ClaimsService::new(Arc::new(source), Arc::new(InMemoryCodeStore::standard()));
    create_app(ClaimsServer::new(service))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, body.unwrap_or(Value::Null))
}

async fn post_mcp(app: Router, body: Value) -> (StatusCode, Option<Value>) {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Code store whose every lookup fails, as an unreachable database would
struct UnreachableStore;

#[async_trait]
impl CodeReferenceStore for UnreachableStore {
    async fn adjudication_value(&self, _code: &str) -> ClaimsResult<Option<AdjudicationValueCode>> {
        Err(ClaimsError::CodeStore("connection refused by 10.1.2.3".into()))
    }

    async fn adjustment_group(&self, _code: &str) -> ClaimsResult<Option<ClaimAdjustmentGroupCode>> {
        Err(ClaimsError::CodeStore("connection refused by 10.1.2.3".into()))
    }

    async fn carc(&self, _code: &str) -> ClaimsResult<Option<CarcCode>> {
        Err(ClaimsError::CodeStore("connection refused by 10.1.2.3".into()))
    }

    async fn rarc(&self, _code: &str) -> ClaimsResult<Option<RarcCode>> {
        Err(ClaimsError::CodeStore("connection refused by 10.1.2.3".into()))
    }

    async fn health_check(&self) -> ClaimsResult<()> {
        Err(ClaimsError::CodeStore("connection refused by 10.1.2.3".into()))
    }
}

async fn unreachable_store_app() -> Router {
    let source = InMemoryClaimSource::load_json_file(FIXTURES).await.unwrap();
    let service = ClaimsService::new(Arc::new(source), Arc::new(UnreachableStore));
    create_app(ClaimsServer::new(service))
}

#[tokio::test]
async fn test_root() {
    let (status, body) = get(fixture_app().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "System Operational", "streaming_enabled": false}));
}

#[tokio::test]
async fn test_health_connected() {
    let (status, body) = get(fixture_app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "db_status": "connected"}));
}

#[tokio::test]
async fn test_health_disconnected_still_answers_ok() {
    let (status, body) = get(unreachable_store_app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "unhealthy", "db_status": "disconnected"}));
}

#[tokio::test]
async fn test_list_claims() {
    let (status, body) = get(fixture_app().await, "/claims").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(
        body["available_claims"],
        json!(["1000003786", "2500112233", "2500665544", "2500778899", "2500891234", "2500998765"])
    );
}

#[tokio::test]
async fn test_raw_claim_is_returned_unchanged() {
    let (status, body) = get(fixture_app().await, "/claims/2500891234/raw").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resourceType"], "ExplanationOfBenefit");
    assert_eq!(body["id"], "ePaidDRG871-20250810");
}

#[tokio::test]
async fn test_summary_is_redacted_by_default() {
    let (status, body) = get(fixture_app().await, "/claims/2500891234/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["claim_id"], "2500891234");
    assert_eq!(body["patient_name"], "REDACTED");
    assert!(body.get("fhir_id").is_none());
    assert_eq!(body["billed_amount"], 72850.0);
    assert_eq!(body["paid_amount"], 35000.0);
}

#[tokio::test]
async fn test_summary_with_pii() {
    let (status, body) = get(fixture_app().await, "/claims/2500891234/summary?include_pii=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patient_name"], "Wilson, Michael");
    assert_eq!(body["fhir_id"], "ePaidDRG871-20250810");
}

#[rstest]
#[case("/claims/9999999999/summary")]
#[case("/claims/9999999999/summary?include_pii=true")]
#[case("/claims/9999999999/raw")]
#[tokio::test]
async fn test_unknown_claim_is_404(#[case] uri: &str) {
    let (status, body) = get(fixture_app().await, uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Claim not found"}));
}

#[tokio::test]
async fn test_blank_claim_id_is_400() {
    let (status, body) = get(fixture_app().await, "/claims/%20%20/summary").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Invalid claim ID"}));
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let (status, body) = get(unreachable_store_app().await, "/claims/2500891234/summary").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Internal Server Error"}));
}

#[tokio::test]
async fn test_mcp_tool_call_over_http() {
    let (status, body) = post_mcp(
        fixture_app().await,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "fetch_claim_health_record", "arguments": {"claim_id": "2500998765"}}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["id"], 7);
    assert_eq!(body["result"]["status"], "success");
    assert_eq!(body["result"]["data"]["patient_name"], "REDACTED");
    assert_eq!(body["result"]["data"]["claim_status"], "Denied - Service not covered under plan");
    assert_eq!(body["result"]["data"]["contractual_writeoff"], 98500.0);
}

#[tokio::test]
async fn test_mcp_tool_failure_is_opaque() {
    let (_, body) = post_mcp(
        unreachable_store_app().await,
        json!({
            "jsonrpc": "2.0",
            "id": 8,
            "method": "tools/call",
            "params": {"name": "fetch_claim_health_record", "arguments": {"claim_id": "2500891234"}}
        }),
    )
    .await;
    let body = body.unwrap();
    assert_eq!(body["result"]["status"], "error");
    assert_eq!(
        body["result"]["data"],
        json!({"error": "System error", "detail": "Unable to retrieve claim"})
    );
}

#[tokio::test]
async fn test_mcp_notification_is_accepted_without_body() {
    let (status, body) = post_mcp(
        fixture_app().await,
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_none());
}

#[tokio::test]
async fn test_mcp_non_request_json_is_invalid_request() {
    let (status, body) = post_mcp(fixture_app().await, json!({"jsonrpc": "2.0", "id": 9, "params": {}})).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["id"], 9);
    assert_eq!(body["error"]["code"], -32600);
}
