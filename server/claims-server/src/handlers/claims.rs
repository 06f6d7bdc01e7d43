use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use claims_service::normalize_claim_id;
use logger_redacted::global_redactor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::server::ClaimsServer;

#[derive(Debug, Serialize)]
pub struct ClaimListResponse {
    pub available_claims: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub include_pii: bool,
}

pub async fn list_claims(State(server): State<ClaimsServer>) -> ApiResult<Json<ClaimListResponse>> {
    let available_claims = server.claims.list_claim_ids().await?;
    Ok(Json(ClaimListResponse {
        total: available_claims.len(),
        available_claims,
    }))
}

pub async fn get_raw_claim(
    State(server): State<ClaimsServer>,
    Path(claim_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let claim_id = normalize_claim_id(&claim_id)?;
    server
        .claims
        .get_raw_claim(claim_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Redacted summary by default, the full summary with `?include_pii=true`
pub async fn get_claim_summary(
    State(server): State<ClaimsServer>,
    Path(claim_id): Path<String>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Response> {
    let claim_id = normalize_claim_id(&claim_id)?;

    if query.include_pii {
        let summary = server.claims.get_claim_summary(claim_id).await?.ok_or(ApiError::NotFound)?;
        tracing::info!(claim_id, "{}", pii_release_message(claim_id, &summary.patient_name));
        return Ok(Json(summary).into_response());
    }

    let summary = server
        .claims
        .get_redacted_summary(claim_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(summary).into_response())
}

/// Audit line for an unredacted release. The patient name is replaced by its
/// correlation tag, so releases for one patient can be grouped in the logs.
fn pii_release_message(claim_id: &str, patient_name: &str) -> String {
    global_redactor().redact_values(
        &format!("Unredacted summary of claim {} released for patient {}", claim_id, patient_name),
        &[patient_name],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pii_release_message_hides_patient_name() {
        let message = pii_release_message("2500891234", "Wilson, Michael");
        assert!(message.contains("2500891234"));
        assert!(!message.contains("Wilson"));
        assert!(!message.contains("Michael"));
    }

    #[test]
    fn test_pii_release_message_correlates_same_patient() {
        let first = pii_release_message("2500891234", "Wilson, Michael");
        let second = pii_release_message("2500665544", "Wilson, Michael");
        assert_eq!(first.split_whitespace().last(), second.split_whitespace().last());
    }
}
