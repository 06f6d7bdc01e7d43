//! `fetch_claim_health_record`: the one tool the assistant can call.
//!
//! Only redacted summaries cross this boundary. Failures are logged with
//! full detail and reported to the caller as a fixed, opaque object.

use async_trait::async_trait;
use claims_service::{normalize_claim_id, ClaimsError, ClaimsService, RedactedClaimSummary};
use error_common::{codes, ErrorContext, ErrorReporter, SYSTEM_ERROR};
use logger_redacted::redacted_error;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::McpResult;
use crate::protocol::{ToolInput, ToolResult};
use crate::tools::McpTool;

pub const TOOL_NAME: &str = "fetch_claim_health_record";

const INVALID_CLAIM_ID: &str = "Invalid claim ID";
const CLAIM_NOT_FOUND: &str = "Claim not found";
const RETRIEVAL_FAILED: &str = "Unable to retrieve claim";

/// Everything the tool can answer with
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClaimToolOutput {
    Summary(Box<RedactedClaimSummary>),
    InvalidClaimId { error: &'static str },
    NotFound { error: &'static str, claim_id: String },
    SystemError { error: &'static str, detail: &'static str },
}

impl ClaimToolOutput {
    fn invalid_claim_id() -> Self {
        Self::InvalidClaimId { error: INVALID_CLAIM_ID }
    }

    fn not_found(claim_id: &str) -> Self {
        Self::NotFound {
            error: CLAIM_NOT_FOUND,
            claim_id: claim_id.to_string(),
        }
    }

    fn system_error() -> Self {
        Self::SystemError {
            error: SYSTEM_ERROR,
            detail: RETRIEVAL_FAILED,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Summary(_))
    }
}

/// Look up a claim and return its redacted summary, or an error object.
///
/// `arguments` must be an object with a non-blank string `claim_id`.
pub async fn fetch_claim_health_record(service: &ClaimsService, arguments: &Value) -> ClaimToolOutput {
    let Some(raw_claim_id) = arguments.get("claim_id").and_then(Value::as_str) else {
        return ClaimToolOutput::invalid_claim_id();
    };
    let Ok(claim_id) = normalize_claim_id(raw_claim_id) else {
        return ClaimToolOutput::invalid_claim_id();
    };

    match service.get_redacted_summary(claim_id).await {
        Ok(Some(summary)) => ClaimToolOutput::Summary(Box::new(summary)),
        Ok(None) => ClaimToolOutput::not_found(claim_id),
        Err(error) => {
            let code = match &error {
                ClaimsError::Database(_) | ClaimsError::CodeStore(_) => codes::database::QUERY_FAILED,
                _ => codes::lookup::CLAIM_SOURCE_FAILED,
            };
            let context = ErrorContext::new()
                .with_new_request_id()
                .with_claim_id(claim_id)
                .with_operation(TOOL_NAME);
            let error_id = ErrorReporter::new().report(&error, code, &context);
            redacted_error!(error_id = error_id, error_code = code; "{} failed for claim {}", TOOL_NAME, claim_id);
            ClaimToolOutput::system_error()
        }
    }
}

/// [`fetch_claim_health_record`] registered as an MCP tool
pub struct FetchClaimHealthRecordTool {
    service: ClaimsService,
}

impl FetchClaimHealthRecordTool {
    pub fn new(service: ClaimsService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl McpTool for FetchClaimHealthRecordTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Fetch the adjudicated financial summary of a healthcare claim (Explanation of Benefit) by its claim ID. \
         Returns billed and paid amounts, patient responsibility, contractual write-offs, adjustment reasons, \
         diagnoses and DRG. Patient identity is redacted."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "claim_id": {
                    "type": "string",
                    "description": "Unique claim ID, e.g. 2500891234"
                }
            },
            "required": ["claim_id"]
        })
    }

    async fn execute(&self, input: ToolInput) -> McpResult<ToolResult> {
        let output = fetch_claim_health_record(&self.service, &input.arguments).await;
        let data = serde_json::to_value(&output)?;
        Ok(if output.is_error() {
            ToolResult::error(data)
        } else {
            ToolResult::success(data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(json!({"claim_id": ""}))]
    #[case(json!({"claim_id": "   "}))]
    #[case(json!({"claim_id": 2500891234u64}))]
    #[case(json!({"claim_id": null}))]
    #[case(json!({}))]
    #[case(json!("2500891234"))]
    #[tokio::test]
    async fn test_invalid_claim_id(#[case] arguments: Value) {
        let output = fetch_claim_health_record(&ClaimsService::default(), &arguments).await;
        assert_eq!(serde_json::to_value(&output).unwrap(), json!({"error": "Invalid claim ID"}));
        assert!(output.is_error());
    }

    #[tokio::test]
    async fn test_claim_not_found() {
        let output = fetch_claim_health_record(&ClaimsService::default(), &json!({"claim_id": " 9999999999 "})).await;
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"error": "Claim not found", "claim_id": "9999999999"})
        );
    }

    #[test]
    fn test_system_error_shape() {
        assert_eq!(
            serde_json::to_value(ClaimToolOutput::system_error()).unwrap(),
            json!({"error": "System error", "detail": "Unable to retrieve claim"})
        );
    }
}
