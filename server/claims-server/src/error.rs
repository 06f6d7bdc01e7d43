use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use claims_service::ClaimsError;
use error_common::{external_message, ErrorContext, ErrorReporter, PlatformError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CLAIM_NOT_FOUND: &str = "Claim not found";

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Claim not found")]
    NotFound,

    #[error(transparent)]
    Claims(#[from] ClaimsError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Claims(ClaimsError::InvalidClaimId) => StatusCode::BAD_REQUEST,
            ApiError::Claims(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for PlatformError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound => PlatformError::NotFound(CLAIM_NOT_FOUND.to_string()),
            ApiError::Claims(error) => error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let platform = PlatformError::from(self);

        if !platform.is_client_error() {
            let context = ErrorContext::new()
                .with_new_request_id()
                .with_operation("http")
                .add_context("error_type", platform.error_type());
            let error_id = ErrorReporter::new().report(&platform, platform.code(), &context);
            tracing::error!(error_id = %error_id, status = status.as_u16(), "Request failed");
        }

        let body = ApiErrorResponse {
            detail: external_message(&platform),
        };
        (status, Json(body)).into_response()
    }
}
