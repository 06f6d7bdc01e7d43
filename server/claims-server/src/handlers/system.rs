use axum::{extract::State, Json};
use error_common::{codes, ErrorContext, ErrorReporter};
use serde::Serialize;

use crate::server::ClaimsServer;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub streaming_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db_status: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "System Operational",
        streaming_enabled: false,
    })
}

/// Reports store reachability; always answers 200 so probes can read the body
pub async fn health_check(State(server): State<ClaimsServer>) -> Json<HealthResponse> {
    let response = match server.claims.health_check().await {
        Ok(()) => HealthResponse {
            status: "healthy",
            db_status: "connected",
        },
        Err(error) => {
            let context = ErrorContext::new().with_operation("health_check");
            ErrorReporter::new().report(&error, codes::database::CONNECTION_FAILED, &context);
            HealthResponse {
                status: "unhealthy",
                db_status: "disconnected",
            }
        }
    };
    Json(response)
}
