use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::server::ClaimsServer;

/// JSON-RPC over HTTP. Notifications are acknowledged with 202 and no body.
pub async fn handle_mcp(State(server): State<ClaimsServer>, body: String) -> Response {
    match server.mcp.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
