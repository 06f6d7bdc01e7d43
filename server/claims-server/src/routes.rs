pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{claims, mcp, system},
    server::ClaimsServer,
};

/// Create system status routes
pub fn system_routes() -> Router<ClaimsServer> {
    Router::new()
        .route(paths::system::ROOT, get(system::root))
        .route(paths::system::HEALTH, get(system::health_check))
}

/// Create claim lookup routes
pub fn claims_routes() -> Router<ClaimsServer> {
    Router::new()
        .route(paths::claims::CLAIMS, get(claims::list_claims))
        .route(paths::claims::RAW, get(claims::get_raw_claim))
        .route(paths::claims::SUMMARY, get(claims::get_claim_summary))
}

/// Create the MCP JSON-RPC endpoint
pub fn mcp_routes() -> Router<ClaimsServer> {
    Router::new().route(paths::mcp::MCP, post(mcp::handle_mcp))
}

pub fn create_routes() -> Router<ClaimsServer> {
    Router::new()
        .merge(system_routes())
        .merge(claims_routes())
        .merge(mcp_routes())
}
