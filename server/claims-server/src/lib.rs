//! Claims Intelligence HTTP server
//!
//! Serves claim summaries over plain HTTP and exposes the
//! `fetch_claim_health_record` MCP tool at `POST /mcp`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use error::*;
pub use server::ClaimsServer;

use axum::{
    http::{header, Method},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router with all routes and middleware
pub fn create_app(server: ClaimsServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
        .with_state(server)
}

pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}
