//! Model Context Protocol (MCP) Server for claim summaries
//!
//! Exposes the claims service to conversational assistants as a single
//! MCP tool, `fetch_claim_health_record`, which returns the redacted
//! summary of one claim.
//!
//! # Architecture
//!
//! The MCP server acts as a bridge between:
//! - AI agents/clients (JSON-RPC over stdio, or HTTP via `claims-server`)
//! - The claims service (lookup, summarization, redaction)
//!
//! # Example
//!
//! ```rust
//! use mcp_server::{McpRequest, Server};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let server = Server::default();
//! let response = server
//!     .handle_request(McpRequest::new(1, "tools/call", json!({
//!         "name": "fetch_claim_health_record",
//!         "arguments": {"claim_id": "9999999999"}
//!     })))
//!     .await;
//! assert_eq!(response.result.unwrap()["data"]["error"], "Claim not found");
//! # });
//! ```

pub mod server;
pub mod protocol;
pub mod tools;
pub mod claim_tool;
pub mod capabilities;
pub mod transport;
pub mod error;

pub use server::*;
pub use protocol::*;
pub use tools::*;
pub use claim_tool::*;
pub use capabilities::*;
pub use transport::*;
pub use error::{McpError as Error, McpResult as Result};
