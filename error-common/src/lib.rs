//! Common error handling utilities for the Claims Intelligence engine
//!
//! Every crate in the workspace keeps its own `thiserror` enum for the errors
//! it can produce. This crate holds the pieces they share at the edges:
//!
//! - **`PlatformError`**: the cross-crate error used by startup code
//!   (configuration, logging) and by the HTTP layer
//! - **Error codes**: stable identifiers attached to logged failures
//! - **Error context**: request and claim identifiers carried into logs
//! - **Reporting**: full-detail logging of a failure with a correlation id
//! - **Sanitization**: the opaque messages that are allowed to cross a trust
//!   boundary
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ErrorContext, ErrorReporter, PlatformError};
//!
//! let error = PlatformError::DatabaseError("connection reset".to_string());
//! let context = ErrorContext::new().with_claim_id("2500891234");
//!
//! // Full detail goes to the log, only the correlation id is kept
//! let error_id = ErrorReporter::new().report(&error, codes::database::QUERY_FAILED, &context);
//! assert!(!error_id.is_empty());
//!
//! // Callers on the other side of the boundary only ever see this
//! assert_eq!(error_common::external_message(&error), "Internal Server Error");
//! ```

pub mod types;
pub mod context;
pub mod codes;
pub mod reporting;
pub mod sanitization;

pub use types::*;
pub use context::*;
pub use reporting::*;
pub use sanitization::*;
