//! Claims Service for Explanation of Benefit summarization
//!
//! Turns an adjudicated FHIR ExplanationOfBenefit into a flat,
//! patient-facing financial summary:
//! - Lenient claim model that never rejects a malformed document
//! - Code resolution against adjudication, group, CARC and RARC tables
//! - Derived totals (billed, paid, patient responsibility, write-off)
//! - Primary diagnosis and DRG extraction
//! - Redaction of identifying fields before a summary leaves the service
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use claims_service::{ClaimsService, InMemoryClaimSource, InMemoryCodeStore};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let mut claims = InMemoryClaimSource::new();
//! claims.insert_resource(json!({
//!     "resourceType": "ExplanationOfBenefit",
//!     "id": "eob-1",
//!     "identifier": [{"type": {"coding": [{"code": "uc"}]}, "value": "2500665544"}],
//!     "adjudication": [
//!         {"category": {"coding": [{"code": "PR"}]}, "reason": {"coding": [{"code": "1"}]}, "amount": {"value": 2500.0}}
//!     ]
//! }));
//!
//! let service = ClaimsService::new(Arc::new(claims), Arc::new(InMemoryCodeStore::standard()));
//! let summary = service.get_redacted_summary("2500665544").await.unwrap().unwrap();
//! assert_eq!(summary.patient_responsibility, 2500.0);
//! assert_eq!(summary.patient_name, "REDACTED");
//! # });
//! ```

pub mod error;
pub mod fhir;
pub mod models;
pub mod store;
pub mod pg_store;
pub mod reference_data;
pub mod resolver;
pub mod summarizer;
pub mod redaction;
pub mod source;
pub mod service;

pub use error::*;
pub use models::*;
pub use store::*;
pub use pg_store::*;
pub use resolver::*;
pub use summarizer::*;
pub use redaction::*;
pub use source::*;
pub use service::*;
