use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Error context information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    pub request_id: Option<String>,
    pub claim_id: Option<String>,
    pub operation: Option<String>,
    pub additional: HashMap<String, String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id<S: Into<String>>(mut self, request_id: S) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach a freshly generated request id
    pub fn with_new_request_id(self) -> Self {
        self.with_request_id(Uuid::new_v4().to_string())
    }

    pub fn with_claim_id<S: Into<String>>(mut self, claim_id: S) -> Self {
        self.claim_id = Some(claim_id.into());
        self
    }

    pub fn with_operation<S: Into<String>>(mut self, operation: S) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn add_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}
