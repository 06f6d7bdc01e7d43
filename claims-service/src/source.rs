use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClaimsError, ClaimsResult};
use crate::fhir::ExplanationOfBenefit;

/// A claim document as received, plus its typed view
#[derive(Debug, Clone, PartialEq)]
pub struct RawClaim {
    document: Value,
    resource: ExplanationOfBenefit,
}

impl RawClaim {
    pub fn new(document: Value) -> Self {
        let resource = ExplanationOfBenefit::from_value(&document);
        Self { document, resource }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn resource(&self) -> &ExplanationOfBenefit {
        &self.resource
    }

    pub fn into_document(self) -> Value {
        self.document
    }
}

/// Fetch-by-id access to raw claim documents
#[async_trait]
pub trait ClaimSource: Send + Sync {
    async fn get(&self, claim_id: &str) -> ClaimsResult<Option<RawClaim>>;

    /// Every claim id this source can serve, sorted
    async fn list_ids(&self) -> ClaimsResult<Vec<String>>;
}

/// Claims held in memory, keyed by business claim id
#[derive(Debug, Clone, Default)]
pub struct InMemoryClaimSource {
    claims: HashMap<String, RawClaim>,
}

impl InMemoryClaimSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index ExplanationOfBenefit resources by their unique claim id.
    ///
    /// Resources without any usable id are skipped.
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut source = Self::new();
        for resource in resources {
            source.insert_resource(resource);
        }
        source
    }

    /// Index the ExplanationOfBenefit entries of a searchset Bundle
    pub fn from_bundle(bundle: &Value) -> Self {
        let mut source = Self::new();
        source.extend_from_json(bundle);
        source
    }

    /// Load a JSON file holding a Bundle, a bare resource, or an array of either
    pub async fn load_json_file(path: impl AsRef<Path>) -> ClaimsResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let document: Value = serde_json::from_str(&content)?;

        let mut source = Self::new();
        source.extend_from_json(&document);
        if source.is_empty() {
            return Err(ClaimsError::Fixture(format!(
                "no ExplanationOfBenefit resources in {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), claims = source.len(), "Loaded claim fixtures");
        Ok(source)
    }

    /// Store `document` under an explicit claim id
    pub fn insert(&mut self, claim_id: impl Into<String>, document: Value) {
        self.claims.insert(claim_id.into(), RawClaim::new(document));
    }

    /// Store a resource under its unique claim id, returning that id
    pub fn insert_resource(&mut self, document: Value) -> Option<String> {
        let claim = RawClaim::new(document);
        let claim_id = claim.resource().unique_claim_id()?.to_string();
        self.claims.insert(claim_id.clone(), claim);
        Some(claim_id)
    }

    fn extend_from_json(&mut self, document: &Value) {
        match document {
            Value::Array(values) => values.iter().for_each(|value| self.extend_from_json(value)),
            Value::Object(object) => match object.get("resourceType").and_then(Value::as_str) {
                Some("Bundle") => {
                    let entries = object.get("entry").and_then(Value::as_array);
                    for resource in entries.into_iter().flatten().filter_map(|entry| entry.get("resource")) {
                        self.extend_from_json(resource);
                    }
                }
                Some(ExplanationOfBenefit::RESOURCE_TYPE) => {
                    if self.insert_resource(document.clone()).is_none() {
                        tracing::warn!("Skipping ExplanationOfBenefit without an identifier or id");
                    }
                }
                other => tracing::debug!(resource_type = ?other, "Skipping non-claim resource"),
            },
            _ => tracing::debug!("Skipping non-object claim document"),
        }
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[async_trait]
impl ClaimSource for InMemoryClaimSource {
    async fn get(&self, claim_id: &str) -> ClaimsResult<Option<RawClaim>> {
        Ok(self.claims.get(claim_id).cloned())
    }

    async fn list_ids(&self) -> ClaimsResult<Vec<String>> {
        let mut ids: Vec<String> = self.claims.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
