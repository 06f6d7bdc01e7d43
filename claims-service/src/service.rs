use std::sync::Arc;

use serde_json::Value;

use crate::error::{ClaimsError, ClaimsResult};
use crate::models::{ClaimSummary, RedactedClaimSummary};
use crate::redaction::redact;
use crate::resolver::CodeResolver;
use crate::source::{ClaimSource, InMemoryClaimSource};
use crate::store::{CodeReferenceStore, InMemoryCodeStore};
use crate::summarizer::ClaimSummarizer;

/// Trim a caller-supplied claim id, rejecting blank input
pub fn normalize_claim_id(input: &str) -> ClaimsResult<&str> {
    let claim_id = input.trim();
    if claim_id.is_empty() {
        return Err(ClaimsError::InvalidClaimId);
    }
    Ok(claim_id)
}

/// Claims service: claim lookup, summarization and redaction
#[derive(Clone)]
pub struct ClaimsService {
    source: Arc<dyn ClaimSource>,
    codes: Arc<dyn CodeReferenceStore>,
}

impl ClaimsService {
    /// Create a claims service over the given collaborators
    pub fn new(source: Arc<dyn ClaimSource>, codes: Arc<dyn CodeReferenceStore>) -> Self {
        Self { source, codes }
    }

    /// Full summary, including the patient name and internal document id
    pub async fn get_claim_summary(&self, claim_id: &str) -> ClaimsResult<Option<ClaimSummary>> {
        let Some(raw) = self.source.get(claim_id).await? else {
            tracing::debug!(claim_id, "Claim not found");
            return Ok(None);
        };

        let summarizer = ClaimSummarizer::new(CodeResolver::new(self.codes.as_ref()));
        let summary = summarizer.summarize(claim_id, raw.resource()).await?;
        Ok(Some(summary))
    }

    /// Summary safe to hand to the conversational assistant
    pub async fn get_redacted_summary(&self, claim_id: &str) -> ClaimsResult<Option<RedactedClaimSummary>> {
        Ok(self.get_claim_summary(claim_id).await?.as_ref().map(redact))
    }

    /// The claim document exactly as the source holds it
    pub async fn get_raw_claim(&self, claim_id: &str) -> ClaimsResult<Option<Value>> {
        Ok(self.source.get(claim_id).await?.map(|raw| raw.into_document()))
    }

    pub async fn list_claim_ids(&self) -> ClaimsResult<Vec<String>> {
        self.source.list_ids().await
    }

    /// Reachability of the code reference store
    pub async fn health_check(&self) -> ClaimsResult<()> {
        self.codes.health_check().await
    }
}

impl Default for ClaimsService {
    /// No claims, standard code tables
    fn default() -> Self {
        Self::new(Arc::new(InMemoryClaimSource::new()), Arc::new(InMemoryCodeStore::standard()))
    }
}
