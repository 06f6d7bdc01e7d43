use std::sync::Arc;

use anyhow::Context;
use claims_service::{
    ClaimSource, ClaimsService, CodeReferenceStore, InMemoryClaimSource, InMemoryCodeStore, PgCodeStore,
};
use mcp_server::Server as McpServer;
use tracing::info;

use crate::config::AppConfig;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct ClaimsServer {
    pub claims: ClaimsService,
    pub mcp: Arc<McpServer>,
}

impl ClaimsServer {
    pub fn new(claims: ClaimsService) -> Self {
        let mcp = Arc::new(McpServer::for_claims(claims.clone()));
        Self { claims, mcp }
    }

    /// Build the claim source and code store described by `config`
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let codes: Arc<dyn CodeReferenceStore> = match &config.database.url {
            Some(url) => {
                let store = PgCodeStore::connect(url, config.database.max_connections)
                    .await
                    .context("Failed to connect to the code reference database")?;
                if config.database.run_migrations {
                    store.migrate().await.context("Failed to migrate code reference tables")?;
                    store
                        .seed_standard_codes()
                        .await
                        .context("Failed to seed standard codes")?;
                    info!("Code reference tables migrated and seeded");
                }
                Arc::new(store)
            }
            None => {
                info!("No database configured, using built-in code tables");
                Arc::new(InMemoryCodeStore::standard())
            }
        };

        let source: Arc<dyn ClaimSource> = match &config.claims.fixture_path {
            Some(path) => {
                let source = InMemoryClaimSource::load_json_file(path)
                    .await
                    .with_context(|| format!("Failed to load claims from {}", path.display()))?;
                info!(claims = source.len(), path = %path.display(), "Loaded claim fixtures");
                Arc::new(source)
            }
            None => {
                info!("No claim fixture configured, claim source is empty");
                Arc::new(InMemoryClaimSource::new())
            }
        };

        Ok(Self::new(ClaimsService::new(source, codes)))
    }
}

impl std::fmt::Debug for ClaimsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsServer").finish_non_exhaustive()
    }
}

impl Default for ClaimsServer {
    fn default() -> Self {
        Self::new(ClaimsService::default())
    }
}
