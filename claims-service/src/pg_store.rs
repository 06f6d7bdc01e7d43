use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres, Row};

use crate::error::{ClaimsError, ClaimsResult};
use crate::models::{AdjudicationValueCode, CarcCode, ClaimAdjustmentGroupCode, RarcCode, Responsibility};
use crate::reference_data;
use crate::store::CodeReferenceStore;

/// Code reference tables in Postgres
#[derive(Debug, Clone)]
pub struct PgCodeStore {
    pool: Pool<Postgres>,
}

impl PgCodeStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> ClaimsResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the reference tables if they do not exist yet
    pub async fn migrate(&self) -> ClaimsResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Insert the standard code rows, leaving existing rows alone
    pub async fn seed_standard_codes(&self) -> ClaimsResult<()> {
        let mut tx = self.pool.begin().await?;

        for row in reference_data::adjudication_value_codes() {
            sqlx::query(
                "INSERT INTO adjudication_value_codes (code, display, definition) VALUES ($1, $2, $3) \
                 ON CONFLICT (code) DO NOTHING",
            )
            .bind(&row.code)
            .bind(&row.display)
            .bind(&row.definition)
            .execute(&mut *tx)
            .await?;
        }

        for row in reference_data::adjustment_group_codes() {
            sqlx::query(
                "INSERT INTO claim_adjustment_group_codes (code, description, responsibility, start_date) \
                 VALUES ($1, $2, $3, $4) ON CONFLICT (code) DO NOTHING",
            )
            .bind(&row.code)
            .bind(&row.description)
            .bind(row.responsibility.to_string())
            .bind(row.start_date)
            .execute(&mut *tx)
            .await?;
        }

        for row in reference_data::carc_codes() {
            sqlx::query(
                "INSERT INTO carc_codes (code, description, action_hint, start_date) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (code) DO NOTHING",
            )
            .bind(&row.code)
            .bind(&row.description)
            .bind(&row.action_hint)
            .bind(row.start_date)
            .execute(&mut *tx)
            .await?;
        }

        for row in reference_data::rarc_codes() {
            sqlx::query(
                "INSERT INTO rarc_codes (code, description, start_date) VALUES ($1, $2, $3) \
                 ON CONFLICT (code) DO NOTHING",
            )
            .bind(&row.code)
            .bind(&row.description)
            .bind(row.start_date)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!("Standard code reference rows seeded");
        Ok(())
    }
}

#[async_trait]
impl CodeReferenceStore for PgCodeStore {
    async fn adjudication_value(&self, code: &str) -> ClaimsResult<Option<AdjudicationValueCode>> {
        let row = sqlx::query_as::<_, AdjudicationValueCode>(
            r#"
            SELECT code, COALESCE(display, '') AS display, COALESCE(definition, '') AS definition
            FROM adjudication_value_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn adjustment_group(&self, code: &str) -> ClaimsResult<Option<ClaimAdjustmentGroupCode>> {
        let row = sqlx::query(
            r#"
            SELECT code, COALESCE(description, '') AS description, responsibility, start_date
            FROM claim_adjustment_group_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let responsibility: Option<String> = row.try_get("responsibility")?;
        let responsibility = responsibility
            .as_deref()
            .unwrap_or_default()
            .parse::<Responsibility>()
            .map_err(|e| ClaimsError::CodeStore(format!("adjustment group {}: {}", code, e)))?;

        Ok(Some(ClaimAdjustmentGroupCode {
            code: row.try_get("code")?,
            description: row.try_get("description")?,
            responsibility,
            start_date: row.try_get::<Option<NaiveDate>, _>("start_date")?,
        }))
    }

    async fn carc(&self, code: &str) -> ClaimsResult<Option<CarcCode>> {
        let row = sqlx::query_as::<_, CarcCode>(
            r#"
            SELECT code, COALESCE(description, '') AS description, action_hint, start_date
            FROM carc_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn rarc(&self, code: &str) -> ClaimsResult<Option<RarcCode>> {
        let row = sqlx::query_as::<_, RarcCode>(
            r#"
            SELECT code, COALESCE(description, '') AS description, start_date
            FROM rarc_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn health_check(&self) -> ClaimsResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
