use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ClaimsResult;
use crate::models::{AdjudicationValueCode, CarcCode, ClaimAdjustmentGroupCode, RarcCode};
use crate::reference_data;

/// Point lookups into the adjudication reference tables.
///
/// A miss is `Ok(None)`; `Err` means the store itself failed.
#[async_trait]
pub trait CodeReferenceStore: Send + Sync {
    async fn adjudication_value(&self, code: &str) -> ClaimsResult<Option<AdjudicationValueCode>>;

    async fn adjustment_group(&self, code: &str) -> ClaimsResult<Option<ClaimAdjustmentGroupCode>>;

    async fn carc(&self, code: &str) -> ClaimsResult<Option<CarcCode>>;

    async fn rarc(&self, code: &str) -> ClaimsResult<Option<RarcCode>>;

    async fn health_check(&self) -> ClaimsResult<()> {
        Ok(())
    }
}

/// HashMap-backed code tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryCodeStore {
    adjudication_values: HashMap<String, AdjudicationValueCode>,
    adjustment_groups: HashMap<String, ClaimAdjustmentGroupCode>,
    carc_codes: HashMap<String, CarcCode>,
    rarc_codes: HashMap<String, RarcCode>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables seeded with the standard adjudication, group, CARC and RARC codes
    pub fn standard() -> Self {
        Self::new()
            .with_rows(reference_data::adjudication_value_codes(), Self::with_adjudication_value)
            .with_rows(reference_data::adjustment_group_codes(), Self::with_adjustment_group)
            .with_rows(reference_data::carc_codes(), Self::with_carc)
            .with_rows(reference_data::rarc_codes(), Self::with_rarc)
    }

    fn with_rows<T>(self, rows: Vec<T>, add: fn(Self, T) -> Self) -> Self {
        rows.into_iter().fold(self, add)
    }

    pub fn with_adjudication_value(mut self, row: AdjudicationValueCode) -> Self {
        self.adjudication_values.insert(row.code.clone(), row);
        self
    }

    pub fn with_adjustment_group(mut self, row: ClaimAdjustmentGroupCode) -> Self {
        self.adjustment_groups.insert(row.code.clone(), row);
        self
    }

    pub fn with_carc(mut self, row: CarcCode) -> Self {
        self.carc_codes.insert(row.code.clone(), row);
        self
    }

    pub fn with_rarc(mut self, row: RarcCode) -> Self {
        self.rarc_codes.insert(row.code.clone(), row);
        self
    }

    /// Row counts per table, in lookup order
    pub fn table_sizes(&self) -> [usize; 4] {
        [
            self.adjudication_values.len(),
            self.adjustment_groups.len(),
            self.carc_codes.len(),
            self.rarc_codes.len(),
        ]
    }
}

#[async_trait]
impl CodeReferenceStore for InMemoryCodeStore {
    async fn adjudication_value(&self, code: &str) -> ClaimsResult<Option<AdjudicationValueCode>> {
        Ok(self.adjudication_values.get(code).cloned())
    }

    async fn adjustment_group(&self, code: &str) -> ClaimsResult<Option<ClaimAdjustmentGroupCode>> {
        Ok(self.adjustment_groups.get(code).cloned())
    }

    async fn carc(&self, code: &str) -> ClaimsResult<Option<CarcCode>> {
        Ok(self.carc_codes.get(code).cloned())
    }

    async fn rarc(&self, code: &str) -> ClaimsResult<Option<RarcCode>> {
        Ok(self.rarc_codes.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Responsibility;

    #[tokio::test]
    async fn test_standard_tables_are_seeded() {
        let store = InMemoryCodeStore::standard();
        assert!(store.table_sizes().iter().all(|size| *size > 0));

        let benefit = store.adjudication_value("benefit").await.unwrap().unwrap();
        assert_eq!(benefit.display, "Benefit Amount");

        let pr = store.adjustment_group("PR").await.unwrap().unwrap();
        assert_eq!(pr.responsibility, Responsibility::Patient);

        let co = store.adjustment_group("CO").await.unwrap().unwrap();
        assert_eq!(co.responsibility, Responsibility::Provider);

        assert!(store.carc("96").await.unwrap().is_some_and(|row| row.action_hint.is_some()));
        assert!(store.rarc("N130").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_lookups_are_exact_match() {
        let store = InMemoryCodeStore::standard();
        assert!(store.adjustment_group("co").await.unwrap().is_none());
        assert!(store.carc(" 96").await.unwrap().is_none());
        assert!(store.adjudication_value("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_builder_overrides_rows() {
        let store = InMemoryCodeStore::new().with_carc(CarcCode {
            code: "45".into(),
            description: "Charge exceeds fee schedule".into(),
            action_hint: None,
            start_date: None,
        });
        assert_eq!(store.table_sizes(), [0, 0, 1, 0]);
        assert!(store.carc("45").await.unwrap().is_some_and(|row| row.action_hint.is_none()));
        assert!(store.health_check().await.is_ok());
    }
}
