use crate::error::ClaimsResult;
use crate::models::{ReasonType, Responsibility};
use crate::store::CodeReferenceStore;

/// Placeholder for anything the claim or the code tables do not supply
pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_CARC: &str = "Unknown CARC";
pub const UNKNOWN_RARC: &str = "Unknown RARC";

/// Reason systems containing this fragment carry RARC codes
pub const RARC_SYSTEM_FRAGMENT: &str = "remittance-advice-remark-codes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResolution {
    pub label: String,
    pub definition: String,
    pub responsibility: Option<Responsibility>,
}

impl CategoryResolution {
    fn unknown() -> Self {
        Self {
            label: UNKNOWN.to_string(),
            definition: UNKNOWN.to_string(),
            responsibility: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonResolution {
    pub reason_type: ReasonType,
    pub description: String,
    pub action_hint: Option<String>,
}

/// Which code set a reason system URI points at
pub fn classify_reason_system(system_uri: &str) -> ReasonType {
    if system_uri.contains(RARC_SYSTEM_FRAGMENT) {
        ReasonType::Rarc
    } else {
        ReasonType::Carc
    }
}

/// Turns adjudication category and reason codes into human-readable labels
pub struct CodeResolver<'a> {
    store: &'a dyn CodeReferenceStore,
}

impl<'a> CodeResolver<'a> {
    pub fn new(store: &'a dyn CodeReferenceStore) -> Self {
        Self { store }
    }

    /// Adjudication value codes win over adjustment group codes.
    ///
    /// Value codes carry no responsibility. A code found in neither table
    /// resolves to "Unknown".
    pub async fn resolve_category(&self, code: &str) -> ClaimsResult<CategoryResolution> {
        if let Some(value) = self.store.adjudication_value(code).await? {
            return Ok(CategoryResolution {
                label: value.display,
                definition: value.definition,
                responsibility: None,
            });
        }

        if let Some(group) = self.store.adjustment_group(code).await? {
            return Ok(CategoryResolution {
                label: group.description.clone(),
                definition: group.description,
                responsibility: Some(group.responsibility),
            });
        }

        tracing::debug!(code, "Unrecognized adjudication category");
        Ok(CategoryResolution::unknown())
    }

    pub async fn resolve_reason(&self, code: &str, system_uri: &str) -> ClaimsResult<ReasonResolution> {
        let resolution = match classify_reason_system(system_uri) {
            ReasonType::Rarc => ReasonResolution {
                reason_type: ReasonType::Rarc,
                description: self
                    .store
                    .rarc(code)
                    .await?
                    .map_or_else(|| UNKNOWN_RARC.to_string(), |row| row.description),
                action_hint: None,
            },
            ReasonType::Carc => match self.store.carc(code).await? {
                Some(row) => ReasonResolution {
                    reason_type: ReasonType::Carc,
                    description: row.description,
                    action_hint: row.action_hint,
                },
                None => ReasonResolution {
                    reason_type: ReasonType::Carc,
                    description: UNKNOWN_CARC.to_string(),
                    action_hint: None,
                },
            },
        };
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdjudicationValueCode, ClaimAdjustmentGroupCode, RarcCode};
    use crate::store::InMemoryCodeStore;
    use rstest::rstest;

    #[rstest]
    #[case("http://www.x12.org/codes/remittance-advice-remark-codes", ReasonType::Rarc)]
    #[case("https://x12.org/codes/remittance-advice-remark-codes/", ReasonType::Rarc)]
    #[case("http://www.x12.org/codes/claim-adjustment-reason-codes", ReasonType::Carc)]
    #[case("", ReasonType::Carc)]
    fn test_classify_reason_system(#[case] system: &str, #[case] expected: ReasonType) {
        assert_eq!(classify_reason_system(system), expected);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let store = InMemoryCodeStore::standard();
        let resolver = CodeResolver::new(&store);

        let resolution = resolver.resolve_category("ZZ").await.unwrap();
        assert_eq!(resolution.label, "Unknown");
        assert_eq!(resolution.definition, "Unknown");
        assert_eq!(resolution.responsibility, None);
    }

    #[tokio::test]
    async fn test_group_code_carries_responsibility() {
        let store = InMemoryCodeStore::standard();
        let resolver = CodeResolver::new(&store);

        let pr = resolver.resolve_category("PR").await.unwrap();
        assert_eq!(pr.label, "Patient Responsibility");
        assert_eq!(pr.definition, pr.label);
        assert_eq!(pr.responsibility, Some(Responsibility::Patient));
    }

    #[tokio::test]
    async fn test_value_table_takes_precedence() {
        let store = InMemoryCodeStore::new()
            .with_adjudication_value(AdjudicationValueCode {
                code: "PR".into(),
                display: "Shadowed".into(),
                definition: "Value-code definition".into(),
            })
            .with_adjustment_group(ClaimAdjustmentGroupCode {
                code: "PR".into(),
                description: "Patient Responsibility".into(),
                responsibility: Responsibility::Patient,
                start_date: None,
            });
        let resolver = CodeResolver::new(&store);

        let resolution = resolver.resolve_category("PR").await.unwrap();
        assert_eq!(resolution.label, "Shadowed");
        assert_eq!(resolution.definition, "Value-code definition");
        assert_eq!(resolution.responsibility, None);
    }

    #[tokio::test]
    async fn test_carc_with_action_hint() {
        let store = InMemoryCodeStore::standard();
        let resolver = CodeResolver::new(&store);

        let reason = resolver.resolve_reason("96", "").await.unwrap();
        assert_eq!(reason.reason_type, ReasonType::Carc);
        assert_eq!(reason.description, "Non-covered charge(s).");
        assert!(reason.action_hint.is_some());
    }

    #[tokio::test]
    async fn test_unknown_codes_use_placeholders() {
        let store = InMemoryCodeStore::standard();
        let resolver = CodeResolver::new(&store);

        let carc = resolver.resolve_reason("A99", "http://www.x12.org/codes/claim-adjustment-reason-codes").await.unwrap();
        assert_eq!(carc.description, UNKNOWN_CARC);
        assert_eq!(carc.action_hint, None);

        let rarc = resolver.resolve_reason("N9999", "http://www.x12.org/codes/remittance-advice-remark-codes").await.unwrap();
        assert_eq!(rarc.reason_type, ReasonType::Rarc);
        assert_eq!(rarc.description, UNKNOWN_RARC);
    }

    #[tokio::test]
    async fn test_rarc_never_has_action_hint() {
        let store = InMemoryCodeStore::new().with_rarc(RarcCode {
            code: "N130".into(),
            description: "Consult plan benefit documents".into(),
            start_date: None,
        });
        let resolver = CodeResolver::new(&store);

        let rarc = resolver.resolve_reason("N130", "remittance-advice-remark-codes").await.unwrap();
        assert_eq!(rarc.description, "Consult plan benefit documents");
        assert_eq!(rarc.action_hint, None);
    }
}
