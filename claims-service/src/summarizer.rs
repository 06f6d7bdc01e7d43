//! Folds an adjudicated claim into a flat, patient-facing summary.
//!
//! Missing pieces of the claim never fail summarization; each one has a
//! fixed default. The only error path is the code reference store.

use crate::error::ClaimsResult;
use crate::fhir::{Adjudication, CodeableConcept, ExplanationOfBenefit, Item, Total};
use crate::models::{
    AdjustmentEntry, CategoryDetail, ClaimSummary, DiagnosisEntry, LineItemSummary, ReasonDetail, ServicePeriod,
};
use crate::resolver::{CodeResolver, UNKNOWN};

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DISPOSITION: &str = "Not specified";
pub const DEFAULT_OUTCOME: &str = "unknown";
pub const PAYMENT_PENDING: &str = "Pending";
pub const UNKNOWN_SERVICE: &str = "Unknown Service";

pub const SUBMITTED_TOTAL: &str = "submitted";
pub const BENEFIT_TOTAL: &str = "benefit";
pub const PATIENT_RESPONSIBILITY_GROUP: &str = "PR";
pub const CONTRACTUAL_OBLIGATION_GROUP: &str = "CO";

/// Diagnosis type displays that mark the primary diagnosis
pub const PRIMARY_DIAGNOSIS_TYPES: [&str; 2] = ["principal", "Admitting Diagnosis"];

/// First item in source order satisfying `predicate`
pub fn first_match<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    for item in items {
        if predicate(item) {
            return Some(item);
        }
    }
    None
}

pub struct ClaimSummarizer<'a> {
    resolver: CodeResolver<'a>,
}

impl<'a> ClaimSummarizer<'a> {
    pub fn new(resolver: CodeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Build the summary for `claim`, reported under `claim_id`
    pub async fn summarize(&self, claim_id: &str, claim: &ExplanationOfBenefit) -> ClaimsResult<ClaimSummary> {
        let diagnoses: Vec<DiagnosisEntry> = claim.diagnosis.iter().map(|diagnosis| {
            let coding = diagnosis
                .diagnosis_codeable_concept
                .as_ref()
                .and_then(CodeableConcept::first_coding);
            DiagnosisEntry {
                code: coding.and_then(|c| c.code.clone()),
                description: coding
                    .and_then(|c| c.display.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                diagnosis_type: diagnosis
                    .r#type
                    .first()
                    .and_then(CodeableConcept::first_display)
                    .unwrap_or(UNKNOWN)
                    .to_string(),
            }
        }).collect();

        let adjustments = self.resolve_adjudications(&claim.adjudication).await?;

        let mut line_items = Vec::with_capacity(claim.item.len());
        for item in &claim.item {
            line_items.push(LineItemSummary {
                service: service_label(item),
                adjudications: self.resolve_adjudications(&item.adjudication).await?,
            });
        }

        let primary_diagnosis = first_match(&diagnoses, |d| PRIMARY_DIAGNOSIS_TYPES.contains(&d.diagnosis_type.as_str()))
            .map_or_else(
                || UNKNOWN.to_string(),
                |d| format!("{} – {}", d.code.as_deref().unwrap_or(UNKNOWN), d.description),
            );

        let drg_code = first_match(&claim.diagnosis, |d| d.package_code.as_ref().is_some_and(|p| !p.is_empty()))
            .and_then(|d| d.package_code.as_ref())
            .and_then(CodeableConcept::first_code)
            .map(str::to_string);

        let billable_period = claim.billable_period.clone().unwrap_or_default();

        let summary = ClaimSummary {
            claim_id: claim_id.to_string(),
            fhir_id: claim.id.clone(),
            patient_name: claim
                .patient
                .as_ref()
                .and_then(|patient| patient.display.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            claim_status: claim.disposition.clone().unwrap_or_else(|| DEFAULT_DISPOSITION.to_string()),
            processing_status: claim.outcome.clone().unwrap_or_else(|| DEFAULT_OUTCOME.to_string()),
            payment_date: claim
                .payment
                .as_ref()
                .and_then(|payment| payment.date.clone())
                .unwrap_or_else(|| PAYMENT_PENDING.to_string()),
            service_period: ServicePeriod {
                start: billable_period.start,
                end: billable_period.end,
            },
            billed_amount: total_amount(&claim.total, SUBMITTED_TOTAL),
            paid_amount: total_amount(&claim.total, BENEFIT_TOTAL),
            patient_responsibility: sum_for_group(&adjustments, PATIENT_RESPONSIBILITY_GROUP),
            contractual_writeoff: sum_for_group(&adjustments, CONTRACTUAL_OBLIGATION_GROUP),
            diagnoses,
            adjustments,
            line_items,
            primary_diagnosis,
            drg_code,
        };

        tracing::debug!(
            claim_id,
            adjustments = summary.adjustments.len(),
            line_items = summary.line_items.len(),
            "Claim summarized"
        );
        Ok(summary)
    }

    async fn resolve_adjudications(&self, adjudications: &[Adjudication]) -> ClaimsResult<Vec<AdjustmentEntry>> {
        let mut entries = Vec::with_capacity(adjudications.len());
        for adjudication in adjudications {
            entries.push(self.resolve_adjudication(adjudication).await?);
        }
        Ok(entries)
    }

    async fn resolve_adjudication(&self, adjudication: &Adjudication) -> ClaimsResult<AdjustmentEntry> {
        let mut entry = AdjustmentEntry {
            amount: adjudication.amount.as_ref().and_then(|money| money.value).unwrap_or(0.0),
            currency: DEFAULT_CURRENCY.to_string(),
            category: None,
            reason: None,
        };

        let category_code = adjudication
            .category
            .as_ref()
            .and_then(CodeableConcept::first_code)
            .filter(|code| !code.is_empty());
        if let Some(code) = category_code {
            let resolution = self.resolver.resolve_category(code).await?;
            entry.category = Some(CategoryDetail {
                category_code: code.to_string(),
                category_label: resolution.label,
                financial_responsibility: resolution.responsibility,
            });
        }

        let reason_coding = adjudication.reason.as_ref().and_then(CodeableConcept::first_coding);
        if let Some(coding) = reason_coding {
            if let Some(code) = coding.code.as_deref().filter(|code| !code.is_empty()) {
                let system = coding.system.as_deref().unwrap_or_default();
                let resolution = self.resolver.resolve_reason(code, system).await?;
                entry.reason = Some(ReasonDetail {
                    reason_type: resolution.reason_type,
                    reason_code: code.to_string(),
                    description: resolution.description,
                    action_needed: resolution.action_hint,
                });
            }
        }

        Ok(entry)
    }
}

fn service_label(item: &Item) -> String {
    if let Some(product) = item.product_or_service.as_ref().filter(|p| !p.coding.is_empty()) {
        return product.first_display().unwrap_or(UNKNOWN_SERVICE).to_string();
    }
    if let Some(revenue) = item.revenue.as_ref().filter(|r| !r.coding.is_empty()) {
        return format!("Revenue Code {}", revenue.first_code().unwrap_or("???"));
    }
    UNKNOWN_SERVICE.to_string()
}

fn total_amount(totals: &[Total], category: &str) -> f64 {
    first_match(totals, |total| {
        total.category.as_ref().and_then(CodeableConcept::first_code) == Some(category)
    })
    .and_then(|total| total.amount.as_ref())
    .and_then(|money| money.value)
    .unwrap_or(0.0)
}

fn sum_for_group(adjustments: &[AdjustmentEntry], group: &str) -> f64 {
    adjustments
        .iter()
        .filter(|entry| entry.category_code() == Some(group))
        .map(|entry| entry.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReasonType, Responsibility};
    use crate::store::InMemoryCodeStore;
    use serde_json::json;

    async fn summarize(document: serde_json::Value) -> ClaimSummary {
        let store = InMemoryCodeStore::standard();
        let summarizer = ClaimSummarizer::new(CodeResolver::new(&store));
        summarizer
            .summarize("CLM-1", &ExplanationOfBenefit::from_value(&document))
            .await
            .unwrap()
    }

    #[test]
    fn test_first_match_is_source_order() {
        let items = [1, 4, 6, 8];
        assert_eq!(first_match(&items, |n| n % 2 == 0), Some(&4));
        assert_eq!(first_match(&items, |n| *n > 10), None);
        assert_eq!(first_match::<i32, _>(&[], |_| true), None);
    }

    #[tokio::test]
    async fn test_empty_claim_uses_defaults() {
        let summary = summarize(json!({})).await;

        assert_eq!(summary.claim_id, "CLM-1");
        assert_eq!(summary.fhir_id, None);
        assert_eq!(serde_json::to_value(&summary).unwrap()["fhir_id"], serde_json::Value::Null);
        assert!(serde_json::to_value(&summary).unwrap().as_object().unwrap().contains_key("fhir_id"));
        assert_eq!(summary.patient_name, "Unknown");
        assert_eq!(summary.claim_status, "Not specified");
        assert_eq!(summary.processing_status, "unknown");
        assert_eq!(summary.payment_date, "Pending");
        assert_eq!(summary.service_period, ServicePeriod::default());
        assert!(summary.adjustments.is_empty());
        assert!(summary.line_items.is_empty());
        assert_eq!(summary.billed_amount, 0.0);
        assert_eq!(summary.paid_amount, 0.0);
        assert_eq!(summary.patient_responsibility, 0.0);
        assert_eq!(summary.contractual_writeoff, 0.0);
        assert_eq!(summary.primary_diagnosis, "Unknown");
        assert_eq!(summary.drg_code, None);
    }

    #[tokio::test]
    async fn test_adjudication_without_codings_is_amount_only() {
        let summary = summarize(json!({
            "adjudication": [{"amount": {"value": 40.0}}, {"category": {"coding": []}}]
        }))
        .await;

        assert_eq!(summary.adjustments.len(), 2);
        assert_eq!(summary.adjustments[0].amount, 40.0);
        assert!(summary.adjustments[0].category.is_none());
        assert!(summary.adjustments[0].reason.is_none());
        assert_eq!(summary.adjustments[1].amount, 0.0);
        assert!(summary.adjustments[1].category.is_none());
    }

    #[tokio::test]
    async fn test_resolves_category_and_reason() {
        let summary = summarize(json!({
            "adjudication": [{
                "category": {"coding": [{"code": "CO"}]},
                "reason": {"coding": [{"code": "96"}]},
                "amount": {"value": 98500.0}
            }, {
                "category": {"coding": [{"code": "OA"}]},
                "reason": {"coding": [{"system": "http://www.x12.org/codes/remittance-advice-remark-codes", "code": "N130"}]},
                "amount": {"value": 10.0}
            }]
        }))
        .await;

        let co = &summary.adjustments[0];
        let category = co.category.as_ref().unwrap();
        assert_eq!(category.category_label, "Contractual Obligations");
        assert_eq!(category.financial_responsibility, Some(Responsibility::Provider));
        let reason = co.reason.as_ref().unwrap();
        assert_eq!(reason.reason_type, ReasonType::Carc);
        assert_eq!(reason.reason_code, "96");
        assert!(reason.action_needed.is_some());

        let rarc = summary.adjustments[1].reason.as_ref().unwrap();
        assert_eq!(rarc.reason_type, ReasonType::Rarc);
        assert_eq!(rarc.action_needed, None);

        assert_eq!(summary.contractual_writeoff, 98500.0);
        assert_eq!(summary.patient_responsibility, 0.0);
    }

    #[tokio::test]
    async fn test_line_item_adjustments_do_not_count_toward_totals() {
        let summary = summarize(json!({
            "item": [{
                "productOrService": {"coding": [{"code": "99213", "display": "Office visit"}]},
                "adjudication": [{"category": {"coding": [{"code": "PR"}]}, "amount": {"value": 30.0}}]
            }]
        }))
        .await;

        assert_eq!(summary.line_items[0].service, "Office visit");
        assert_eq!(summary.line_items[0].adjudications[0].amount, 30.0);
        assert_eq!(summary.patient_responsibility, 0.0);
    }

    #[test]
    fn test_service_label_fallbacks() {
        let label = |value: serde_json::Value| {
            let claim = ExplanationOfBenefit::from_value(&json!({"item": [value]}));
            service_label(&claim.item[0])
        };

        assert_eq!(label(json!({"productOrService": {"coding": [{"code": "x"}]}})), "Unknown Service");
        assert_eq!(
            label(json!({"productOrService": {"coding": []}, "revenue": {"coding": [{"code": "0100"}]}})),
            "Revenue Code 0100"
        );
        assert_eq!(label(json!({"revenue": {"coding": [{"display": "Room"}]}})), "Revenue Code ???");
        assert_eq!(label(json!({})), "Unknown Service");
    }

    #[tokio::test]
    async fn test_primary_diagnosis_and_drg() {
        let summary = summarize(json!({
            "diagnosis": [
                {"diagnosisCodeableConcept": {"coding": [{"code": "A41.9", "display": "Sepsis"}]}},
                {"packageCode": {}},
                {
                    "diagnosisCodeableConcept": {"coding": [{"code": "J96.01"}]},
                    "type": [{"coding": [{"code": "principal", "display": "principal"}]}],
                    "packageCode": {"coding": [{"code": "871"}]}
                }
            ]
        }))
        .await;

        assert_eq!(summary.diagnoses[0].diagnosis_type, "Unknown");
        assert_eq!(summary.diagnoses[2].description, "Unknown");
        assert_eq!(summary.primary_diagnosis, "J96.01 – Unknown");
        assert_eq!(summary.drg_code.as_deref(), Some("871"));
    }

    #[tokio::test]
    async fn test_primary_diagnosis_without_code() {
        let summary = summarize(json!({
            "diagnosis": [{
                "diagnosisCodeableConcept": {"coding": [{"display": "Chest pain"}]},
                "type": [{"coding": [{"display": "Admitting Diagnosis"}]}]
            }]
        }))
        .await;

        assert_eq!(summary.diagnoses[0].code, None);
        assert_eq!(summary.primary_diagnosis, "Unknown – Chest pain");
    }

    #[tokio::test]
    async fn test_first_total_wins() {
        let summary = summarize(json!({
            "total": [
                {"category": {"coding": [{"code": "benefit"}]}, "amount": {"value": 25}},
                {"category": {"coding": [{"code": "benefit"}]}, "amount": {"value": 99}},
                {"category": {"coding": [{"code": "submitted"}]}}
            ]
        }))
        .await;

        assert_eq!(summary.paid_amount, 25.0);
        assert_eq!(summary.billed_amount, 0.0);
    }
}
