use crate::models::{ClaimSummary, RedactedClaimSummary};

/// Stands in for the patient name in anything leaving the trust boundary
pub const REDACTION_MARKER: &str = "REDACTED";

/// Independent copy of `summary` without the patient name or the internal
/// document id
pub fn redact(summary: &ClaimSummary) -> RedactedClaimSummary {
    RedactedClaimSummary {
        claim_id: summary.claim_id.clone(),
        patient_name: REDACTION_MARKER.to_string(),
        claim_status: summary.claim_status.clone(),
        processing_status: summary.processing_status.clone(),
        payment_date: summary.payment_date.clone(),
        service_period: summary.service_period.clone(),
        diagnoses: summary.diagnoses.clone(),
        adjustments: summary.adjustments.clone(),
        line_items: summary.line_items.clone(),
        billed_amount: summary.billed_amount,
        paid_amount: summary.paid_amount,
        patient_responsibility: summary.patient_responsibility,
        contractual_writeoff: summary.contractual_writeoff,
        primary_diagnosis: summary.primary_diagnosis.clone(),
        drg_code: summary.drg_code.clone(),
    }
}

impl From<&ClaimSummary> for RedactedClaimSummary {
    fn from(summary: &ClaimSummary) -> Self {
        redact(summary)
    }
}
