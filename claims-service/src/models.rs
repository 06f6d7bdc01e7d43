use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who ends up owing an adjusted amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Responsibility {
    Patient,
    Provider,
}

impl fmt::Display for Responsibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patient => write!(f, "Patient"),
            Self::Provider => write!(f, "Provider"),
        }
    }
}

impl FromStr for Responsibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "provider" => Ok(Self::Provider),
            other => Err(format!("unknown responsibility '{}'", other)),
        }
    }
}

/// Code set an adjustment reason belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReasonType {
    /// Claim Adjustment Reason Code
    Carc,
    /// Remittance Advice Remark Code
    Rarc,
}

/// FHIR adjudication value code (submitted, benefit, copay, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdjudicationValueCode {
    pub code: String,
    pub display: String,
    pub definition: String,
}

/// X12 claim adjustment group code (CO, PR, OA, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAdjustmentGroupCode {
    pub code: String,
    pub description: String,
    pub responsibility: Responsibility,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarcCode {
    pub code: String,
    pub description: String,
    pub action_hint: Option<String>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RarcCode {
    pub code: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
}

/// Resolved adjudication category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail {
    pub category_code: String,
    pub category_label: String,
    pub financial_responsibility: Option<Responsibility>,
}

/// Resolved adjustment reason
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasonDetail {
    pub reason_type: ReasonType,
    pub reason_code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_needed: Option<String>,
}

/// One normalized adjudication line
///
/// Category and reason fields are flattened into the entry and only appear
/// when the source adjudication carried the corresponding coding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentEntry {
    pub amount: f64,
    pub currency: String,
    #[serde(flatten)]
    pub category: Option<CategoryDetail>,
    #[serde(flatten)]
    pub reason: Option<ReasonDetail>,
}

impl AdjustmentEntry {
    pub fn category_code(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.category_code.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisEntry {
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub diagnosis_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServicePeriod {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemSummary {
    pub service: String,
    pub adjudications: Vec<AdjustmentEntry>,
}

/// Patient-facing financial summary of one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimSummary {
    pub claim_id: String,
    pub fhir_id: Option<String>,
    pub patient_name: String,
    pub claim_status: String,
    pub processing_status: String,
    pub payment_date: String,
    pub service_period: ServicePeriod,
    pub diagnoses: Vec<DiagnosisEntry>,
    pub adjustments: Vec<AdjustmentEntry>,
    pub line_items: Vec<LineItemSummary>,
    pub billed_amount: f64,
    pub paid_amount: f64,
    pub patient_responsibility: f64,
    pub contractual_writeoff: f64,
    pub primary_diagnosis: String,
    pub drg_code: Option<String>,
}

/// [`ClaimSummary`] with identifying fields stripped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedactedClaimSummary {
    pub claim_id: String,
    pub patient_name: String,
    pub claim_status: String,
    pub processing_status: String,
    pub payment_date: String,
    pub service_period: ServicePeriod,
    pub diagnoses: Vec<DiagnosisEntry>,
    pub adjustments: Vec<AdjustmentEntry>,
    pub line_items: Vec<LineItemSummary>,
    pub billed_amount: f64,
    pub paid_amount: f64,
    pub patient_responsibility: f64,
    pub contractual_writeoff: f64,
    pub primary_diagnosis: String,
    pub drg_code: Option<String>,
}
