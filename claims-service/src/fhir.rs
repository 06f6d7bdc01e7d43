//! FHIR R4 ExplanationOfBenefit, as far as the summarizer reads it.
//!
//! Claim documents arrive from payers and clearinghouses with every field
//! optional and shapes that drift between senders. Each field here is
//! optional or a list, and a field whose JSON shape does not match falls
//! back to its default instead of failing the whole document. Converting any
//! JSON value into an [`ExplanationOfBenefit`] therefore always succeeds.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier type code for the CARIN "Unique Claim ID"
pub const UNIQUE_CLAIM_ID_TYPE: &str = "uc";

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(default, deserialize_with = "lenient")]
    pub coding: Vec<Coding>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn first_coding(&self) -> Option<&Coding> {
        self.coding.first()
    }

    /// Code of the first coding, if both exist
    pub fn first_code(&self) -> Option<&str> {
        self.first_coding().and_then(|coding| coding.code.as_deref())
    }

    pub fn first_display(&self) -> Option<&str> {
        self.first_coding().and_then(|coding| coding.display.as_deref())
    }

    /// No codings and no text
    pub fn is_empty(&self) -> bool {
        self.coding.is_empty() && self.text.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(default, deserialize_with = "lenient")]
    pub r#type: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<String>,
}

impl Identifier {
    fn has_type_code(&self, code: &str) -> bool {
        self.r#type
            .as_ref()
            .is_some_and(|concept| concept.coding.iter().any(|coding| coding.code.as_deref() == Some(code)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    #[serde(default, deserialize_with = "lenient")]
    pub sequence: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub diagnosis_codeable_concept: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub r#type: Vec<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub on_admission: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub package_code: Option<CodeableConcept>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjudication {
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "lenient")]
    pub sequence: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub revenue: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub product_or_service: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub serviced_period: Option<Period>,
    #[serde(default, deserialize_with = "lenient")]
    pub net: Option<Money>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjudication: Vec<Adjudication>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Total {
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNote {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Adjudicated claim as sent by the payer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefit {
    #[serde(default, deserialize_with = "lenient")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub identifier: Vec<Identifier>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub r#type: Option<CodeableConcept>,
    #[serde(default, deserialize_with = "lenient")]
    pub r#use: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub patient: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub billable_period: Option<Period>,
    #[serde(default, deserialize_with = "lenient")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub insurer: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub provider: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub facility: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub outcome: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub disposition: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub diagnosis: Vec<Diagnosis>,
    #[serde(default, deserialize_with = "lenient")]
    pub item: Vec<Item>,
    #[serde(default, deserialize_with = "lenient")]
    pub adjudication: Vec<Adjudication>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Vec<Total>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment: Option<Payment>,
    #[serde(default, deserialize_with = "lenient")]
    pub process_note: Vec<ProcessNote>,
}

impl ExplanationOfBenefit {
    pub const RESOURCE_TYPE: &'static str = "ExplanationOfBenefit";

    /// Read a claim out of an arbitrary JSON value.
    ///
    /// A non-object value yields an empty claim.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Business claim id: the first "uc" identifier, else the resource id
    pub fn unique_claim_id(&self) -> Option<&str> {
        self.identifier
            .iter()
            .find(|identifier| identifier.has_type_code(UNIQUE_CLAIM_ID_TYPE))
            .and_then(|identifier| identifier.value.as_deref())
            .or(self.id.as_deref())
    }

    pub fn is_explanation_of_benefit(&self) -> bool {
        self.resource_type.as_deref() == Some(Self::RESOURCE_TYPE)
    }
}
