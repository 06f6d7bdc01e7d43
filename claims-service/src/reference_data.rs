// Seed rows for the adjudication reference tables

use crate::models::{AdjudicationValueCode, CarcCode, ClaimAdjustmentGroupCode, RarcCode, Responsibility};

/// http://terminology.hl7.org/CodeSystem/adjudication
pub fn adjudication_value_codes() -> Vec<AdjudicationValueCode> {
    [
        ("submitted", "Submitted Amount", "The total submitted amount for the claim or group or line item."),
        ("copay", "CoPay", "Patient Co-Payment"),
        ("eligible", "Eligible Amount", "Amount of the change which is considered for adjudication."),
        ("deductible", "Deductible", "Amount deducted from the eligible amount prior to adjudication."),
        ("unallocdeduct", "Unallocated Deductible", "The amount of deductible which could not allocated to other line items."),
        ("eligpercent", "Eligible %", "Eligible Percentage."),
        ("tax", "Tax", "The amount of tax."),
        ("benefit", "Benefit Amount", "Amount payable under the coverage"),
    ]
    .into_iter()
    .map(|(code, display, definition)| AdjudicationValueCode {
        code: code.to_string(),
        display: display.to_string(),
        definition: definition.to_string(),
    })
    .collect()
}

/// X12 claim adjustment group codes
pub fn adjustment_group_codes() -> Vec<ClaimAdjustmentGroupCode> {
    [
        ("CO", "Contractual Obligations", Responsibility::Provider),
        ("CR", "Corrections and Reversals", Responsibility::Provider),
        ("OA", "Other adjustments", Responsibility::Provider),
        ("PI", "Payor Initiated Reductions", Responsibility::Provider),
        ("PR", "Patient Responsibility", Responsibility::Patient),
    ]
    .into_iter()
    .map(|(code, description, responsibility)| ClaimAdjustmentGroupCode {
        code: code.to_string(),
        description: description.to_string(),
        responsibility,
        start_date: None,
    })
    .collect()
}

/// Working set of Claim Adjustment Reason Codes
pub fn carc_codes() -> Vec<CarcCode> {
    [
        ("1", "Deductible Amount", Some("Bill the patient; the amount applies to their annual deductible.")),
        ("2", "Coinsurance Amount", Some("Bill the patient for their coinsurance share.")),
        ("3", "Co-payment Amount", Some("Collect the copay from the patient.")),
        ("4", "The procedure code is inconsistent with the modifier used.", Some("Correct the modifier and resubmit the claim.")),
        ("16", "Claim/service lacks information or has submission/billing error(s).", Some("Add the missing information listed in the remark codes and resubmit.")),
        ("18", "Exact duplicate claim/service.", Some("Do not resubmit; check the status of the original claim.")),
        ("22", "This care may be covered by another payer per coordination of benefits.", Some("Bill the primary payer first, then resubmit with the primary EOB.")),
        ("27", "Expenses incurred after coverage terminated.", Some("Verify eligibility dates and bill the correct payer or the patient.")),
        ("29", "The time limit for filing has expired.", Some("Submit proof of timely filing or write off the balance.")),
        ("45", "Charge exceeds fee schedule/maximum allowable or contracted/legislated fee arrangement.", Some("Write off the difference per the payer contract; do not bill the patient.")),
        ("50", "These are non-covered services because this is not deemed a 'medical necessity' by the payer.", Some("Appeal with medical records and a letter of medical necessity.")),
        ("96", "Non-covered charge(s).", Some("Review plan coverage; appeal if the service should be covered.")),
        ("97", "The benefit for this service is included in the payment/allowance for another service/procedure that has already been adjudicated.", Some("Do not bill separately; review bundling edits.")),
        ("109", "Claim/service not covered by this payer/contractor.", Some("Send the claim to the correct payer.")),
        ("197", "Precertification/authorization/notification/pre-treatment absent.", Some("Request retroactive authorization and appeal.")),
        ("204", "This service/equipment/drug is not covered under the patient's current benefit plan.", Some("Inform the patient; bill them only with a signed waiver.")),
        ("242", "Services not provided by network/primary care providers.", None),
    ]
    .into_iter()
    .map(|(code, description, action_hint)| CarcCode {
        code: code.to_string(),
        description: description.to_string(),
        action_hint: action_hint.map(str::to_string),
        start_date: None,
    })
    .collect()
}

/// Working set of Remittance Advice Remark Codes
pub fn rarc_codes() -> Vec<RarcCode> {
    [
        ("M15", "Separately billed services/tests have been bundled as they are considered components of the same procedure."),
        ("M80", "Not covered when performed during the same session/date as a previously processed service for the patient."),
        ("MA130", "Your claim contains incomplete and/or invalid information, and no appeal rights are afforded because the claim is unprocessable."),
        ("N30", "Patient ineligible for this service."),
        ("N130", "Consult plan benefit documents/guidelines for information about restrictions for this service."),
        ("N290", "Missing/incomplete/invalid rendering provider primary identifier."),
        ("N362", "The number of Days or Units of Service exceeds our acceptable maximum."),
        ("N386", "This decision was based on a National Coverage Determination (NCD)."),
    ]
    .into_iter()
    .map(|(code, description)| RarcCode {
        code: code.to_string(),
        description: description.to_string(),
        start_date: None,
    })
    .collect()
}
