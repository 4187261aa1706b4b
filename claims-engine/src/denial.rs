//! Denial decision rules and denial-reason lookups.
//!
//! The decision picks exactly one rule, the first that applies, and its
//! probability drives a single Bernoulli draw. Probabilities never stack.

use rust_decimal::Decimal;
use synth_records::{ClaimType, DenialReason};

use synth_records::DenialReason::*;

/// Diagnoses payers review more closely
pub const HIGH_SCRUTINY_DIAGNOSES: [&str; 4] = ["E11.9", "M54.5", "F41.9", "F32.9"];

/// Reasons used when a diagnosis has no entry of its own
pub const DEFAULT_DENIAL_REASONS: &[DenialReason] = &[InsufficientInfo, NotMedicallyNecessary];

/// Charges above this amount on institutional stays trigger the high-charge rule
pub fn high_charge_threshold() -> Decimal {
    Decimal::from(10_000)
}

/// Rules in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialRule {
    HighChargeInstitutional,
    HighScrutinyDiagnosis,
    Emergency,
    Baseline,
}

impl DenialRule {
    pub fn select(total_charge: Decimal, claim_type: ClaimType, diagnosis_code: &str) -> Self {
        let institutional = matches!(claim_type, ClaimType::Inpatient | ClaimType::Ambulatory);
        if total_charge > high_charge_threshold() && institutional {
            DenialRule::HighChargeInstitutional
        } else if HIGH_SCRUTINY_DIAGNOSES.contains(&diagnosis_code) {
            DenialRule::HighScrutinyDiagnosis
        } else if claim_type == ClaimType::Emergency {
            DenialRule::Emergency
        } else {
            DenialRule::Baseline
        }
    }

    pub fn probability(&self) -> f64 {
        match self {
            DenialRule::HighChargeInstitutional => 0.25,
            DenialRule::HighScrutinyDiagnosis => 0.20,
            DenialRule::Emergency => 0.05,
            DenialRule::Baseline => 0.15,
        }
    }
}

/// Reasons a payer would plausibly give for denying a diagnosis
pub fn diagnosis_denial_reasons(diagnosis_code: &str) -> &'static [DenialReason] {
    match diagnosis_code {
        "E11.9" => &[NotMedicallyNecessary, PreAuthRequired, InsufficientInfo],
        "E10.9" => &[NotMedicallyNecessary, PreAuthRequired],
        "I10" => &[NotMedicallyNecessary, InsufficientInfo],
        "M54.5" => &[AuthorizationRequired, PreAuthRequired, NotMedicallyNecessary],
        "M25.561" => &[AuthorizationRequired, PreAuthRequired],
        "J44.1" => &[InsufficientInfo, DuplicateClaim],
        "J18.9" => &[InsufficientInfo, TimelyFiling],
        "F41.9" => &[PreAuthRequired, AuthorizationRequired, NotMedicallyNecessary],
        "F32.9" => &[PreAuthRequired, AuthorizationRequired],
        _ => DEFAULT_DENIAL_REASONS,
    }
}

/// Reasons a payer would plausibly give for denying a claim type
pub fn claim_type_denial_reasons(claim_type: ClaimType) -> &'static [DenialReason] {
    match claim_type {
        ClaimType::Inpatient => &[AuthorizationRequired, PreAuthRequired, NotMedicallyNecessary],
        ClaimType::Outpatient => &[NotMedicallyNecessary, InsufficientInfo, PreAuthRequired],
        ClaimType::Emergency => &[InsufficientInfo, TimelyFiling],
        ClaimType::Physician => &[NotMedicallyNecessary, InsufficientInfo],
        ClaimType::Ambulatory => &[AuthorizationRequired, PreAuthRequired],
    }
}

/// Intersection of the diagnosis and claim-type reasons, in diagnosis order.
/// Falls back to the diagnosis reasons when the two sets are disjoint.
pub fn denial_candidates(diagnosis_code: &str, claim_type: ClaimType) -> Vec<DenialReason> {
    let by_diagnosis = diagnosis_denial_reasons(diagnosis_code);
    let by_type = claim_type_denial_reasons(claim_type);

    let shared: Vec<DenialReason> = by_diagnosis
        .iter()
        .copied()
        .filter(|reason| by_type.contains(reason))
        .collect();

    if shared.is_empty() {
        by_diagnosis.to_vec()
    } else {
        shared
    }
}
