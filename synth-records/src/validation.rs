//! Construction-time invariant checks.
//!
//! Every generator validates a record before handing it out. A failure is a
//! broken generator, never bad input, so callers abort the record instead of
//! patching it.

use error_common::{codes::validation as code, EntityKind, ValidationError};
use rust_decimal::Decimal;

use crate::ids::{self, has_numeric_suffix};
use crate::models::{
    Claim, ClaimStatus, ClaimType, DiagnosisCode, Note, Patient, ProcedureCode, Provider,
};

pub type ValidationResult = Result<(), ValidationError>;

/// Records that can check their own invariants
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

fn fail(
    entity: EntityKind,
    field: &'static str,
    error_code: &'static str,
    message: impl Into<String>,
) -> ValidationResult {
    Err(ValidationError::new(entity, field, error_code, message))
}

fn check_id(entity: EntityKind, field: &'static str, id: &str, prefix: &str) -> ValidationResult {
    if has_numeric_suffix(id, prefix) {
        Ok(())
    } else {
        fail(
            entity,
            field,
            code::INVALID_IDENTIFIER,
            format!("expected {}<digits>, got {:?}", prefix, id),
        )
    }
}

fn check_state(entity: EntityKind, state: &str) -> ValidationResult {
    if state.len() == 2 && state.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        fail(
            entity,
            "state",
            code::INVALID_FORMAT,
            format!("expected 2-letter state code, got {:?}", state),
        )
    }
}

fn check_not_blank(entity: EntityKind, field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        fail(entity, field, code::MISSING_REQUIRED_FIELD, "must not be blank")
    } else {
        Ok(())
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn check_amount(field: &'static str, amount: Decimal) -> ValidationResult {
    if amount.is_sign_negative() && !amount.is_zero() {
        return fail(
            EntityKind::Claim,
            field,
            code::INVALID_AMOUNT,
            format!("must be non-negative, got {}", amount),
        );
    }
    if amount.scale() > 2 {
        return fail(
            EntityKind::Claim,
            field,
            code::INVALID_AMOUNT,
            format!("must be rounded to cents, got {}", amount),
        );
    }
    Ok(())
}

impl Validate for Patient {
    fn validate(&self) -> ValidationResult {
        check_id(EntityKind::Patient, "patient_id", &self.patient_id, ids::PATIENT_PREFIX)?;
        if !is_digits(&self.zip_code, 3) {
            return fail(
                EntityKind::Patient,
                "zip_code",
                code::INVALID_FORMAT,
                format!("expected 3-digit ZIP prefix, got {:?}", self.zip_code),
            );
        }
        check_state(EntityKind::Patient, &self.state)
    }
}

impl Validate for Provider {
    fn validate(&self) -> ValidationResult {
        let entity = EntityKind::Provider;
        check_id(entity, "provider_id", &self.provider_id, ids::PROVIDER_PREFIX)?;

        if !is_digits(&self.npi, 10) || !matches!(self.npi.as_bytes().first(), Some(b'1' | b'2')) {
            return fail(
                entity,
                "npi",
                code::INVALID_IDENTIFIER,
                format!("expected 10 digits starting with 1 or 2, got {:?}", self.npi),
            );
        }

        check_not_blank(entity, "provider_name", &self.provider_name)?;

        if self.specialty.is_some() != self.provider_type.has_specialty() {
            return fail(
                entity,
                "specialty",
                code::INCONSISTENT_STATE,
                format!(
                    "specialty must be set exactly for PHYSICIAN and CLINIC providers, provider type is {}",
                    self.provider_type.as_str()
                ),
            );
        }

        check_not_blank(entity, "address", &self.address)?;
        check_not_blank(entity, "city", &self.city)?;
        check_state(entity, &self.state)?;
        if !is_digits(&self.zip_code, 5) {
            return fail(
                entity,
                "zip_code",
                code::INVALID_FORMAT,
                format!("expected 5-digit ZIP, got {:?}", self.zip_code),
            );
        }
        Ok(())
    }
}

impl Validate for DiagnosisCode {
    fn validate(&self) -> ValidationResult {
        check_not_blank(EntityKind::DiagnosisCode, "code", &self.code)?;
        check_not_blank(EntityKind::DiagnosisCode, "description", &self.description)
    }
}

impl Validate for ProcedureCode {
    fn validate(&self) -> ValidationResult {
        check_not_blank(EntityKind::ProcedureCode, "code", &self.code)?;
        check_not_blank(EntityKind::ProcedureCode, "description", &self.description)
    }
}

impl Validate for Claim {
    fn validate(&self) -> ValidationResult {
        let entity = EntityKind::Claim;
        check_id(entity, "claim_id", &self.claim_id, ids::CLAIM_PREFIX)?;
        check_id(entity, "patient_id", &self.patient_id, ids::PATIENT_PREFIX)?;
        check_id(entity, "provider_id", &self.provider_id, ids::PROVIDER_PREFIX)?;
        check_not_blank(entity, "primary_diagnosis_code", &self.primary_diagnosis_code)?;

        let inpatient = self.claim_type == ClaimType::Inpatient;
        match (self.admission_date, self.discharge_date) {
            (Some(admission), Some(discharge)) if inpatient => {
                if discharge < admission {
                    return fail(
                        entity,
                        "discharge_date",
                        code::DATE_ORDERING,
                        format!("discharge {} precedes admission {}", discharge, admission),
                    );
                }
            }
            (None, None) if !inpatient => {}
            _ => {
                return fail(
                    entity,
                    "admission_date",
                    code::INCONSISTENT_STATE,
                    format!(
                        "admission and discharge dates must be set exactly for INPATIENT claims, claim type is {}",
                        self.claim_type
                    ),
                );
            }
        }

        check_amount("total_charge", self.total_charge)?;
        check_amount("total_paid", self.total_paid)?;
        if self.total_paid > self.total_charge {
            return fail(
                entity,
                "total_paid",
                code::INVALID_AMOUNT,
                format!("paid {} exceeds charge {}", self.total_paid, self.total_charge),
            );
        }
        if self.claim_status.is_unpaid() && !self.total_paid.is_zero() {
            return fail(
                entity,
                "total_paid",
                code::INCONSISTENT_STATE,
                format!("{} claims carry no payment, got {}", self.claim_status, self.total_paid),
            );
        }

        let denied = self.claim_status == ClaimStatus::Denied;
        if denied != self.denial_reason.is_some() {
            return fail(
                entity,
                "denial_reason",
                code::INCONSISTENT_STATE,
                format!(
                    "denial reason must be set exactly for DENIED claims, status is {}",
                    self.claim_status
                ),
            );
        }
        Ok(())
    }
}

impl Validate for Note {
    fn validate(&self) -> ValidationResult {
        check_id(EntityKind::Note, "note_id", &self.note_id, ids::NOTE_PREFIX)?;
        check_id(EntityKind::Note, "claim_id", &self.claim_id, ids::CLAIM_PREFIX)?;
        check_not_blank(EntityKind::Note, "note_text", &self.note_text)
    }
}

impl Note {
    /// Checks that need the claim the note describes
    pub fn validate_for(&self, claim: &Claim) -> ValidationResult {
        self.validate()?;
        let entity = EntityKind::Note;
        if self.claim_id != claim.claim_id {
            return fail(
                entity,
                "claim_id",
                code::INCONSISTENT_STATE,
                format!("note references {}, expected {}", self.claim_id, claim.claim_id),
            );
        }
        if !self.note_text.contains(&claim.primary_diagnosis_code) {
            return fail(
                entity,
                "note_text",
                code::INCONSISTENT_STATE,
                format!("body does not mention diagnosis {}", claim.primary_diagnosis_code),
            );
        }
        if let (true, Some(reason)) = (claim.is_denied(), claim.denial_reason) {
            if !self.note_text.contains(reason.explanation()) {
                return fail(
                    entity,
                    "note_text",
                    code::INCONSISTENT_STATE,
                    format!("body of a note on a denied claim lacks the {} explanation", reason),
                );
            }
        }
        Ok(())
    }
}
