//! Section-based note assembly.
//!
//! A note is a title followed by sections in a fixed order, joined once by
//! blank lines. The claim-status block is a section like any other: it is
//! added only when the claim is denied.

use synth_records::Claim;

/// Explanation used when a denied claim carries no reason
pub const GENERIC_DENIAL_EXPLANATION: &str = "Claim was denied.";

pub const CLAIM_STATUS_HEADING: &str = "CLAIM STATUS";

/// Payer explanation for a denied claim, `None` otherwise
pub fn denial_explanation(claim: &Claim) -> Option<&'static str> {
    if !claim.is_denied() {
        return None;
    }
    Some(
        claim
            .denial_reason
            .map(|reason| reason.explanation())
            .unwrap_or(GENERIC_DENIAL_EXPLANATION),
    )
}

#[derive(Debug, Clone)]
pub struct NoteBuilder {
    blocks: Vec<String>,
}

impl NoteBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            blocks: vec![title.into()],
        }
    }

    /// Unheaded paragraph
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(text.into());
        self
    }

    pub fn section(mut self, heading: &str, body: impl AsRef<str>) -> Self {
        self.blocks.push(format!("{}:\n{}", heading, body.as_ref()));
        self
    }

    pub fn denial_block(self, claim: &Claim) -> Self {
        match denial_explanation(claim) {
            Some(explanation) => self.section(
                CLAIM_STATUS_HEADING,
                format!("This claim was denied. Reason: {}", explanation),
            ),
            None => self,
        }
    }

    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use synth_records::{ClaimStatus, ClaimType, DenialReason};

    fn claim(status: ClaimStatus, reason: Option<DenialReason>) -> Claim {
        Claim {
            claim_id: "CLM1000000".to_string(),
            patient_id: "PAT100000".to_string(),
            provider_id: "PROV10000".to_string(),
            claim_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            admission_date: None,
            discharge_date: None,
            claim_type: ClaimType::Physician,
            total_charge: Decimal::new(25_000, 2),
            total_paid: Decimal::ZERO,
            claim_status: status,
            denial_reason: reason,
            primary_diagnosis_code: "I10".to_string(),
            primary_procedure_code: None,
        }
    }

    #[test]
    fn test_sections_join_in_order() {
        let text = NoteBuilder::new("PROGRESS NOTE")
            .section("SUBJECTIVE", "Patient reports improvement.")
            .paragraph("Free text")
            .build();
        assert_eq!(
            text,
            "PROGRESS NOTE\n\nSUBJECTIVE:\nPatient reports improvement.\n\nFree text"
        );
    }

    #[test]
    fn test_denial_block_only_for_denied_claims() {
        let pending = NoteBuilder::new("T")
            .denial_block(&claim(ClaimStatus::Pending, None))
            .build();
        assert!(!pending.contains(CLAIM_STATUS_HEADING));

        let denied = NoteBuilder::new("T")
            .denial_block(&claim(ClaimStatus::Denied, Some(DenialReason::DuplicateClaim)))
            .build();
        assert!(denied.contains("CLAIM STATUS:\nThis claim was denied. Reason: Claim denied as duplicate"));
    }

    #[test]
    fn test_missing_reason_uses_generic_text() {
        let c = claim(ClaimStatus::Denied, None);
        assert_eq!(denial_explanation(&c), Some(GENERIC_DENIAL_EXPLANATION));
    }
}
