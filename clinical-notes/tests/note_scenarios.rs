use std::collections::HashSet;

use chrono::NaiveDate;
use claims_engine::{ClaimGenerator, ClaimPools};
use clinical_notes::NoteGenerator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use synth_records::{
    catalog, Claim, ClaimStatus, ClaimType, DenialReason, NoteType, PatientFactory,
    ProviderFactory,
};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn timely_filing_denial() -> Claim {
    Claim {
        claim_id: "CLM1000007".to_string(),
        patient_id: "PAT100003".to_string(),
        provider_id: "PROV10001".to_string(),
        claim_date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
        admission_date: None,
        discharge_date: None,
        claim_type: ClaimType::Emergency,
        total_charge: Decimal::new(345_678, 2),
        total_paid: Decimal::ZERO,
        claim_status: ClaimStatus::Denied,
        denial_reason: Some(DenialReason::TimelyFiling),
        primary_diagnosis_code: "J18.9".to_string(),
        primary_procedure_code: None,
    }
}

fn generated_claims(seed: u64) -> Vec<Claim> {
    let patients = PatientFactory::new(seed, reference())
        .unwrap()
        .generate_patients(15)
        .unwrap();
    let providers = ProviderFactory::new(seed)
        .unwrap()
        .generate_providers(4)
        .unwrap();
    let catalog = catalog();
    let pools = ClaimPools::new(&providers, &catalog.diagnosis_codes, &catalog.procedure_codes)
        .unwrap();
    ClaimGenerator::new(seed, reference())
        .unwrap()
        .generate_claims(&patients, pools, 3)
        .unwrap()
}

#[test]
fn timely_filing_notice_carries_explanation_and_claim_id() {
    let claim = timely_filing_denial();
    let note = NoteGenerator::new(42)
        .generate_note("NOTE100000".to_string(), &claim, Some(NoteType::Diagnosis))
        .unwrap();

    assert_eq!(note.claim_id, "CLM1000007");
    assert!(note.note_text.contains(DenialReason::TimelyFiling.explanation()));
    assert!(note.note_text.contains("CLM1000007"));
    assert!(note.note_text.contains("$3,456.78"));
}

#[test]
fn two_notes_per_claim_have_distinct_ids() {
    let claim = timely_filing_denial();
    let notes = NoteGenerator::new(42)
        .generate_notes(std::slice::from_ref(&claim), 2)
        .unwrap();

    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.claim_id == claim.claim_id));
    assert_ne!(notes[0].note_id, notes[1].note_id);
    assert_eq!(notes[0].note_id, "NOTE100000");
    assert_eq!(notes[1].note_id, "NOTE100001");
}

#[test]
fn zero_notes_per_claim_yields_nothing() {
    let notes = NoteGenerator::new(1)
        .generate_notes(&generated_claims(1), 0)
        .unwrap();
    assert!(notes.is_empty());
}

#[test]
fn same_seed_same_notes() {
    let claims = generated_claims(8);
    let a = NoteGenerator::new(8).generate_notes(&claims, 1).unwrap();
    let b = NoteGenerator::new(8).generate_notes(&claims, 1).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn notes_match_their_claims(seed in any::<u64>()) {
        let claims = generated_claims(seed);
        let notes = NoteGenerator::new(seed).generate_notes(&claims, 2).unwrap();
        prop_assert_eq!(notes.len(), claims.len() * 2);

        let ids: HashSet<_> = notes.iter().map(|n| n.note_id.as_str()).collect();
        prop_assert_eq!(ids.len(), notes.len());

        for (note, claim) in notes.iter().zip(claims.iter().flat_map(|c| [c, c])) {
            prop_assert_eq!(&note.claim_id, &claim.claim_id);
            prop_assert!(note.note_text.contains(&claim.primary_diagnosis_code));
            if let Some(reason) = claim.denial_reason {
                prop_assert!(note.note_text.contains(reason.explanation()));
            }
            if note.note_type == NoteType::Diagnosis {
                prop_assert!(claim.is_denied());
            }
        }
    }
}
