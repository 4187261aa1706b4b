use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, info_span, warn};

use error_common::SynthResult;
use synth_records::{
    derive_seed, format_usd, seeded_rng, Claim, ClaimType, IdSequence, Note, NoteType, SynthRng,
    NOTE_STREAM,
};

use crate::builder::{denial_explanation, NoteBuilder};
use crate::vitals::VitalSigns;
use crate::vocabulary::{ClinicalVocabulary, ASSESSMENTS};

/// Chance that a note on a denied claim is the denial notice
pub const DENIAL_NOTICE_PROBABILITY: f64 = 0.30;

/// Chance that a progress note reports improvement rather than a persistent symptom
pub const IMPROVEMENT_PROBABILITY: f64 = 0.70;

const INPATIENT_NOTE_TYPES: [NoteType; 3] =
    [NoteType::Admission, NoteType::Discharge, NoteType::Progress];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clinical note generator owning its random stream and note identifier counter
pub struct NoteGenerator {
    rng: SynthRng,
    ids: IdSequence,
}

impl NoteGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seeded_rng(derive_seed(seed, NOTE_STREAM)))
    }

    pub fn with_rng(rng: SynthRng) -> Self {
        Self {
            rng,
            ids: IdSequence::notes(),
        }
    }

    /// Note type implied by the claim's state
    pub fn select_note_type(&mut self, claim: &Claim) -> NoteType {
        if claim.is_denied() && self.rng.gen_bool(DENIAL_NOTICE_PROBABILITY) {
            NoteType::Diagnosis
        } else if claim.claim_type == ClaimType::Inpatient {
            *INPATIENT_NOTE_TYPES
                .choose(&mut self.rng)
                .unwrap_or(&NoteType::Progress)
        } else if claim.primary_procedure_code.is_some() {
            NoteType::Procedure
        } else {
            NoteType::Progress
        }
    }

    /// One note for `claim`. A requested DIAGNOSIS note on a claim that was
    /// not denied is written, and typed, as a PROGRESS note.
    pub fn generate_note(
        &mut self,
        note_id: String,
        claim: &Claim,
        note_type: Option<NoteType>,
    ) -> SynthResult<Note> {
        let requested = match note_type {
            Some(note_type) => note_type,
            None => self.select_note_type(claim),
        };

        let note_type = if requested == NoteType::Diagnosis && !claim.is_denied() {
            warn!(
                claim_id = %claim.claim_id,
                claim_status = claim.claim_status.as_str(),
                "Denial notice requested for a claim that was not denied, writing a progress note"
            );
            NoteType::Progress
        } else {
            requested
        };

        let note_text = match note_type {
            NoteType::Admission => self.admission_note(claim),
            NoteType::Discharge => self.discharge_note(claim),
            NoteType::Progress => self.progress_note(claim),
            NoteType::Procedure => self.procedure_note(claim),
            NoteType::Diagnosis => denial_notice(claim),
        };

        let note = Note {
            note_id,
            claim_id: claim.claim_id.clone(),
            note_type,
            note_text,
        };
        note.validate_for(claim)?;

        debug!(
            note_id = %note.note_id,
            claim_id = %note.claim_id,
            note_type = note.note_type.as_str(),
            "Generated note"
        );
        Ok(note)
    }

    /// Exactly `notes_per_claim` notes for each claim, in claim order
    pub fn generate_notes(
        &mut self,
        claims: &[Claim],
        notes_per_claim: usize,
    ) -> SynthResult<Vec<Note>> {
        let _span = info_span!("generate_notes", claims = claims.len(), notes_per_claim).entered();

        let mut notes = Vec::with_capacity(claims.len() * notes_per_claim);
        for claim in claims {
            for _ in 0..notes_per_claim {
                let note_id = self.ids.next_id();
                notes.push(self.generate_note(note_id, claim, None)?);
            }
        }

        info!(count = notes.len(), "Generated notes");
        Ok(notes)
    }

    fn pick(&mut self, phrases: &'static [&'static str]) -> &'static str {
        phrases.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn admission_note(&mut self, claim: &Claim) -> String {
        let vitals = VitalSigns::sample(&mut self.rng);
        let symptom = self.pick(ClinicalVocabulary::symptoms(&claim.primary_diagnosis_code));
        let treatment = self.pick(ClinicalVocabulary::treatments(&claim.primary_diagnosis_code));
        let assessment = self.pick(ASSESSMENTS);
        let admitted = claim.admission_date.unwrap_or(claim.claim_date);

        NoteBuilder::new("ADMISSION NOTE")
            .paragraph(format!("Patient admitted on {}.", admitted.format(DATE_FORMAT)))
            .section("CHIEF COMPLAINT", format!("Patient presents with {}.", symptom))
            .section("VITAL SIGNS", vitals.full_line())
            .section(
                "ASSESSMENT",
                format!(
                    "Patient is in {} condition. Primary diagnosis: {}.",
                    assessment, claim.primary_diagnosis_code
                ),
            )
            .denial_block(claim)
            .section(
                "PLAN",
                format!("{}. Continue monitoring and reassess as needed.", capitalize(treatment)),
            )
            .build()
    }

    fn discharge_note(&mut self, claim: &Claim) -> String {
        let assessment = self.pick(ASSESSMENTS);
        let treatment = self.pick(ClinicalVocabulary::treatments(&claim.primary_diagnosis_code));
        let discharged = claim.discharge_date.unwrap_or(claim.claim_date);
        let procedure = claim
            .primary_procedure_code
            .as_deref()
            .map(|code| format!(" Procedure performed: CPT {}.", code))
            .unwrap_or_default();

        NoteBuilder::new("DISCHARGE SUMMARY")
            .paragraph(format!("Patient discharged on {}.", discharged.format(DATE_FORMAT)))
            .section(
                "HOSPITAL COURSE",
                format!(
                    "Patient was admitted for treatment of {}.{}\nDuring hospitalization, patient received {} and showed improvement.",
                    claim.primary_diagnosis_code, procedure, treatment
                ),
            )
            .section(
                "DISCHARGE CONDITION",
                format!("Patient is in {} condition at time of discharge.", assessment),
            )
            .denial_block(claim)
            .section(
                "DISCHARGE INSTRUCTIONS",
                "Follow-up with primary care provider within 7-10 days. Continue medications as prescribed.\nReturn to emergency department if symptoms worsen.",
            )
            .build()
    }

    fn progress_note(&mut self, claim: &Claim) -> String {
        let vitals = VitalSigns::sample(&mut self.rng);
        let assessment = self.pick(ASSESSMENTS);
        let trend = if self.rng.gen_bool(IMPROVEMENT_PROBABILITY) {
            "improvement".to_string()
        } else {
            let symptom = self.pick(ClinicalVocabulary::symptoms(&claim.primary_diagnosis_code));
            format!("persistent {}", symptom)
        };
        let treatment = self.pick(ClinicalVocabulary::treatments(&claim.primary_diagnosis_code));

        NoteBuilder::new(format!("PROGRESS NOTE - {}", claim.claim_date.format(DATE_FORMAT)))
            .section(
                "SUBJECTIVE",
                format!(
                    "Patient reports {} in symptoms related to {}.",
                    trend, claim.primary_diagnosis_code
                ),
            )
            .section("OBJECTIVE", format!("Vital signs: {}", vitals.brief_line()))
            .section(
                "ASSESSMENT",
                format!(
                    "Patient condition is {}. Diagnosis: {}.",
                    assessment, claim.primary_diagnosis_code
                ),
            )
            .denial_block(claim)
            .section(
                "PLAN",
                format!("Continue {}. Monitor response and reassess as needed.", treatment),
            )
            .build()
    }

    fn procedure_note(&mut self, claim: &Claim) -> String {
        let indication = self.pick(ClinicalVocabulary::symptoms(&claim.primary_diagnosis_code));
        let procedure = claim.primary_procedure_code.as_deref().unwrap_or("N/A");

        NoteBuilder::new(format!("PROCEDURE NOTE - {}", claim.claim_date.format(DATE_FORMAT)))
            .section("PROCEDURE", format!("CPT Code: {}", procedure))
            .section(
                "INDICATION",
                format!(
                    "Procedure performed for diagnosis and treatment of {}.\nPatient presented with {}.",
                    claim.primary_diagnosis_code, indication
                ),
            )
            .section(
                "PROCEDURE DESCRIPTION",
                "Procedure was performed successfully without complications. Patient tolerated procedure well.",
            )
            .denial_block(claim)
            .section(
                "POST-PROCEDURE",
                format!(
                    "Patient is stable. Monitor for any complications. Follow-up as indicated for {}.",
                    claim.primary_diagnosis_code
                ),
            )
            .build()
    }
}

/// Denial notice for a denied claim. Draws nothing from the random stream.
fn denial_notice(claim: &Claim) -> String {
    let explanation = denial_explanation(claim).unwrap_or_default();
    let mut coded = format!("Diagnosis: {}", claim.primary_diagnosis_code);
    if let Some(procedure) = &claim.primary_procedure_code {
        coded.push_str(&format!(", Procedure: CPT {}", procedure));
    }

    NoteBuilder::new(format!("CLAIM DENIAL NOTICE - {}", claim.claim_date.format(DATE_FORMAT)))
        .section(
            "CLAIM INFORMATION",
            format!(
                "Claim ID: {}\n{}\nClaim Type: {}\nTotal Charge: {}",
                claim.claim_id,
                coded,
                claim.claim_type,
                format_usd(claim.total_charge)
            ),
        )
        .section("DENIAL REASON", explanation)
        .section(
            "DETAILS",
            format!(
                "This claim was reviewed and denied based on the above reason.\n{} was submitted for this claim.",
                coded
            ),
        )
        .section(
            "NEXT STEPS",
            "Provider may submit additional documentation or appeal this denial if additional information is available that supports medical necessity or addresses the denial reason.",
        )
        .build()
}

fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
