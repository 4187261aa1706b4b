use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, info_span};

use claims_engine::{generate_claims_parallel, ClaimGenerator, ClaimPools, ClaimSummary};
use clinical_notes::NoteGenerator;
use config_engine::GenerationConfig;
use error_common::{SynthError, SynthResult};
use logger_redacted::redacted_debug;
use synth_records::{
    catalog, Claim, DiagnosisCode, Note, Patient, PatientFactory, ProcedureCode, Provider,
    ProviderFactory,
};

/// Every record of one run, in generation order
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub diagnosis_codes: Vec<DiagnosisCode>,
    pub procedure_codes: Vec<ProcedureCode>,
    pub patients: Vec<Patient>,
    pub providers: Vec<Provider>,
    pub claims: Vec<Claim>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub diagnosis_codes: usize,
    pub procedure_codes: usize,
    pub patients: usize,
    pub providers: usize,
    pub claims: usize,
    pub notes: usize,
}

impl From<&Dataset> for RecordCounts {
    fn from(dataset: &Dataset) -> Self {
        Self {
            diagnosis_codes: dataset.diagnosis_codes.len(),
            procedure_codes: dataset.procedure_codes.len(),
            patients: dataset.patients.len(),
            providers: dataset.providers.len(),
            claims: dataset.claims.len(),
            notes: dataset.notes.len(),
        }
    }
}

/// Run description written next to the exported files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationMetadata {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub reference_date: NaiveDate,
    pub parallel: bool,
    pub record_counts: RecordCounts,
    pub claim_summary: ClaimSummary,
}

/// Sequences catalog, patients, providers, claims and notes for one configuration
pub struct DatasetOrchestrator {
    config: GenerationConfig,
}

impl DatasetOrchestrator {
    /// Rejects degenerate parameters before any generation work
    pub fn new(config: GenerationConfig) -> SynthResult<Self> {
        config.validate().map_err(SynthError::from)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn run(&self) -> SynthResult<(Dataset, GenerationMetadata)> {
        let config = &self.config;
        let reference_date = config.effective_reference_date();
        let _span = info_span!("generate_dataset", seed = config.seed, %reference_date).entered();

        info!(
            patients = config.patients,
            providers = config.providers,
            claims_per_patient = config.claims_per_patient,
            notes_per_claim = config.notes_per_claim,
            parallel = config.parallel,
            "Starting dataset generation"
        );

        let catalog = catalog();
        catalog.ensure_usable()?;
        info!(
            diagnosis_codes = catalog.diagnosis_codes.len(),
            procedure_codes = catalog.procedure_codes.len(),
            "Code catalog ready"
        );

        let patients = {
            let _phase = info_span!("patients").entered();
            PatientFactory::new(config.seed, reference_date)?.generate_patients(config.patients)?
        };

        let providers = {
            let _phase = info_span!("providers").entered();
            ProviderFactory::new(config.seed)?.generate_providers(config.providers)?
        };
        if let Some(first) = providers.first() {
            redacted_debug!(
                "first provider {} npi {} zip_code={}",
                first.provider_id,
                first.npi,
                first.zip_code
            );
        }

        let pools =
            ClaimPools::new(&providers, &catalog.diagnosis_codes, &catalog.procedure_codes)?;
        let claims = if config.parallel {
            generate_claims_parallel(
                config.seed,
                reference_date,
                &patients,
                pools,
                config.claims_per_patient,
            )?
        } else {
            ClaimGenerator::new(config.seed, reference_date)?.generate_claims(
                &patients,
                pools,
                config.claims_per_patient,
            )?
        };

        let notes =
            NoteGenerator::new(config.seed).generate_notes(&claims, config.notes_per_claim)?;

        let claim_summary = ClaimSummary::from_claims(&claims);
        claim_summary.log();

        let dataset = Dataset {
            diagnosis_codes: catalog.diagnosis_codes,
            procedure_codes: catalog.procedure_codes,
            patients,
            providers,
            claims,
            notes,
        };
        let metadata = GenerationMetadata {
            generated_at: Utc::now(),
            seed: config.seed,
            reference_date,
            parallel: config.parallel,
            record_counts: RecordCounts::from(&dataset),
            claim_summary,
        };

        info!(
            claims = metadata.record_counts.claims,
            notes = metadata.record_counts.notes,
            "Dataset generation complete"
        );
        Ok((dataset, metadata))
    }
}
