//! Claim generation.
//!
//! A claim's type, stay dates, charge, denial decision, status and payment
//! are drawn in a fixed order from the generator's own seeded stream, then
//! checked against the claim invariants before the claim is returned.

use chrono::{Duration, Months, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use error_common::{codes, EntityKind, SynthError, SynthResult, ValidationError};
use synth_records::{
    derive_indexed_seed, derive_seed, seeded_rng, Categorical, Claim, ClaimStatus, ClaimType,
    DiagnosisCode, IdSequence, Patient, ProcedureCode, Provider, SynthRng, Validate,
    CLAIM_ID_BASE, CLAIM_STREAM,
};

use crate::denial::{denial_candidates, DenialRule};
use crate::payment::paid_amount;
use crate::pricing::ChargeBand;

const CLAIM_TYPE_WEIGHTS: [(ClaimType, f64); 5] = [
    (ClaimType::Outpatient, 0.50),
    (ClaimType::Physician, 0.25),
    (ClaimType::Emergency, 0.10),
    (ClaimType::Inpatient, 0.10),
    (ClaimType::Ambulatory, 0.05),
];

/// Outcomes for claims that escaped denial
const NON_DENIED_STATUS_WEIGHTS: [(ClaimStatus, f64); 4] = [
    (ClaimStatus::Approved, 0.80),
    (ClaimStatus::Partial, 0.10),
    (ClaimStatus::Pending, 0.08),
    (ClaimStatus::Rejected, 0.02),
];

/// Share of claims that carry a primary procedure
pub const PROCEDURE_PRESENCE: f64 = 0.70;

/// Length of a service-date window, in months before the reference date
const SERVICE_WINDOW_MONTHS: u32 = 24;

pub const MIN_LENGTH_OF_STAY: i64 = 1;
pub const MAX_LENGTH_OF_STAY: i64 = 14;

/// Inputs for one claim
#[derive(Debug, Clone, Copy)]
pub struct ClaimRequest<'a> {
    pub patient: &'a Patient,
    pub provider: &'a Provider,
    pub diagnosis_code: &'a str,
    pub procedure_code: Option<&'a str>,
    /// Drawn from the two years before the reference date when absent
    pub service_date: Option<NaiveDate>,
}

/// Sampling pools for bulk generation
#[derive(Debug, Clone, Copy)]
pub struct ClaimPools<'a> {
    providers: &'a [Provider],
    diagnosis_codes: &'a [DiagnosisCode],
    procedure_codes: &'a [ProcedureCode],
}

impl<'a> ClaimPools<'a> {
    pub fn new(
        providers: &'a [Provider],
        diagnosis_codes: &'a [DiagnosisCode],
        procedure_codes: &'a [ProcedureCode],
    ) -> SynthResult<Self> {
        if providers.is_empty() {
            return Err(SynthError::configuration(
                "claims need at least one provider to sample from",
            ));
        }
        if diagnosis_codes.is_empty() || procedure_codes.is_empty() {
            return Err(SynthError::configuration_with_code(
                codes::configuration::EMPTY_CATALOG,
                "claims need non-empty diagnosis and procedure pools",
            ));
        }
        Ok(Self {
            providers,
            diagnosis_codes,
            procedure_codes,
        })
    }
}

/// Admission and discharge dates for an inpatient stay of `length_of_stay` days
pub fn stay_dates(admission: NaiveDate, length_of_stay: i64) -> (NaiveDate, NaiveDate) {
    (admission, admission + Duration::days(length_of_stay))
}

/// Claim generator owning its random stream and claim identifier counter
pub struct ClaimGenerator {
    rng: SynthRng,
    reference_date: NaiveDate,
    claim_types: Categorical<ClaimType>,
    statuses: Categorical<ClaimStatus>,
    ids: IdSequence,
}

impl ClaimGenerator {
    pub fn new(seed: u64, reference_date: NaiveDate) -> SynthResult<Self> {
        Self::with_rng(seeded_rng(derive_seed(seed, CLAIM_STREAM)), reference_date)
    }

    pub fn with_rng(rng: SynthRng, reference_date: NaiveDate) -> SynthResult<Self> {
        Ok(Self {
            rng,
            reference_date,
            claim_types: Categorical::new(&CLAIM_TYPE_WEIGHTS)?,
            statuses: Categorical::new(&NON_DENIED_STATUS_WEIGHTS)?,
            ids: IdSequence::claims(),
        })
    }

    pub fn generate_claim(
        &mut self,
        claim_id: String,
        request: ClaimRequest<'_>,
    ) -> SynthResult<Claim> {
        let claim_date = match request.service_date {
            Some(date) => date,
            None => self.service_date()?,
        };

        let claim_type = self.claim_types.sample(&mut self.rng);

        let (admission_date, discharge_date) = if claim_type == ClaimType::Inpatient {
            let length_of_stay = self.rng.gen_range(MIN_LENGTH_OF_STAY..=MAX_LENGTH_OF_STAY);
            let (admission, discharge) = stay_dates(claim_date, length_of_stay);
            (Some(admission), Some(discharge))
        } else {
            (None, None)
        };

        let total_charge = ChargeBand::for_claim_type(claim_type)
            .sample(&mut self.rng)
            .ok_or_else(|| amount_error("total_charge", "charge draw was not finite"))?;

        let rule = DenialRule::select(total_charge, claim_type, request.diagnosis_code);
        let denied = self.rng.gen_bool(rule.probability());

        let (claim_status, denial_reason) = if denied {
            let candidates = denial_candidates(request.diagnosis_code, claim_type);
            (ClaimStatus::Denied, candidates.choose(&mut self.rng).copied())
        } else {
            (self.statuses.sample(&mut self.rng), None)
        };

        let total_paid = paid_amount(&mut self.rng, claim_status, total_charge)
            .ok_or_else(|| amount_error("total_paid", "payment fraction was not finite"))?;

        let claim = Claim {
            claim_id,
            patient_id: request.patient.patient_id.clone(),
            provider_id: request.provider.provider_id.clone(),
            claim_date,
            admission_date,
            discharge_date,
            claim_type,
            total_charge,
            total_paid,
            claim_status,
            denial_reason,
            primary_diagnosis_code: request.diagnosis_code.to_string(),
            primary_procedure_code: request.procedure_code.map(str::to_string),
        };
        claim.validate()?;

        debug!(
            claim_id = %claim.claim_id,
            claim_type = claim.claim_type.as_str(),
            claim_status = claim.claim_status.as_str(),
            denial_rule = ?rule,
            total_charge = %claim.total_charge,
            "Generated claim"
        );
        Ok(claim)
    }

    /// Exactly `claims_per_patient` claims for each patient, in patient order,
    /// with identifiers continuing from the generator's counter.
    pub fn generate_claims(
        &mut self,
        patients: &[Patient],
        pools: ClaimPools<'_>,
        claims_per_patient: usize,
    ) -> SynthResult<Vec<Claim>> {
        let _span = info_span!(
            "generate_claims",
            patients = patients.len(),
            claims_per_patient
        )
        .entered();

        let mut claims = Vec::with_capacity(patients.len() * claims_per_patient);
        for patient in patients {
            let first_id = self.ids.reserve(claims_per_patient as u64);
            claims.extend(self.claims_for_patient(patient, pools, claims_per_patient, first_id)?);
        }

        info!(count = claims.len(), "Generated claims");
        Ok(claims)
    }

    fn claims_for_patient(
        &mut self,
        patient: &Patient,
        pools: ClaimPools<'_>,
        count: usize,
        first_id: u64,
    ) -> SynthResult<Vec<Claim>> {
        let mut claims = Vec::with_capacity(count);
        for offset in 0..count as u64 {
            let provider = pools
                .providers
                .choose(&mut self.rng)
                .ok_or_else(|| SynthError::configuration("provider pool is empty"))?;
            let diagnosis = pools.diagnosis_codes.choose(&mut self.rng).ok_or_else(|| {
                SynthError::configuration_with_code(
                    codes::configuration::EMPTY_CATALOG,
                    "diagnosis pool is empty",
                )
            })?;
            let procedure = if self.rng.gen_bool(PROCEDURE_PRESENCE) {
                pools.procedure_codes.choose(&mut self.rng)
            } else {
                None
            };

            let claim_id = self.ids.format(first_id + offset);
            claims.push(self.generate_claim(
                claim_id,
                ClaimRequest {
                    patient,
                    provider,
                    diagnosis_code: &diagnosis.code,
                    procedure_code: procedure.map(|p| p.code.as_str()),
                    service_date: None,
                },
            )?);
        }
        Ok(claims)
    }

    fn service_date(&mut self) -> SynthResult<NaiveDate> {
        let start = self
            .reference_date
            .checked_sub_months(Months::new(SERVICE_WINDOW_MONTHS))
            .ok_or_else(|| {
                SynthError::configuration(format!(
                    "reference date {} leaves no two-year service window",
                    self.reference_date
                ))
            })?;
        let span = (self.reference_date - start).num_days();
        Ok(start + Duration::days(self.rng.gen_range(0..=span)))
    }
}

/// Parallel counterpart of [`ClaimGenerator::generate_claims`].
///
/// Patient `i` gets its own stream seeded from `(seed, "claims", i)` and the
/// identifier block starting at `CLM{base + i * claims_per_patient}`, so the
/// output does not depend on thread scheduling. It differs from the sequential
/// output for the same seed, which draws every claim from one stream.
pub fn generate_claims_parallel(
    seed: u64,
    reference_date: NaiveDate,
    patients: &[Patient],
    pools: ClaimPools<'_>,
    claims_per_patient: usize,
) -> SynthResult<Vec<Claim>> {
    let _span = info_span!(
        "generate_claims_parallel",
        patients = patients.len(),
        claims_per_patient
    )
    .entered();

    let per_patient: Vec<Vec<Claim>> = patients
        .par_iter()
        .enumerate()
        .map(|(index, patient)| {
            let index = index as u64;
            let rng = seeded_rng(derive_indexed_seed(seed, CLAIM_STREAM, index));
            let mut generator = ClaimGenerator::with_rng(rng, reference_date)?;
            let first_id = CLAIM_ID_BASE + index * claims_per_patient as u64;
            generator.claims_for_patient(patient, pools, claims_per_patient, first_id)
        })
        .collect::<SynthResult<_>>()?;

    let claims: Vec<Claim> = per_patient.into_iter().flatten().collect();
    info!(count = claims.len(), "Generated claims in parallel");
    Ok(claims)
}

fn amount_error(field: &'static str, message: &str) -> SynthError {
    ValidationError::new(
        EntityKind::Claim,
        field,
        codes::validation::INVALID_AMOUNT,
        message,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_records::{catalog, Gender};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn patient() -> Patient {
        Patient {
            patient_id: "PAT100000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            gender: Gender::Female,
            zip_code: "606".to_string(),
            state: "IL".to_string(),
        }
    }

    fn provider() -> Provider {
        Provider {
            provider_id: "PROV10000".to_string(),
            npi: "1234567890".to_string(),
            provider_name: "Dr. Grace Hopper".to_string(),
            provider_type: synth_records::ProviderType::Physician,
            specialty: Some("CARDIOLOGY".to_string()),
            address: "1 Navy Way".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip_code: "22201".to_string(),
        }
    }

    #[test]
    fn test_stay_dates_add_length_of_stay() {
        let admission = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let (start, end) = stay_dates(admission, 5);
        assert_eq!(start, admission);
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_explicit_service_date_is_kept() {
        let mut generator = ClaimGenerator::new(42, reference()).unwrap();
        let (patient, provider) = (patient(), provider());
        let date = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
        let claim = generator
            .generate_claim(
                "CLM1000000".to_string(),
                ClaimRequest {
                    patient: &patient,
                    provider: &provider,
                    diagnosis_code: "I10",
                    procedure_code: Some("99213"),
                    service_date: Some(date),
                },
            )
            .unwrap();
        assert_eq!(claim.claim_date, date);
        assert_eq!(claim.primary_procedure_code.as_deref(), Some("99213"));
        if let Some(admission) = claim.admission_date {
            assert_eq!(admission, date);
        }
    }

    #[test]
    fn test_drawn_service_dates_stay_in_window() {
        let mut generator = ClaimGenerator::new(3, reference()).unwrap();
        let (patient, provider) = (patient(), provider());
        let earliest = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
        for i in 0..200 {
            let claim = generator
                .generate_claim(
                    format!("CLM{}", 1_000_000 + i),
                    ClaimRequest {
                        patient: &patient,
                        provider: &provider,
                        diagnosis_code: "M54.5",
                        procedure_code: None,
                        service_date: None,
                    },
                )
                .unwrap();
            assert!(claim.claim_date >= earliest && claim.claim_date <= reference());
        }
    }

    #[test]
    fn test_bulk_ids_are_sequential() {
        let catalog = catalog();
        let providers = vec![provider()];
        let patients = vec![patient(), patient()];
        let pools = ClaimPools::new(&providers, &catalog.diagnosis_codes, &catalog.procedure_codes)
            .unwrap();

        let mut generator = ClaimGenerator::new(1, reference()).unwrap();
        let claims = generator.generate_claims(&patients, pools, 3).unwrap();
        let ids: Vec<_> = claims.iter().map(|c| c.claim_id.as_str()).collect();
        assert_eq!(
            ids,
            ["CLM1000000", "CLM1000001", "CLM1000002", "CLM1000003", "CLM1000004", "CLM1000005"]
        );

        // a second call continues the counter
        let more = generator.generate_claims(&patients[..1], pools, 1).unwrap();
        assert_eq!(more[0].claim_id, "CLM1000006");
    }

    #[test]
    fn test_empty_pools_rejected() {
        let catalog = catalog();
        let err =
            ClaimPools::new(&[], &catalog.diagnosis_codes, &catalog.procedure_codes).unwrap_err();
        assert_eq!(err.code(), codes::configuration::DEGENERATE_PARAMETER);

        let providers = vec![provider()];
        let err = ClaimPools::new(&providers, &[], &catalog.procedure_codes).unwrap_err();
        assert_eq!(err.code(), codes::configuration::EMPTY_CATALOG);
    }
}
