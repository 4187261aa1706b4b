use chrono::{Duration, Months, NaiveDate};
use fake::faker::address::en::PostCode;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use error_common::{SynthError, SynthResult};

use crate::ids::IdSequence;
use crate::models::{Gender, Patient};
use crate::sampling::Categorical;
use crate::seeds::{derive_seed, seeded_rng, SynthRng, PATIENT_STREAM};
use crate::validation::Validate;

pub const PATIENT_STATES: [&str; 30] = [
    "CA", "TX", "FL", "NY", "PA", "IL", "OH", "GA", "NC", "MI", "NJ", "VA", "WA", "AZ", "MA",
    "TN", "IN", "MO", "MD", "WI", "CO", "MN", "SC", "AL", "LA", "KY", "OR", "OK", "CT", "IA",
];

const GENDER_WEIGHTS: [(Gender, f64); 4] = [
    (Gender::Male, 0.48),
    (Gender::Female, 0.50),
    (Gender::Other, 0.01),
    (Gender::Unknown, 0.01),
];

/// Oldest patient, in months before the reference date
const MAX_AGE_MONTHS: u32 = 100 * 12;

/// De-identified patient demographics, one independent record per call
pub struct PatientFactory {
    rng: SynthRng,
    reference_date: NaiveDate,
    genders: Categorical<Gender>,
    ids: IdSequence,
}

impl PatientFactory {
    pub fn new(seed: u64, reference_date: NaiveDate) -> SynthResult<Self> {
        Ok(Self {
            rng: seeded_rng(derive_seed(seed, PATIENT_STREAM)),
            reference_date,
            genders: Categorical::new(&GENDER_WEIGHTS)?,
            ids: IdSequence::patients(),
        })
    }

    pub fn generate_patient(&mut self, patient_id: String) -> SynthResult<Patient> {
        let date_of_birth = self.birth_date()?;
        let gender = self.genders.sample(&mut self.rng);

        // only the first three ZIP digits leave the factory
        let zip: String = PostCode().fake_with_rng(&mut self.rng);
        let zip_code: String = zip.chars().take_while(char::is_ascii_digit).take(3).collect();

        let state = PATIENT_STATES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PATIENT_STATES[0]);

        let patient = Patient {
            patient_id,
            date_of_birth,
            gender,
            zip_code,
            state: state.to_string(),
        };
        patient.validate()?;

        debug!(
            patient_id = %patient.patient_id,
            gender = patient.gender.as_str(),
            state = %patient.state,
            "Generated patient"
        );
        Ok(patient)
    }

    /// `count` patients with sequential identifiers from `PAT100000`
    pub fn generate_patients(&mut self, count: usize) -> SynthResult<Vec<Patient>> {
        let mut patients = Vec::with_capacity(count);
        for _ in 0..count {
            let patient_id = self.ids.next_id();
            patients.push(self.generate_patient(patient_id)?);
        }
        info!(count = patients.len(), "Generated patients");
        Ok(patients)
    }

    fn birth_date(&mut self) -> SynthResult<NaiveDate> {
        let earliest = self
            .reference_date
            .checked_sub_months(Months::new(MAX_AGE_MONTHS))
            .ok_or_else(|| {
                SynthError::configuration(format!(
                    "reference date {} leaves no 100-year birth window",
                    self.reference_date
                ))
            })?;
        let span = (self.reference_date - earliest).num_days();
        Ok(earliest + Duration::days(self.rng.gen_range(0..=span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_sequential_ids() {
        let mut factory = PatientFactory::new(42, reference()).unwrap();
        let patients = factory.generate_patients(3).unwrap();
        let ids: Vec<_> = patients.iter().map(|p| p.patient_id.as_str()).collect();
        assert_eq!(ids, ["PAT100000", "PAT100001", "PAT100002"]);
    }

    #[test]
    fn test_birth_dates_within_window() {
        let mut factory = PatientFactory::new(7, reference()).unwrap();
        let earliest = NaiveDate::from_ymd_opt(1924, 6, 30).unwrap();
        for patient in factory.generate_patients(200).unwrap() {
            assert!(patient.date_of_birth >= earliest);
            assert!(patient.date_of_birth <= reference());
        }
    }

    #[test]
    fn test_same_seed_same_patients() {
        let a = PatientFactory::new(11, reference())
            .unwrap()
            .generate_patients(20)
            .unwrap();
        let b = PatientFactory::new(11, reference())
            .unwrap()
            .generate_patients(20)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zip_prefix_is_three_digits() {
        let mut factory = PatientFactory::new(42, reference()).unwrap();
        for patient in factory.generate_patients(1000).unwrap() {
            assert_eq!(patient.zip_code.len(), 3);
            assert!(patient.zip_code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_states_come_from_list() {
        let mut factory = PatientFactory::new(3, reference()).unwrap();
        for patient in factory.generate_patients(100).unwrap() {
            assert!(PATIENT_STATES.contains(&patient.state.as_str()));
        }
    }
}
