use fake::faker::address::en::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use error_common::SynthResult;

use crate::ids::IdSequence;
use crate::models::{Provider, ProviderType};
use crate::sampling::Categorical;
use crate::seeds::{derive_seed, seeded_rng, SynthRng, PROVIDER_STREAM};
use crate::validation::Validate;

pub const PROVIDER_STATES: [&str; 20] = [
    "CA", "TX", "FL", "NY", "PA", "IL", "OH", "GA", "NC", "MI", "NJ", "VA", "WA", "AZ", "MA",
    "TN", "IN", "MO", "MD", "WI",
];

pub const SPECIALTIES: [&str; 18] = [
    "CARDIOLOGY",
    "ONCOLOGY",
    "ORTHOPEDICS",
    "NEUROLOGY",
    "PEDIATRICS",
    "EMERGENCY MEDICINE",
    "FAMILY MEDICINE",
    "INTERNAL MEDICINE",
    "SURGERY",
    "RADIOLOGY",
    "PATHOLOGY",
    "ANESTHESIOLOGY",
    "PSYCHIATRY",
    "DERMATOLOGY",
    "OPHTHALMOLOGY",
    "UROLOGY",
    "GYNECOLOGY",
    "PULMONOLOGY",
];

const PROVIDER_TYPE_WEIGHTS: [(ProviderType, f64); 7] = [
    (ProviderType::Physician, 0.40),
    (ProviderType::Hospital, 0.25),
    (ProviderType::Clinic, 0.15),
    (ProviderType::Emergency, 0.08),
    (ProviderType::Ambulatory, 0.07),
    (ProviderType::Laboratory, 0.03),
    (ProviderType::Imaging, 0.02),
];

/// Provider identity, location and specialty records
pub struct ProviderFactory {
    rng: SynthRng,
    provider_types: Categorical<ProviderType>,
    ids: IdSequence,
}

impl ProviderFactory {
    pub fn new(seed: u64) -> SynthResult<Self> {
        Ok(Self {
            rng: seeded_rng(derive_seed(seed, PROVIDER_STREAM)),
            provider_types: Categorical::new(&PROVIDER_TYPE_WEIGHTS)?,
            ids: IdSequence::providers(),
        })
    }

    /// 10 digits; a leading 1 marks an individual, 2 an organization
    pub fn generate_npi(&mut self) -> String {
        let mut npi = String::with_capacity(10);
        npi.push(if self.rng.gen_bool(0.5) { '1' } else { '2' });
        for _ in 0..9 {
            npi.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
        }
        npi
    }

    pub fn generate_provider(&mut self, provider_id: String) -> SynthResult<Provider> {
        let provider_type = self.provider_types.sample(&mut self.rng);
        let provider_name = self.provider_name(provider_type);

        let specialty = if provider_type.has_specialty() {
            SPECIALTIES.choose(&mut self.rng).map(|s| s.to_string())
        } else {
            None
        };

        let city: String = CityName().fake_with_rng(&mut self.rng);
        let state = PROVIDER_STATES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PROVIDER_STATES[0]);
        // PostCode yields "#####" or "#####-####"; keep the 5-digit part
        let zip: String = PostCode().fake_with_rng(&mut self.rng);
        let zip_code: String = zip.chars().take_while(char::is_ascii_digit).take(5).collect();
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);

        let provider = Provider {
            provider_id,
            npi: self.generate_npi(),
            provider_name,
            provider_type,
            specialty,
            address: format!("{} {}", building, street),
            city,
            state: state.to_string(),
            zip_code,
        };
        provider.validate()?;

        debug!(
            provider_id = %provider.provider_id,
            provider_type = provider.provider_type.as_str(),
            "Generated provider"
        );
        Ok(provider)
    }

    /// `count` providers with sequential identifiers from `PROV10000`
    pub fn generate_providers(&mut self, count: usize) -> SynthResult<Vec<Provider>> {
        let mut providers = Vec::with_capacity(count);
        for _ in 0..count {
            let provider_id = self.ids.next_id();
            providers.push(self.generate_provider(provider_id)?);
        }
        info!(count = providers.len(), "Generated providers");
        Ok(providers)
    }

    fn provider_name(&mut self, provider_type: ProviderType) -> String {
        match provider_type {
            ProviderType::Physician => {
                let first: String = FirstName().fake_with_rng(&mut self.rng);
                let last: String = LastName().fake_with_rng(&mut self.rng);
                format!("Dr. {} {}", first, last)
            }
            ProviderType::Hospital => {
                let last: String = LastName().fake_with_rng(&mut self.rng);
                format!("{} {}", last, provider_type.as_str())
            }
            _ => {
                let company: String = CompanyName().fake_with_rng(&mut self.rng);
                format!("{} {}", company, provider_type.as_str())
            }
        }
    }
}
