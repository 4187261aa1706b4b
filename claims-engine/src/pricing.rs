use rand::Rng;
use rust_decimal::Decimal;
use synth_records::{to_money, ClaimType};

/// Inclusive USD charge range for one claim type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeBand {
    pub min: f64,
    pub max: f64,
}

impl ChargeBand {
    pub fn for_claim_type(claim_type: ClaimType) -> Self {
        let (min, max) = match claim_type {
            ClaimType::Inpatient => (5_000.0, 50_000.0),
            ClaimType::Emergency => (500.0, 5_000.0),
            ClaimType::Outpatient => (200.0, 3_000.0),
            ClaimType::Physician => (100.0, 2_000.0),
            ClaimType::Ambulatory => (300.0, 4_000.0),
        };
        Self { min, max }
    }

    /// Uniform charge in the band, rounded to cents
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Decimal> {
        to_money(rng.gen_range(self.min..=self.max))
    }

    pub fn contains(&self, charge: Decimal) -> bool {
        match (Decimal::try_from(self.min), Decimal::try_from(self.max)) {
            (Ok(min), Ok(max)) => charge >= min && charge <= max,
            _ => false,
        }
    }
}
