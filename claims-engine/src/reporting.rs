use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use synth_records::{round_cents, Claim, ClaimStatus, ClaimType};
use tracing::info;

/// Aggregate view of a generated claim set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimSummary {
    pub total_claims: usize,
    pub by_status: BTreeMap<ClaimStatus, usize>,
    pub by_type: BTreeMap<ClaimType, usize>,
    pub denied_claims: usize,
    /// Denied share of all claims, 0.0 for an empty set
    pub denial_rate: f64,
    pub total_charged: Decimal,
    pub total_paid: Decimal,
}

impl ClaimSummary {
    pub fn from_claims(claims: &[Claim]) -> Self {
        let mut by_status = BTreeMap::new();
        let mut by_type = BTreeMap::new();
        let mut total_charged = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;

        for claim in claims {
            *by_status.entry(claim.claim_status).or_insert(0) += 1;
            *by_type.entry(claim.claim_type).or_insert(0) += 1;
            total_charged += claim.total_charge;
            total_paid += claim.total_paid;
        }

        let denied_claims = by_status.get(&ClaimStatus::Denied).copied().unwrap_or(0);
        let denial_rate = if claims.is_empty() {
            0.0
        } else {
            denied_claims as f64 / claims.len() as f64
        };

        Self {
            total_claims: claims.len(),
            by_status,
            by_type,
            denied_claims,
            denial_rate,
            total_charged: round_cents(total_charged),
            total_paid: round_cents(total_paid),
        }
    }

    pub fn log(&self) {
        info!(
            total_claims = self.total_claims,
            denied_claims = self.denied_claims,
            denial_rate = self.denial_rate,
            total_charged = %self.total_charged,
            total_paid = %self.total_paid,
            "Claim summary"
        );
        for (status, count) in &self.by_status {
            info!(status = status.as_str(), count, "Claims by status");
        }
        for (claim_type, count) in &self.by_type {
            info!(claim_type = claim_type.as_str(), count, "Claims by type");
        }
    }
}
