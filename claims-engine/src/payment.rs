use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use synth_records::{round_cents, ClaimStatus};

/// Share of the charge a payer covers, or `None` when nothing is paid
pub fn payment_fraction_range(status: ClaimStatus) -> Option<(f64, f64)> {
    match status {
        ClaimStatus::Approved => Some((0.70, 0.95)),
        ClaimStatus::Partial => Some((0.30, 0.60)),
        ClaimStatus::Denied | ClaimStatus::Pending | ClaimStatus::Rejected => None,
    }
}

/// Paid amount for an adjudicated claim, rounded to cents.
///
/// Draws from `rng` only for statuses that carry a payment.
pub fn paid_amount<R: Rng + ?Sized>(
    rng: &mut R,
    status: ClaimStatus,
    total_charge: Decimal,
) -> Option<Decimal> {
    match payment_fraction_range(status) {
        Some((low, high)) => {
            let fraction = Decimal::from_f64(rng.gen_range(low..high))?;
            Some(round_cents(total_charge * fraction))
        }
        None => Some(round_cents(Decimal::ZERO)),
    }
}
