use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Dollar amount rounded half-away-from-zero to cents, always at scale 2.
///
/// Returns `None` for non-finite input.
pub fn to_money(amount: f64) -> Option<Decimal> {
    Decimal::from_f64(amount).map(round_cents)
}

pub fn round_cents(amount: Decimal) -> Decimal {
    let mut value = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value
}

/// `$12,345.67`
pub fn format_usd(amount: Decimal) -> String {
    let value = round_cents(amount);
    let text = value.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
