use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every emitted amount carries.
pub const CENT_SCALE: u32 = 2;

/// Balances smaller than this (in absolute value) are treated as paid off.
pub const SETTLEMENT_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round an amount to whole cents, half-up (midpoint away from zero).
///
/// # Examples
///
/// ```
/// use emi_schedule::core::rounding::round_to_cents;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_cents(dec!(833.3333)), dec!(833.33));
/// assert_eq!(round_to_cents(dec!(0.125)), dec!(0.13));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Snap a residual balance to exactly zero once it falls under one cent.
///
/// Absorbs the drift left by the recurrence so a schedule closes on a clean
/// zero instead of a fractional cent or a tiny negative balance.
pub fn clamp_residual(balance: Decimal) -> Decimal {
    if balance.abs() < SETTLEMENT_THRESHOLD {
        Decimal::ZERO
    } else {
        balance
    }
}
