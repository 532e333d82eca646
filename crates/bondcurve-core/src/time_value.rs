//! Day-count and discounting primitives for the bond engine.
//!
//! Discounting follows a bond-equivalent-yield model in which the exponent is
//! a fractional number of coupon periods derived from actual elapsed days:
//!
//! ```text
//! PV = amount / (1 + y/f) ^ (days / basis * f)
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::types::{Money, Rate};

/// Exact number of calendar days from `start` to `end` (negative if `end` precedes `start`).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Actual/basis year fraction for a raw day count.
pub fn year_fraction(days: i64, day_count_basis: Decimal) -> Decimal {
    Decimal::from(days) / day_count_basis
}

/// Number of (possibly fractional) coupon periods spanned by `days`.
pub fn coupon_periods(days: i64, day_count_basis: Decimal, frequency: u8) -> Decimal {
    year_fraction(days, day_count_basis) * Decimal::from(frequency)
}

/// Discount `amount` over `days` at an annual yield compounded `frequency` times a year.
///
/// Returns zero when the growth factor overflows the decimal range.
pub fn discount(
    amount: Money,
    annual_yield: Rate,
    frequency: u8,
    days: i64,
    day_count_basis: Decimal,
) -> Money {
    let periodic_yield = annual_yield / Decimal::from(frequency);
    let periods = coupon_periods(days, day_count_basis, frequency);
    match (Decimal::ONE + periodic_yield).checked_powd(periods) {
        Some(growth) if !growth.is_zero() => amount / growth,
        _ => Decimal::ZERO,
    }
}
