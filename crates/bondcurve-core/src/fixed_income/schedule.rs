//! Coupon schedule generation.

use chrono::{Months, NaiveDate};

/// Months between consecutive coupons for a given payment frequency.
pub fn months_per_period(frequency: u8) -> u32 {
    12 / u32::from(frequency)
}

/// Generate coupon dates strictly after `last_coupon` and on or before `maturity`.
///
/// Each date is obtained by stepping the previous one forward by
/// `12 / frequency` months. Steps are chained, so a day clamped at a short
/// month end (31 Mar -> 30 Sep) stays clamped for the rest of the schedule.
/// Maturity is only included when it lands exactly on a step.
pub fn generate_coupon_dates(
    last_coupon: NaiveDate,
    maturity: NaiveDate,
    frequency: u8,
) -> Vec<NaiveDate> {
    let step = Months::new(months_per_period(frequency));
    let mut dates = Vec::new();

    let mut next = last_coupon.checked_add_months(step);
    while let Some(date) = next {
        if date > maturity {
            break;
        }
        dates.push(date);
        next = date.checked_add_months(step);
    }

    dates
}
