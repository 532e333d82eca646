//! Bundled example instruments and curve.

use bondcurve_core::curves::query::YieldCurveInput;
use bondcurve_core::fixed_income::bond::{ACTUAL_365_BASIS, SEMIANNUAL};
use bondcurve_core::fixed_income::valuation::BondValuationInput;
use bondcurve_core::types::Money;
use chrono::NaiveDate;
use clap::ValueEnum;
use rust_decimal_macros::dec;

/// South African government bonds shipped as examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SagbExample {
    /// R186, 10.5% coupon, matures 21 Dec 2026
    R186,
    /// R2032, 8.25% coupon, matures 31 Mar 2032
    R2032,
}

impl SagbExample {
    pub fn valuation_input(self, nominal: Money) -> BondValuationInput {
        let (settlement, maturity, last_coupon, coupon_rate, ytm) = match self {
            SagbExample::R186 => (
                ymd(2017, 2, 7),
                ymd(2026, 12, 21),
                ymd(2016, 12, 21),
                dec!(0.105),
                dec!(0.0875),
            ),
            SagbExample::R2032 => (
                ymd(2024, 5, 16),
                ymd(2032, 3, 31),
                ymd(2024, 3, 31),
                dec!(0.0825),
                dec!(0.095),
            ),
        };
        BondValuationInput {
            settlement_date: settlement,
            maturity_date: maturity,
            last_coupon_date: last_coupon,
            coupon_rate,
            yield_to_maturity: ytm,
            face_value: nominal,
            day_count_basis: ACTUAL_365_BASIS,
            coupon_frequency: SEMIANNUAL,
        }
    }
}

/// Nine-knot bid/ask curve from May 2024 to May 2026, rates in percent.
pub fn example_curve() -> YieldCurveInput {
    let dates = [
        "2024-05-17", "2024-08-15", "2024-11-13", "2025-02-11", "2025-05-12",
        "2025-08-10", "2025-11-08", "2026-02-06", "2026-05-07",
    ];
    YieldCurveInput {
        dates: dates.iter().map(|d| d.to_string()).collect(),
        bid_rates: vec![
            dec!(4.50), dec!(5.00), dec!(6.00), dec!(7.20), dec!(7.60),
            dec!(8.10), dec!(9.00), dec!(10.00), dec!(11.30),
        ],
        ask_rates: vec![
            dec!(4.55), dec!(5.05), dec!(6.05), dec!(7.25), dec!(7.65),
            dec!(8.15), dec!(9.05), dec!(10.05), dec!(11.35),
        ],
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid preset date")
}
