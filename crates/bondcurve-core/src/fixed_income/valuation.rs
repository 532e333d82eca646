//! Full bond valuation wrapped in the standard computation envelope.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::fixed_income::bond::{Bond, ACTUAL_365_BASIS, SEMIANNUAL};
use crate::time_value::days_between;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::BondCurveResult;

fn default_day_count_basis() -> Decimal {
    ACTUAL_365_BASIS
}

fn default_coupon_frequency() -> u8 {
    SEMIANNUAL
}

/// Input parameters for bond valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondValuationInput {
    pub settlement_date: NaiveDate,
    pub maturity_date: NaiveDate,
    /// Most recent coupon date on or before settlement
    pub last_coupon_date: NaiveDate,
    /// Annual coupon rate as a decimal (e.g. 0.0825 = 8.25%)
    pub coupon_rate: Rate,
    /// Yield to maturity as a decimal
    pub yield_to_maturity: Rate,
    /// Nominal amount
    pub face_value: Money,
    /// Day count divisor, 365 for Actual/365
    #[serde(default = "default_day_count_basis")]
    pub day_count_basis: Decimal,
    /// Coupons per year, 2 for semiannual
    #[serde(default = "default_coupon_frequency")]
    pub coupon_frequency: u8,
}

/// A single remaining coupon and its value at settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponPayment {
    pub date: NaiveDate,
    pub days_from_settlement: i64,
    pub amount: Money,
    pub present_value: Money,
}

/// Output of bond valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondValuationOutput {
    pub face_value: Money,
    /// Clean price (all-in price less accrued interest)
    pub clean_price: Money,
    /// All-in (dirty) price
    pub all_in_price: Money,
    pub accrued_interest: Money,
    pub pv_face_value: Money,
    pub pv_coupons: Money,
    /// Coupon paid each period
    pub coupon_amount: Money,
    pub days_since_last_coupon: i64,
    pub days_to_maturity: i64,
    /// Scheduled coupons strictly after settlement
    pub num_remaining_coupons: u32,
    pub coupon_schedule: Vec<CouponPayment>,
}

impl BondValuationInput {
    pub fn to_bond(&self) -> BondCurveResult<Bond> {
        Bond::new(
            self.settlement_date,
            self.maturity_date,
            self.last_coupon_date,
            self.coupon_rate,
            self.yield_to_maturity,
            self.face_value,
            self.day_count_basis,
            self.coupon_frequency,
        )
    }
}

/// Value a bond: accrued interest, present values of face and coupons,
/// all-in and clean prices, and the remaining coupon schedule.
pub fn value_bond(
    input: &BondValuationInput,
) -> BondCurveResult<ComputationOutput<BondValuationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let bond = input.to_bond()?;
    let output = valuation_of(&bond, &mut warnings);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Bond valuation: bond-equivalent yield, fractional Actual/basis coupon periods",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Compute every reported metric for an already-validated bond.
pub fn valuation_of(bond: &Bond, warnings: &mut Vec<String>) -> BondValuationOutput {
    let coupon_amount = bond.coupon_amount();
    let coupon_schedule: Vec<CouponPayment> = bond
        .generate_coupon_dates()
        .into_iter()
        .map(|date| CouponPayment {
            date,
            days_from_settlement: days_between(bond.settlement_date(), date),
            amount: coupon_amount,
            present_value: bond.present_value_of_coupon(date),
        })
        .collect();

    if coupon_schedule.is_empty() {
        warnings.push("No coupon dates fall between the last coupon and maturity".into());
    } else if coupon_schedule
        .last()
        .is_some_and(|c| c.date != bond.maturity_date())
    {
        warnings.push(
            "Maturity is not on a coupon boundary; redemption is discounted separately".into(),
        );
    }
    let past_coupons = coupon_schedule
        .iter()
        .filter(|c| c.days_from_settlement <= 0)
        .count();
    if past_coupons > 0 {
        warnings.push(format!(
            "Last coupon is more than one period before settlement; \
             {past_coupons} scheduled coupon(s) on or before settlement are compounded forward"
        ));
    }
    if bond.face_value().is_zero() {
        warnings.push("Face value is zero; all prices are zero".into());
    }

    let pv_face_value = bond.calculate_present_value_of_face_value();
    let pv_coupons: Money = coupon_schedule.iter().map(|c| c.present_value).sum();
    let accrued_interest = bond.calculate_accrued_interest();
    let all_in_price = pv_coupons + pv_face_value;

    BondValuationOutput {
        face_value: bond.face_value(),
        clean_price: all_in_price - accrued_interest,
        all_in_price,
        accrued_interest,
        pv_face_value,
        pv_coupons,
        coupon_amount,
        days_since_last_coupon: bond.days_since_last_coupon(),
        days_to_maturity: bond.days_to_maturity(),
        num_remaining_coupons: (coupon_schedule.len() - past_coupons) as u32,
        coupon_schedule,
    }
}
