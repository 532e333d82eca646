//! Fixed-coupon bond valued off a bond-equivalent yield.
//!
//! A [`Bond`] is an immutable set of terms validated once at construction.
//! Every metric is recomputed from those terms on each call; nothing is cached.
//!
//! Discounting uses a fractional number of coupon periods derived from actual
//! days, `(1 + y/f) ^ (days / basis * f)`, rather than an integer period index.
//! This is the Actual/365 convention quoted for South African government bonds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::error::BondCurveError;
use crate::fixed_income::schedule::generate_coupon_dates;
use crate::time_value::{days_between, discount, year_fraction};
use crate::types::{Money, Rate};
use crate::BondCurveResult;

/// Actual/365 fixed day-count basis.
pub const ACTUAL_365_BASIS: Decimal = dec!(365);

/// Semiannual coupon payments.
pub const SEMIANNUAL: u8 = 2;

/// Terms are private so a `Bond` can only exist in a validated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bond {
    settlement_date: NaiveDate,
    maturity_date: NaiveDate,
    last_coupon_date: NaiveDate,
    coupon_rate: Rate,
    yield_to_maturity: Rate,
    face_value: Money,
    day_count_basis: Decimal,
    coupon_frequency: u8,
}

impl Bond {
    /// Build a bond from its terms, rejecting any that break the contract.
    ///
    /// Fails with [`BondCurveError::InvalidInput`] when a rate or the face value
    /// is negative, settlement is not strictly before maturity, the last coupon
    /// falls after settlement, the day-count basis is not positive, or the
    /// coupon frequency is not 1, 2, 4 or 12.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settlement_date: NaiveDate,
        maturity_date: NaiveDate,
        last_coupon_date: NaiveDate,
        coupon_rate: Rate,
        yield_to_maturity: Rate,
        face_value: Money,
        day_count_basis: Decimal,
        coupon_frequency: u8,
    ) -> BondCurveResult<Self> {
        let bond = Bond {
            settlement_date,
            maturity_date,
            last_coupon_date,
            coupon_rate,
            yield_to_maturity,
            face_value,
            day_count_basis,
            coupon_frequency,
        };
        bond.validate()?;
        debug!(
            settlement = %bond.settlement_date,
            maturity = %bond.maturity_date,
            last_coupon = %bond.last_coupon_date,
            "bond constructed"
        );
        Ok(bond)
    }

    /// Actual/365 semiannual bond, the convention for South African government bonds.
    pub fn sagb(
        settlement_date: NaiveDate,
        maturity_date: NaiveDate,
        last_coupon_date: NaiveDate,
        coupon_rate: Rate,
        yield_to_maturity: Rate,
        face_value: Money,
    ) -> BondCurveResult<Self> {
        Self::new(
            settlement_date,
            maturity_date,
            last_coupon_date,
            coupon_rate,
            yield_to_maturity,
            face_value,
            ACTUAL_365_BASIS,
            SEMIANNUAL,
        )
    }

    fn validate(&self) -> BondCurveResult<()> {
        if self.coupon_rate < Decimal::ZERO
            || self.yield_to_maturity < Decimal::ZERO
            || self.face_value < Decimal::ZERO
        {
            return Err(BondCurveError::InvalidInput {
                field: "coupon_rate/yield_to_maturity/face_value".into(),
                reason: "Coupon rate, yield, and face value must be non-negative.".into(),
            });
        }
        if self.settlement_date >= self.maturity_date {
            return Err(BondCurveError::InvalidInput {
                field: "settlement_date".into(),
                reason: "Settlement date must be before maturity date.".into(),
            });
        }
        if self.last_coupon_date > self.settlement_date {
            return Err(BondCurveError::InvalidInput {
                field: "last_coupon_date".into(),
                reason: "Last coupon date must be on or before settlement date.".into(),
            });
        }
        if self.day_count_basis <= Decimal::ZERO {
            return Err(BondCurveError::InvalidInput {
                field: "day_count_basis".into(),
                reason: "Day count basis must be positive.".into(),
            });
        }
        if !matches!(self.coupon_frequency, 1 | 2 | 4 | 12) {
            return Err(BondCurveError::InvalidInput {
                field: "coupon_frequency".into(),
                reason: "Coupon frequency must be 1, 2, 4, or 12.".into(),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn settlement_date(&self) -> NaiveDate {
        self.settlement_date
    }

    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity_date
    }

    pub fn last_coupon_date(&self) -> NaiveDate {
        self.last_coupon_date
    }

    pub fn coupon_rate(&self) -> Rate {
        self.coupon_rate
    }

    pub fn yield_to_maturity(&self) -> Rate {
        self.yield_to_maturity
    }

    pub fn face_value(&self) -> Money {
        self.face_value
    }

    pub fn day_count_basis(&self) -> Decimal {
        self.day_count_basis
    }

    pub fn coupon_frequency(&self) -> u8 {
        self.coupon_frequency
    }

    // -----------------------------------------------------------------------
    // Re-valuation with modified terms
    // -----------------------------------------------------------------------

    /// Same bond settling on a different date.
    pub fn with_settlement_date(&self, settlement_date: NaiveDate) -> BondCurveResult<Self> {
        Self::new(
            settlement_date,
            self.maturity_date,
            self.last_coupon_date,
            self.coupon_rate,
            self.yield_to_maturity,
            self.face_value,
            self.day_count_basis,
            self.coupon_frequency,
        )
    }

    /// Same bond priced at a different yield.
    pub fn with_yield_to_maturity(&self, yield_to_maturity: Rate) -> BondCurveResult<Self> {
        Self::new(
            self.settlement_date,
            self.maturity_date,
            self.last_coupon_date,
            self.coupon_rate,
            yield_to_maturity,
            self.face_value,
            self.day_count_basis,
            self.coupon_frequency,
        )
    }

    /// Same bond for a different nominal.
    pub fn with_face_value(&self, face_value: Money) -> BondCurveResult<Self> {
        Self::new(
            self.settlement_date,
            self.maturity_date,
            self.last_coupon_date,
            self.coupon_rate,
            self.yield_to_maturity,
            face_value,
            self.day_count_basis,
            self.coupon_frequency,
        )
    }

    // -----------------------------------------------------------------------
    // Metrics
    // -----------------------------------------------------------------------

    pub fn days_since_last_coupon(&self) -> i64 {
        days_between(self.last_coupon_date, self.settlement_date)
    }

    pub fn days_to_maturity(&self) -> i64 {
        days_between(self.settlement_date, self.maturity_date)
    }

    /// Flat coupon paid each period.
    pub fn coupon_amount(&self) -> Money {
        self.coupon_rate / Decimal::from(self.coupon_frequency) * self.face_value
    }

    /// Accrued interest: `coupon_rate * (days since last coupon / basis) * face_value`.
    pub fn calculate_accrued_interest(&self) -> Money {
        self.coupon_rate
            * year_fraction(self.days_since_last_coupon(), self.day_count_basis)
            * self.face_value
    }

    /// Coupon dates after the last coupon, up to and including maturity.
    pub fn generate_coupon_dates(&self) -> Vec<NaiveDate> {
        generate_coupon_dates(
            self.last_coupon_date,
            self.maturity_date,
            self.coupon_frequency,
        )
    }

    /// Present value of the redemption amount paid at maturity.
    pub fn calculate_present_value_of_face_value(&self) -> Money {
        self.discount_from_settlement(self.face_value, self.days_to_maturity())
    }

    /// Present value of a single coupon paid on `coupon_date`.
    pub fn present_value_of_coupon(&self, coupon_date: NaiveDate) -> Money {
        let days = days_between(self.settlement_date, coupon_date);
        self.discount_from_settlement(self.coupon_amount(), days)
    }

    /// Sum of the present values of every generated coupon.
    pub fn calculate_present_value_of_coupons(&self) -> Money {
        self.generate_coupon_dates()
            .into_iter()
            .map(|date| self.present_value_of_coupon(date))
            .sum()
    }

    /// Dirty (all-in) price: PV of coupons plus PV of face value.
    pub fn calculate_all_in_price(&self) -> Money {
        self.calculate_present_value_of_coupons() + self.calculate_present_value_of_face_value()
    }

    /// Clean price: all-in price less accrued interest.
    pub fn calculate_clean_price(&self) -> Money {
        self.calculate_present_value_of_face_value() + self.calculate_present_value_of_coupons()
            - self.calculate_accrued_interest()
    }

    fn discount_from_settlement(&self, amount: Money, days: i64) -> Money {
        discount(
            amount,
            self.yield_to_maturity,
            self.coupon_frequency,
            days,
            self.day_count_basis,
        )
    }
}
