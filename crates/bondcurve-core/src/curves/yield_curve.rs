//! Bid/ask yield curve keyed by calendar date.
//!
//! Queries resolve in three ways: an exact knot, linear interpolation between
//! the bracketing knots, or flat extrapolation from the last knot. Dates before
//! the first knot are out of range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::BondCurveError;
use crate::time_value::days_between;
use crate::types::PercentRate;
use crate::BondCurveResult;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const BEFORE_FIRST_DATE: &str = "Date is before the first available date.";
pub const INVALID_RATE_TYPE: &str = "Rate type must be 'bid', 'ask', or 'mid'.";

/// Which side of the quote to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Bid,
    Ask,
    /// Average of bid and ask
    Mid,
}

impl FromStr for RateType {
    type Err = BondCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bid" => Ok(RateType::Bid),
            "ask" => Ok(RateType::Ask),
            "mid" => Ok(RateType::Mid),
            _ => Err(BondCurveError::InvalidArgument(INVALID_RATE_TYPE.into())),
        }
    }
}

/// Bid and ask quotes for one date, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePair {
    pub bid: PercentRate,
    pub ask: PercentRate,
}

impl RatePair {
    pub fn new(bid: PercentRate, ask: PercentRate) -> Self {
        RatePair { bid, ask }
    }

    pub fn mid(&self) -> PercentRate {
        (self.bid + self.ask) / Decimal::TWO
    }

    pub fn select(&self, rate_type: RateType) -> PercentRate {
        match rate_type {
            RateType::Bid => self.bid,
            RateType::Ask => self.ask,
            RateType::Mid => self.mid(),
        }
    }
}

/// How a query date was mapped onto the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Exact,
    Interpolated,
    Extrapolated,
}

/// Ordered date -> (bid, ask) mapping. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YieldCurve {
    rates: BTreeMap<NaiveDate, RatePair>,
}

impl YieldCurve {
    /// Build a curve from parallel arrays of `yyyy-MM-dd` dates, bid and ask rates.
    ///
    /// Duplicate dates keep the last pair supplied.
    pub fn new<S: AsRef<str>>(
        dates: &[S],
        bid_rates: &[PercentRate],
        ask_rates: &[PercentRate],
    ) -> BondCurveResult<Self> {
        if dates.len() != bid_rates.len() || dates.len() != ask_rates.len() {
            return Err(BondCurveError::InvalidInput {
                field: "dates/bid_rates/ask_rates".into(),
                reason: "All input arrays must have the same length.".into(),
            });
        }

        let mut points = Vec::with_capacity(dates.len());
        for ((date, bid), ask) in dates.iter().zip(bid_rates).zip(ask_rates) {
            let date = parse_date(date.as_ref())?;
            points.push((date, RatePair::new(*bid, *ask)));
        }

        Ok(Self::from_points(points))
    }

    /// Build a curve from typed knots. Duplicate dates keep the last pair supplied.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, RatePair)>,
    {
        let rates: BTreeMap<NaiveDate, RatePair> = points.into_iter().collect();
        debug!(
            knots = rates.len(),
            first = ?rates.keys().next(),
            last = ?rates.keys().next_back(),
            "yield curve constructed"
        );
        YieldCurve { rates }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rates.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rates.keys().next_back().copied()
    }

    /// Knots in ascending date order.
    pub fn knots(&self) -> impl Iterator<Item = (NaiveDate, RatePair)> + '_ {
        self.rates.iter().map(|(d, r)| (*d, *r))
    }

    /// Rate for `date`, with the rate type given as `bid`, `ask` or `mid` in any case.
    ///
    /// The date is resolved before the rate type is checked, so a date before
    /// the first knot reports out-of-range regardless of `rate_type`.
    pub fn get_rate(&self, date: NaiveDate, rate_type: &str) -> BondCurveResult<PercentRate> {
        let pair = self.rate_pair(date)?;
        let rate_type: RateType = rate_type.parse()?;
        Ok(pair.select(rate_type))
    }

    pub fn rate(&self, date: NaiveDate, rate_type: RateType) -> BondCurveResult<PercentRate> {
        Ok(self.rate_pair(date)?.select(rate_type))
    }

    /// Bid/ask pair resolved for `date`.
    pub fn rate_pair(&self, date: NaiveDate) -> BondCurveResult<RatePair> {
        self.resolve(date).map(|(pair, _)| pair)
    }

    /// Bid/ask pair resolved for `date`, with how it was obtained.
    pub fn resolve(&self, date: NaiveDate) -> BondCurveResult<(RatePair, Resolution)> {
        if let Some(pair) = self.rates.get(&date) {
            trace!(%date, "exact knot");
            return Ok((*pair, Resolution::Exact));
        }

        let lower = self.rates.range(..date).next_back();
        let higher = self.rates.range((Excluded(date), Unbounded)).next();

        match (lower, higher) {
            (None, _) => Err(BondCurveError::OutOfRange(BEFORE_FIRST_DATE.into())),
            (Some((_, last)), None) => {
                trace!(%date, "flat extrapolation from last knot");
                Ok((*last, Resolution::Extrapolated))
            }
            (Some((lower_date, lower_pair)), Some((higher_date, higher_pair))) => {
                trace!(%date, lower = %lower_date, higher = %higher_date, "interpolating");
                let total_days = days_between(*lower_date, *higher_date);
                let days_to_target = days_between(*lower_date, date);
                let pair = RatePair::new(
                    interpolate(lower_pair.bid, higher_pair.bid, days_to_target, total_days),
                    interpolate(lower_pair.ask, higher_pair.ask, days_to_target, total_days),
                );
                Ok((pair, Resolution::Interpolated))
            }
        }
    }
}

/// `lower + days_to_target * (higher - lower) / total_days`
fn interpolate(
    lower: PercentRate,
    higher: PercentRate,
    days_to_target: i64,
    total_days: i64,
) -> PercentRate {
    lower + Decimal::from(days_to_target) * (higher - lower) / Decimal::from(total_days)
}

/// Strict `yyyy-MM-dd`: zero-padded month and day, no surrounding whitespace.
pub fn parse_date(s: &str) -> BondCurveResult<NaiveDate> {
    let invalid = |detail: String| BondCurveError::InvalidInput {
        field: "date".into(),
        reason: format!("'{s}' is not a yyyy-MM-dd date: {detail}"),
    };

    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid("expected 10 characters".into()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}
