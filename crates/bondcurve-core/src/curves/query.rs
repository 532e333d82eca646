//! Serde-facing curve query wrapped in the standard computation envelope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::curves::yield_curve::{RatePair, RateType, Resolution, YieldCurve};
use crate::types::{with_metadata, ComputationOutput, PercentRate};
use crate::BondCurveResult;

/// Parallel arrays describing a bid/ask curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldCurveInput {
    /// Knot dates as `yyyy-MM-dd`
    pub dates: Vec<String>,
    /// Bid rates in percentage points
    pub bid_rates: Vec<PercentRate>,
    /// Ask rates in percentage points
    pub ask_rates: Vec<PercentRate>,
}

impl YieldCurveInput {
    pub fn build(&self) -> BondCurveResult<YieldCurve> {
        YieldCurve::new(self.dates.as_slice(), &self.bid_rates, &self.ask_rates)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQueryInput {
    pub curve: YieldCurveInput,
    pub date: NaiveDate,
    /// `bid`, `ask` or `mid`, any case
    pub rate_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQueryOutput {
    pub date: NaiveDate,
    pub rate_type: RateType,
    /// Requested rate in percentage points
    pub rate: PercentRate,
    /// Bid/ask pair the rate was read from
    pub pair: RatePair,
    pub resolution: Resolution,
}

/// Build the curve described by `input` and read one rate from it.
pub fn query_rate(input: &RateQueryInput) -> BondCurveResult<ComputationOutput<RateQueryOutput>> {
    let start = Instant::now();
    let curve = input.curve.build()?;
    let output = query_curve(&curve, input.date, &input.rate_type)?;

    let mut warnings: Vec<String> = Vec::new();
    if output.resolution == Resolution::Extrapolated {
        warnings.push(format!(
            "{} is beyond the last knot; last available rate used",
            input.date
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Yield curve lookup: exact knot, linear interpolation in days, flat extrapolation",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Read one rate from an existing curve.
pub fn query_curve(
    curve: &YieldCurve,
    date: NaiveDate,
    rate_type: &str,
) -> BondCurveResult<RateQueryOutput> {
    let (pair, resolution) = curve.resolve(date)?;
    let rate_type: RateType = rate_type.parse()?;
    Ok(RateQueryOutput {
        date,
        rate_type,
        rate: pair.select(rate_type),
        pair,
        resolution,
    })
}
