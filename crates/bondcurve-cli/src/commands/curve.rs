use clap::Args;
use serde_json::Value;
use tracing::info;

use bondcurve_core::curves::query::{self, RateQueryInput, YieldCurveInput};
use bondcurve_core::curves::yield_curve::parse_date;

use crate::commands::presets;
use crate::input;

/// Arguments for a yield curve lookup
#[derive(Args)]
pub struct CurveRateArgs {
    /// Query date (yyyy-MM-dd)
    #[arg(long)]
    pub date: String,

    /// Rate type: bid, ask or mid
    #[arg(long)]
    pub rate_type: String,

    /// JSON curve file with dates, bid_rates and ask_rates
    #[arg(long)]
    pub input: Option<String>,

    /// Use the bundled nine-knot curve even when stdin is piped
    #[arg(long, conflicts_with = "input")]
    pub example: bool,
}

pub fn run_curve_rate(args: CurveRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let curve: YieldCurveInput = if args.example {
        presets::example_curve()
    } else {
        input::load(args.input.as_deref())?.unwrap_or_else(presets::example_curve)
    };

    let query_input = RateQueryInput {
        curve,
        date: parse_date(&args.date)?,
        rate_type: args.rate_type,
    };
    info!(
        date = %query_input.date,
        rate_type = %query_input.rate_type,
        knots = query_input.curve.dates.len(),
        "querying yield curve"
    );
    let result = query::query_rate(&query_input)?;
    Ok(serde_json::to_value(result)?)
}
