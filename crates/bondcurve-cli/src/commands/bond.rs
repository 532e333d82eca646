use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing::info;

use bondcurve_core::fixed_income::bond::{ACTUAL_365_BASIS, SEMIANNUAL};
use bondcurve_core::fixed_income::valuation::{self, BondValuationInput};

use crate::commands::presets::SagbExample;
use crate::input;

/// Arguments for bond valuation
#[derive(Args)]
pub struct BondPriceArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Value a bundled example bond instead of reading input
    #[arg(
        long,
        value_enum,
        conflicts_with_all = ["input", "settlement", "maturity", "last_coupon", "coupon_rate"]
    )]
    pub example: Option<SagbExample>,

    /// Nominal amount; defaults to 100 for examples and manual terms
    #[arg(long)]
    pub nominal: Option<Decimal>,

    /// Yield to maturity as a decimal (e.g. 0.095); overrides the input
    #[arg(long)]
    pub ytm: Option<Decimal>,

    /// Settlement date (yyyy-MM-dd), for manual terms
    #[arg(long, requires_all = ["maturity", "last_coupon", "coupon_rate", "ytm"])]
    pub settlement: Option<NaiveDate>,

    /// Maturity date (yyyy-MM-dd), for manual terms
    #[arg(long)]
    pub maturity: Option<NaiveDate>,

    /// Last coupon date on or before settlement (yyyy-MM-dd), for manual terms
    #[arg(long)]
    pub last_coupon: Option<NaiveDate>,

    /// Annual coupon rate as a decimal (e.g. 0.0825), for manual terms
    #[arg(long)]
    pub coupon_rate: Option<Decimal>,
}

pub fn run_bond_price(args: BondPriceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut valuation_input = resolve_input(&args)?;
    if let Some(nominal) = args.nominal {
        valuation_input.face_value = nominal;
    }
    if let Some(ytm) = args.ytm {
        valuation_input.yield_to_maturity = ytm;
    }

    info!(
        settlement = %valuation_input.settlement_date,
        maturity = %valuation_input.maturity_date,
        ytm = %valuation_input.yield_to_maturity,
        "valuing bond"
    );
    let result = valuation::value_bond(&valuation_input)?;
    Ok(serde_json::to_value(result)?)
}

fn resolve_input(args: &BondPriceArgs) -> Result<BondValuationInput, Box<dyn std::error::Error>> {
    if let Some(example) = args.example {
        return Ok(example.valuation_input(dec!(100)));
    }
    if let Some(manual) = manual_terms(args) {
        return Ok(manual);
    }
    match input::load(args.input.as_deref())? {
        Some(parsed) => Ok(parsed),
        None => Err(
            "--input <file.json>, stdin, --example r186|r2032, or manual terms required for bond pricing"
                .into(),
        ),
    }
}

fn manual_terms(args: &BondPriceArgs) -> Option<BondValuationInput> {
    Some(BondValuationInput {
        settlement_date: args.settlement?,
        maturity_date: args.maturity?,
        last_coupon_date: args.last_coupon?,
        coupon_rate: args.coupon_rate?,
        yield_to_maturity: args.ytm?,
        face_value: args.nominal.unwrap_or(dec!(100)),
        day_count_basis: ACTUAL_365_BASIS,
        coupon_frequency: SEMIANNUAL,
    })
}
