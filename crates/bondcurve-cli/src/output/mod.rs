pub mod csv_out;
pub mod minimal;
pub mod table;
pub mod text;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Text => text::print_text(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Display precision for a result field: prices at 4 dp, nominals and curve rates at 2 dp.
pub fn display_places(field: &str) -> Option<u32> {
    match field {
        "clean_price" | "all_in_price" | "accrued_interest" | "pv_face_value" | "pv_coupons"
        | "coupon_amount" | "present_value" | "amount" => Some(4),
        "face_value" | "rate" | "bid" | "ask" => Some(2),
        _ => None,
    }
}

/// Render a scalar for humans, rounding decimal strings for known fields.
pub fn display_scalar(field: &str, value: &Value) -> String {
    match value {
        Value::String(s) => match (display_places(field), s.parse::<Decimal>()) {
            (Some(dp), Ok(d)) => format_decimal(d, dp),
            _ => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

pub fn format_decimal(d: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, d.round_dp(dp))
}

/// The `result` object of an envelope, or the value itself.
pub fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}
