use serde_json::Value;
use std::io;

use super::result_of;

/// Write the result as two-column CSV to stdout, flattening nested fields
/// into dotted paths (`coupon_schedule.0.date`). Values keep full precision.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    for (field, val) in flatten("", result_of(value)) {
        let _ = wtr.write_record([field, val]);
    }

    let _ = wtr.flush();
}

fn flatten(prefix: &str, value: &Value) -> Vec<(String, String)> {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) => map
            .iter()
            .flat_map(|(k, v)| flatten(&join(k.as_str()), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(i, v)| flatten(&join(i.to_string().as_str()), v))
            .collect(),
        Value::String(s) => vec![(prefix.to_string(), s.clone())],
        Value::Null => vec![(prefix.to_string(), String::new())],
        other => vec![(prefix.to_string(), other.to_string())],
    }
}
