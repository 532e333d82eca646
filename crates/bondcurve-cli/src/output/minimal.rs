use serde_json::Value;

use super::{display_scalar, result_of};

/// Headline fields, in priority order.
const PRIORITY_KEYS: [&str; 3] = ["clean_price", "rate", "all_in_price"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = result_of(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return display_scalar(key, val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, display_scalar(key, val));
        }
    }

    display_scalar("", result_obj)
}
