use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::display_scalar;

/// Format output as tables: result fields first, then any nested schedules.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_result(result, map),
            _ => println!("{}", field_table(map)),
        },
        _ => println!("{}", value),
    }
}

fn print_result(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    println!("{}", field_table(result));

    for (key, val) in result {
        if let Value::Array(rows) = val {
            if let Some(table) = rows_table(rows) {
                println!("\n{}:", key);
                println!("{}", table);
            }
        }
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Two-column table of scalar and small nested fields; arrays are printed separately.
fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        match val {
            Value::Array(_) => {}
            Value::Object(inner) => {
                for (sub, v) in inner {
                    builder.push_record([format!("{key}.{sub}"), display_scalar(sub, v)]);
                }
            }
            _ => builder.push_record([key.clone(), display_scalar(key, val)]),
        }
    }
    builder.build()
}

fn rows_table(rows: &[Value]) -> Option<Table> {
    let Some(Value::Object(first)) = rows.first() else {
        return None;
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows.iter().filter_map(Value::as_object) {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h).map(|v| display_scalar(h, v)).unwrap_or_default())
            .collect();
        builder.push_record(cells);
    }
    Some(builder.build())
}
