use serde_json::Value;

use super::{display_scalar, result_of};

/// Print the result as plain sentences.
pub fn print_text(value: &Value) {
    for line in text_lines(value) {
        println!("{}", line);
    }
}

fn text_lines(value: &Value) -> Vec<String> {
    let result = result_of(value);
    let field = |key: &str| result.get(key).map(|v| display_scalar(key, v));

    if let (Some(nominal), Some(clean), Some(accrued), Some(all_in)) = (
        field("face_value"),
        field("clean_price"),
        field("accrued_interest"),
        field("all_in_price"),
    ) {
        return vec![
            format!("The Clean Price of the bond with a nominal of R{nominal} is equal to R{clean}"),
            format!(
                "The Accrued Interest of the bond with a nominal of R{nominal} is equal to R{accrued}"
            ),
            format!(
                "The All-in-Price of the bond with a nominal of R{nominal} is equal to R{all_in}"
            ),
        ];
    }

    if let (Some(date), Some(rate)) = (field("date"), field("rate")) {
        return vec![format!("Rate on {date}: {rate}%")];
    }

    vec![serde_json::to_string_pretty(result).unwrap_or_default()]
}
