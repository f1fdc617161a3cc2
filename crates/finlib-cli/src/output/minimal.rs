use serde_json::Value;

/// Headline fields, in priority order, across the calculator outputs.
const PRIORITY_KEYS: [&str; 7] = [
    "future_value",
    "present_value",
    "net_present_value",
    "interest",
    "payment",
    "periods",
    "total_interest",
];

/// Print just the key answer value from the output.
///
/// A null headline means the formula returned inf/NaN; it prints as
/// `non-finite` rather than falling through to another field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if val.is_array() {
                    continue;
                }
                println!("{}", format_minimal(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "non-finite".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
