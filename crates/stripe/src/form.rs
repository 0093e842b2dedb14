//! Flattening of JSON payloads into Stripe's form encoding.
//!
//! Stripe speaks `application/x-www-form-urlencoded` with bracket
//! notation for structure: nested maps become `metadata[order_id]=42`
//! and arrays become indexed keys like `payment_method_types[0]=card`.

use serde_json::{Map, Value};

/// Flatten a JSON object into form pairs, bracket-notated.
///
/// `null` values produce no pair at all; an absent field and a null
/// field are indistinguishable on the wire.
#[must_use]
pub fn to_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_value(pairs, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (nested_key, nested_value) in map {
                push_value(pairs, format!("{key}[{nested_key}]"), nested_value);
            }
        }
    }
}
