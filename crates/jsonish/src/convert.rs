//! Conversions between [`Value`] and `serde_json::Value`.

use serde_json::{Map, Number, Value as JsonValue};

use crate::Value;

/// Converts a [`Value`] tree to `serde_json::Value`.
///
/// Non-finite floats have no JSON representation and map to `Null`.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::Number((*n).into()),
        Value::Float(x) => Number::from_f64(*x).map_or(JsonValue::Null, JsonValue::Number),
        Value::Str(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Dict(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key.clone(), to_json(value));
            }
            JsonValue::Object(map)
        }
    }
}

/// Converts a `serde_json::Value` to a [`Value`] tree.
///
/// Integral numbers in `i32` range become `Int`; every other number becomes
/// `Float`. Object keys are already unique on the `serde_json` side.
pub fn from_json(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::Str(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(from_json).collect()),
        JsonValue::Object(map) => Value::Dict(
            map.iter()
                .map(|(key, value)| (key.clone(), from_json(value)))
                .collect(),
        ),
    }
}

/// Strict, valid-JSON rendering of a [`Value`], complementing the loose
/// [`crate::encode`].
pub fn to_json_string(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(&to_json(value))
}
