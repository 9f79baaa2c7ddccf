use chrono::DateTime;
use plistenc::{MapValue, Value};

/// JSON-to-value conversion switches.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JsonOptions {
	/// Turn RFC 3339 strings into dates.
	pub detect_dates: bool,
}

/// Convert parsed JSON into an encoder value.
///
/// `null` becomes an unset reference, so encoding it fails.
pub(crate) fn json_to_value(json: &serde_json::Value, opt: JsonOptions) -> Value {
	match json {
		serde_json::Value::Null => Value::nil(),
		serde_json::Value::Bool(v) => Value::Bool(*v),
		serde_json::Value::Number(n) => {
			if let Some(v) = n.as_i64() {
				Value::I64(v)
			} else if let Some(v) = n.as_u64() {
				Value::U64(v)
			} else {
				match n.as_f64() {
					Some(v) => Value::F64(v),
					None => Value::String(n.to_string()),
				}
			}
		}
		serde_json::Value::String(text) if opt.detect_dates => match DateTime::parse_from_rfc3339(text) {
			Ok(ts) => Value::Date(ts),
			Err(_) => Value::String(text.clone()),
		},
		serde_json::Value::String(text) => Value::String(text.clone()),
		serde_json::Value::Array(items) => Value::Array(items.iter().map(|item| json_to_value(item, opt)).collect()),
		serde_json::Value::Object(object) => Value::Map(MapValue {
			entries: object.iter().map(|(key, item)| (key.clone(), json_to_value(item, opt))).collect(),
		}),
	}
}
