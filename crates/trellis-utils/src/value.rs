//! Text forms of JSON values.

use serde_json::Value;
use std::borrow::Cow;

/// Formats a value as plain text: strings verbatim, numbers and booleans
/// formatted, arrays and objects as JSON. `null` has no text.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis_utils::value::value_text;
///
/// assert_eq!(value_text(&json!("a b")).as_deref(), Some("a b"));
/// assert_eq!(value_text(&json!(null)), None);
/// ```
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(Cow::Borrowed(s.as_str())),
		Value::Bool(b) => Some(Cow::Owned(b.to_string())),
		Value::Number(n) => Some(Cow::Owned(n.to_string())),
		other => Some(Cow::Owned(other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), None)]
	#[case(json!("x&y"), Some("x&y"))]
	#[case(json!(true), Some("true"))]
	#[case(json!(2.5), Some("2.5"))]
	#[case(json!([1, 2]), Some("[1,2]"))]
	#[case(json!({ "a": 1 }), Some(r#"{"a":1}"#))]
	fn test_value_text(#[case] value: Value, #[case] expected: Option<&str>) {
		assert_eq!(value_text(&value).as_deref(), expected);
	}

	#[rstest]
	fn test_string_borrowed() {
		let value = json!("plain");
		assert!(matches!(value_text(&value), Some(Cow::Borrowed("plain"))));
	}
}
