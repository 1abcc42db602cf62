//! Ordered route-value maps.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use trellis_core::exception::{Error, Result};
use trellis_utils::value::value_text;

/// Route values keyed by name, in insertion order.
///
/// Keys are unique. [`RouteValues::insert`] overwrites while
/// [`RouteValues::insert_if_absent`] keeps the first value, which is what
/// action resolution uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteValues {
	values: IndexMap<String, Value>,
}

impl RouteValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds route values from the top-level fields of any serializable
	/// object. `null` (e.g. `()` or `None`) yields an empty map.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when `object` does not serialize to a
	/// JSON object, and [`Error::Serialization`] when it fails to serialize.
	///
	/// # Examples
	///
	/// ```
	/// use serde::Serialize;
	/// use trellis_urls::RouteValues;
	///
	/// #[derive(Serialize)]
	/// struct Filter {
	///     page: u32,
	///     sort: &'static str,
	/// }
	///
	/// let values = RouteValues::from_object(&Filter { page: 2, sort: "name" }).unwrap();
	/// assert_eq!(values.get_text("page").as_deref(), Some("2"));
	/// assert_eq!(values.keys().collect::<Vec<_>>(), ["page", "sort"]);
	/// ```
	pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Result<Self> {
		match serde_json::to_value(object)? {
			Value::Null => Ok(Self::new()),
			Value::Object(map) => Ok(map.into_iter().collect()),
			other => Err(Error::invalid_argument(
				"object",
				format!("route values must come from an object, got {}", kind(&other)),
			)),
		}
	}

	/// Adds a value built from anything serializable, overwriting.
	pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Result<Self> {
		self.insert(key, serde_json::to_value(value)?);
		Ok(self)
	}

	/// Inserts a value, returning the one it replaced.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.values.insert(key.into(), value)
	}

	/// Inserts a value unless the key is already present. Returns `true` when
	/// the value was inserted.
	pub fn insert_if_absent(&mut self, key: impl Into<String>, value: Value) -> bool {
		match self.values.entry(key.into()) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(value);
				true
			}
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// The value as URL text: strings verbatim, numbers and booleans
	/// formatted, `null` as `None`, arrays and objects as JSON.
	pub fn get_text(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).and_then(value_text)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Removes a key, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.values.shift_remove(key)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for RouteValues {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

impl IntoIterator for RouteValues {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_insert_if_absent_keeps_first() {
		let mut values = RouteValues::new();
		assert!(values.insert_if_absent("id", json!(1)));
		assert!(!values.insert_if_absent("id", json!(2)));
		assert_eq!(values.get("id"), Some(&json!(1)));
	}

	#[rstest]
	#[case(json!("x"), Some("x"))]
	#[case(json!(42), Some("42"))]
	#[case(json!(true), Some("true"))]
	#[case(json!(null), None)]
	#[case(json!([1, 2]), Some("[1,2]"))]
	fn test_get_text(#[case] value: Value, #[case] expected: Option<&str>) {
		let values: RouteValues = [("k", value)].into_iter().collect();
		assert_eq!(values.get_text("k").as_deref(), expected);
	}

	#[rstest]
	fn test_from_object_rejects_scalars() {
		let err = RouteValues::from_object(&5).unwrap_err();
		assert!(err.is_invalid_argument());
	}

	#[rstest]
	fn test_from_unit_is_empty() {
		assert!(RouteValues::from_object(&()).unwrap().is_empty());
	}

	#[rstest]
	fn test_remove_preserves_order() {
		let mut values = RouteValues::new()
			.with("a", 1)
			.unwrap()
			.with("b", 2)
			.unwrap()
			.with("c", 3)
			.unwrap();
		values.remove("b");
		assert_eq!(values.keys().collect::<Vec<_>>(), ["a", "c"]);
	}
}
