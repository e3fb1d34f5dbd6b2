//! Field values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value: either a single scalar string or an ordered sequence of
/// values.
///
/// # Examples
///
/// ```
/// use formguard_forms::Value;
///
/// let scalar = Value::from("Google AG");
/// assert_eq!(scalar.as_scalar(), Some("Google AG"));
///
/// let list = Value::from(vec![Value::from("a"), Value::from(123)]);
/// assert_eq!(list.as_sequence().map(|items| items.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Scalar(String),
	Sequence(Vec<Value>),
}

impl Value {
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			Value::Scalar(s) => Some(s),
			Value::Sequence(_) => None,
		}
	}

	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Value::Scalar(_) => None,
			Value::Sequence(items) => Some(items),
		}
	}

	pub fn is_sequence(&self) -> bool {
		matches!(self, Value::Sequence(_))
	}

	/// Returns `true` for the empty string and for a sequence without
	/// elements.
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Value;
	///
	/// assert!(Value::from("").is_empty());
	/// assert!(Value::Sequence(vec![]).is_empty());
	/// assert!(!Value::from(" ").is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		match self {
			Value::Scalar(s) => s.is_empty(),
			Value::Sequence(items) => items.is_empty(),
		}
	}

	/// Converts a JSON value.
	///
	/// Numbers and booleans become their textual form and `null` becomes the
	/// empty string. Objects have no field-value counterpart and yield `None`.
	pub fn from_json(json: serde_json::Value) -> Option<Self> {
		match json {
			serde_json::Value::Null => Some(Value::Scalar(String::new())),
			serde_json::Value::Bool(b) => Some(Value::Scalar(b.to_string())),
			serde_json::Value::Number(n) => Some(Value::Scalar(n.to_string())),
			serde_json::Value::String(s) => Some(Value::Scalar(s)),
			serde_json::Value::Array(items) => items
				.into_iter()
				.map(Value::from_json)
				.collect::<Option<Vec<_>>>()
				.map(Value::Sequence),
			serde_json::Value::Object(_) => None,
		}
	}
}

/// Returns `true` unless `value` is a sequence with at least one element.
///
/// A scalar is never a non-empty array, so it counts as empty here.
///
/// # Examples
///
/// ```
/// use formguard_forms::{Value, is_array_empty};
///
/// assert!(is_array_empty(&Value::Sequence(vec![])));
/// assert!(is_array_empty(&Value::from("a")));
/// assert!(!is_array_empty(&Value::from(vec!["a"])));
/// ```
pub fn is_array_empty(value: &Value) -> bool {
	value.as_sequence().is_none_or(<[Value]>::is_empty)
}

impl Default for Value {
	fn default() -> Self {
		Value::Scalar(String::new())
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Scalar(s) => f.write_str(s),
			Value::Sequence(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Scalar(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Scalar(s)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(n: $ty) -> Self {
					Value::Scalar(n.to_string())
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), Value::from(""))]
	#[case(json!("x"), Value::from("x"))]
	#[case(json!(123), Value::from("123"))]
	#[case(json!(1.5), Value::from("1.5"))]
	#[case(json!(true), Value::from("true"))]
	#[case(json!(["a", 123]), Value::from(vec![Value::from("a"), Value::from(123)]))]
	#[case(json!([]), Value::Sequence(vec![]))]
	fn test_from_json(#[case] json: serde_json::Value, #[case] expected: Value) {
		assert_eq!(Value::from_json(json), Some(expected));
	}

	#[test]
	fn test_from_json_rejects_objects() {
		assert_eq!(Value::from_json(json!({"a": 1})), None);
		assert_eq!(Value::from_json(json!(["ok", {"a": 1}])), None);
	}

	#[rstest]
	#[case(Value::Sequence(vec![]), true)]
	#[case(Value::from(""), true)]
	#[case(Value::from("abc"), true)]
	#[case(Value::from(vec![Value::from("")]), false)]
	fn test_is_array_empty(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_array_empty(&value), expected);
	}

	#[test]
	fn test_display() {
		let value = Value::from(vec![Value::from("a"), Value::from(vec!["b", "c"])]);
		assert_eq!(value.to_string(), "[a, [b, c]]");
	}

	#[test]
	fn test_serde_untagged() {
		let value = Value::from(vec!["Herr", "Frau"]);
		let json = serde_json::to_value(&value).unwrap();
		assert_eq!(json, json!(["Herr", "Frau"]));

		let back: Value = serde_json::from_value(json).unwrap();
		assert_eq!(back, value);
	}

	#[test]
	fn test_default_is_empty_scalar() {
		assert_eq!(Value::default(), Value::from(""));
		assert!(Value::default().is_empty());
	}
}
