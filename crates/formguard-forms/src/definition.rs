//! Form definitions
//!
//! A form can be described as data and loaded from TOML or JSON. Each entry of
//! `fields` becomes one [`Field`]:
//!
//! ```toml
//! [[fields]]
//! key = "Firm"
//! value = "Google AG"
//! rules = "type:string|required:true|max:50"
//!
//! [[fields]]
//! key = "Gender"
//! value = "Frau"
//! rules = ["", "Herr", "Frau"]
//! ```
//!
//! `rules` is either a rule string or an array of allowed values. `value`
//! and `name` default to the empty string. Numbers and booleans in `value`
//! are taken as their text, arrays become sequences, and `null` is the empty
//! string.

use crate::field::{ConstraintSpec, Field};
use crate::form::{Form, FormError, FormResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
	#[error("Field {key}: rules must be a rule string or an array of values, found {found}")]
	InvalidRules { key: String, found: String },
	#[error("Field {key}: unsupported value {found}")]
	InvalidValue { key: String, found: String },
	#[error("Invalid TOML form definition: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("Invalid JSON form definition: {0}")]
	Json(#[from] serde_json::Error),
}

fn empty_value() -> serde_json::Value {
	serde_json::Value::String(String::new())
}

/// One field entry of a [`FormDefinition`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	pub key: String,
	#[serde(default = "empty_value")]
	pub value: serde_json::Value,
	pub rules: serde_json::Value,
	#[serde(default)]
	pub name: String,
}

impl FieldDescriptor {
	/// Convert into a [`Field`], checking that `value` and `rules` have a
	/// field counterpart.
	pub fn into_field(self) -> Result<Field, ConfigurationError> {
		let FieldDescriptor {
			key,
			value,
			rules,
			name,
		} = self;

		let value = value_from_json(value).map_err(|found| ConfigurationError::InvalidValue {
			key: key.clone(),
			found,
		})?;

		let constraint = match rules {
			serde_json::Value::String(rule_string) => ConstraintSpec::Rules(rule_string),
			serde_json::Value::Array(items) => ConstraintSpec::AllowList(
				items
					.into_iter()
					.map(value_from_json)
					.collect::<Result<_, _>>()
					.map_err(|found| ConfigurationError::InvalidRules {
						key: key.clone(),
						found,
					})?,
			),
			other => {
				return Err(ConfigurationError::InvalidRules {
					key,
					found: other.to_string(),
				});
			}
		};

		Ok(Field::with_constraint(key, value, constraint).with_name(name))
	}
}

fn value_from_json(json: serde_json::Value) -> Result<Value, String> {
	let found = json.to_string();
	Value::from_json(json).ok_or(found)
}

/// A list of field descriptors, deserialized from TOML or JSON
///
/// # Examples
///
/// ```
/// use formguard_forms::FormDefinition;
///
/// let definition = FormDefinition::from_json_str(
///     r#"{"fields": [
///         {"key": "SomeNumber", "value": 96831, "rules": "type:number|required:true"},
///         {"key": "Gender", "value": "Frau", "rules": ["", "Herr", "Frau"]}
///     ]}"#,
/// )
/// .unwrap();
///
/// let form = definition.into_form().unwrap();
/// assert_eq!(form.len(), 2);
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
	#[serde(default)]
	pub fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
		let definition: Self = toml::from_str(source)?;
		tracing::debug!(fields = definition.fields.len(), "loaded TOML form definition");
		Ok(definition)
	}

	pub fn from_json_str(source: &str) -> Result<Self, ConfigurationError> {
		let definition: Self = serde_json::from_str(source)?;
		tracing::debug!(fields = definition.fields.len(), "loaded JSON form definition");
		Ok(definition)
	}

	/// Build a form, dropping fields whose key was already seen.
	pub fn into_form(self) -> FormResult<Form> {
		let fields = self
			.fields
			.into_iter()
			.map(FieldDescriptor::into_field)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Form::with_fields(fields))
	}

	/// Build a form, failing on the first duplicate key.
	///
	/// # Errors
	///
	/// Returns [`FormError::DuplicateKey`] when two descriptors share a key
	/// and [`FormError::Configuration`] when a descriptor is malformed.
	pub fn into_form_strict(self) -> FormResult<Form> {
		let mut form = Form::new();
		for descriptor in self.fields {
			let field = descriptor.into_field()?;
			let key = field.key().to_string();
			if !form.add_field(field) {
				return Err(FormError::DuplicateKey(key));
			}
		}
		Ok(form)
	}
}

impl Form {
	/// Load a form from a TOML definition
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Form;
	///
	/// let form = Form::from_toml_str(
	///     r#"
	///     [[fields]]
	///     key = "Date"
	///     value = "2018-13-15"
	///     rules = "type:date|required:true|format:Y-m-d"
	///     "#,
	/// )
	/// .unwrap();
	/// assert_eq!(form.validate(), vec!["Date"]);
	/// ```
	pub fn from_toml_str(source: &str) -> FormResult<Self> {
		FormDefinition::from_toml_str(source)?.into_form()
	}

	pub fn from_json_str(source: &str) -> FormResult<Self> {
		FormDefinition::from_json_str(source)?.into_form()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn descriptor(value: serde_json::Value, rules: serde_json::Value) -> FieldDescriptor {
		FieldDescriptor {
			key: "f".to_string(),
			value,
			rules,
			name: String::new(),
		}
	}

	#[test]
	fn test_toml_definition() {
		// Arrange
		let source = r#"
			[[fields]]
			key = "Firm"
			value = "Google AG"
			rules = "type:string|required:true|max:50"
			name = "Company"

			[[fields]]
			key = "Gender"
			value = "Anrede"
			rules = ["", "Herr", "Frau"]

			[[fields]]
			key = "Website"
			rules = "type:url"
		"#;

		// Act
		let form = Form::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(form.keys().collect::<Vec<_>>(), vec!["Firm", "Gender", "Website"]);
		assert_eq!(form.get_field("Firm").unwrap().name(), "Company");
		assert_eq!(form.get_field("Website").unwrap().value(), &Value::from(""));
		assert_eq!(form.validate(), vec!["Gender"]);
	}

	#[test]
	fn test_json_definition_with_array_value() {
		let source = r#"{"fields": [{"key": "tags", "value": ["a", 123], "rules": "type:array|min:1|max:1"}]}"#;

		let form = Form::from_json_str(source).unwrap();

		assert_eq!(
			form.get_field("tags").unwrap().value(),
			&Value::from(vec![Value::from("a"), Value::from("123")])
		);
		assert_eq!(form.validate(), vec!["tags"]);
	}

	#[test]
	fn test_empty_definition() {
		let form = Form::from_toml_str("").unwrap();
		assert!(form.is_empty());
	}

	#[rstest]
	#[case(json!(5))]
	#[case(json!(true))]
	#[case(json!(null))]
	#[case(json!({"type": "string"}))]
	#[case(json!(["ok", {"nested": 1}]))]
	fn test_invalid_rules(#[case] rules: serde_json::Value) {
		let result = descriptor(json!(""), rules).into_field();
		assert!(matches!(result, Err(ConfigurationError::InvalidRules { key, .. }) if key == "f"));
	}

	#[rstest]
	#[case(json!({"a": 1}))]
	#[case(json!([1, {"a": 1}]))]
	fn test_invalid_value(#[case] value: serde_json::Value) {
		let result = descriptor(value, json!("type:string")).into_field();
		assert!(matches!(result, Err(ConfigurationError::InvalidValue { .. })));
	}

	#[test]
	fn test_toml_datetime_value_is_rejected() {
		let source = r#"
			[[fields]]
			key = "Date"
			value = 2018-12-11
			rules = "type:date"
		"#;

		let result = Form::from_toml_str(source);

		assert!(matches!(
			result,
			Err(FormError::Configuration(ConfigurationError::InvalidValue { .. }))
		));
	}

	#[test]
	fn test_malformed_sources() {
		assert!(matches!(
			Form::from_toml_str("[[fields]]\nkey = "),
			Err(FormError::Configuration(ConfigurationError::Toml(_)))
		));
		assert!(matches!(
			Form::from_json_str("{\"fields\": [{\"value\": \"x\"}]}"),
			Err(FormError::Configuration(ConfigurationError::Json(_)))
		));
	}

	#[test]
	fn test_into_form_drops_duplicates() {
		let definition = FormDefinition {
			fields: vec![
				descriptor(json!("1"), json!("type:number")),
				descriptor(json!("x"), json!("type:number")),
			],
		};

		let form = definition.into_form().unwrap();

		assert_eq!(form.len(), 1);
		assert!(form.is_valid());
	}

	#[test]
	fn test_into_form_strict_rejects_duplicates() {
		let definition = FormDefinition {
			fields: vec![
				descriptor(json!("1"), json!("type:number")),
				descriptor(json!("x"), json!("type:number")),
			],
		};

		let result = definition.into_form_strict();

		assert!(matches!(result, Err(FormError::DuplicateKey(key)) if key == "f"));
	}
}
