//! Form fields
//!
//! A [`Field`] pairs a value with the constraint it has to satisfy. Fields
//! carry no validation logic of their own; [`Form`](crate::Form) decides how
//! each constraint is applied.

use crate::value::Value;
use serde::Serialize;

/// The constraint attached to a field.
///
/// # Examples
///
/// ```
/// use formguard_forms::{ConstraintSpec, Value};
///
/// let rules = ConstraintSpec::from("type:number|max:10");
/// assert_eq!(rules.rule_string(), Some("type:number|max:10"));
///
/// let choices = ConstraintSpec::AllowList(vec![Value::from("Herr"), Value::from("Frau")]);
/// assert!(choices.rule_string().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstraintSpec {
	/// A rule string such as `type:string|required:true|max:50`
	Rules(String),
	/// The value must equal one of the listed values
	AllowList(Vec<Value>),
}

impl ConstraintSpec {
	pub fn rule_string(&self) -> Option<&str> {
		match self {
			ConstraintSpec::Rules(rules) => Some(rules),
			ConstraintSpec::AllowList(_) => None,
		}
	}

	pub fn allow_list(&self) -> Option<&[Value]> {
		match self {
			ConstraintSpec::Rules(_) => None,
			ConstraintSpec::AllowList(values) => Some(values),
		}
	}
}

impl From<&str> for ConstraintSpec {
	fn from(rules: &str) -> Self {
		ConstraintSpec::Rules(rules.to_string())
	}
}

impl From<String> for ConstraintSpec {
	fn from(rules: String) -> Self {
		ConstraintSpec::Rules(rules)
	}
}

impl From<Vec<Value>> for ConstraintSpec {
	fn from(values: Vec<Value>) -> Self {
		ConstraintSpec::AllowList(values)
	}
}

/// A named value and its constraint.
///
/// The key identifies the field inside a form and cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	key: String,
	value: Value,
	constraint: ConstraintSpec,
	name: String,
}

impl Field {
	/// Create a field governed by a rule string
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Field;
	///
	/// let field = Field::new("Firm", "Google AG", "type:string|required:true|max:50");
	/// assert_eq!(field.key(), "Firm");
	/// assert_eq!(field.value().as_scalar(), Some("Google AG"));
	/// assert_eq!(field.name(), "");
	/// ```
	pub fn new(key: impl Into<String>, value: impl Into<Value>, rules: impl Into<String>) -> Self {
		Self::with_constraint(key, value, ConstraintSpec::Rules(rules.into()))
	}

	/// Create a field whose value must be one of `allowed`
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Field;
	///
	/// let field = Field::allow_list("Gender", "Frau", ["", "Herr", "Frau"]);
	/// assert_eq!(field.constraint().allow_list().map(|v| v.len()), Some(3));
	/// ```
	pub fn allow_list<I, T>(key: impl Into<String>, value: impl Into<Value>, allowed: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Value>,
	{
		let allowed = allowed.into_iter().map(Into::into).collect();
		Self::with_constraint(key, value, ConstraintSpec::AllowList(allowed))
	}

	pub fn with_constraint(
		key: impl Into<String>,
		value: impl Into<Value>,
		constraint: ConstraintSpec,
	) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
			constraint,
			name: String::new(),
		}
	}

	/// Set the display name
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Field;
	///
	/// let field = Field::new("E-Mail", "info@some-mail.com", "type:email").with_name("Email address");
	/// assert_eq!(field.name(), "Email address");
	/// ```
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &Value {
		&self.value
	}

	pub fn constraint(&self) -> &ConstraintSpec {
		&self.constraint
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn set_value(&mut self, value: impl Into<Value>) {
		self.value = value.into();
	}

	pub fn set_constraint(&mut self, constraint: impl Into<ConstraintSpec>) {
		self.constraint = constraint.into();
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_new() {
		let field = Field::new("Date", "2018-12-11", "type:date|format:Y-m-d");

		assert_eq!(field.key(), "Date");
		assert_eq!(field.value(), &Value::from("2018-12-11"));
		assert_eq!(
			field.constraint(),
			&ConstraintSpec::Rules("type:date|format:Y-m-d".to_string())
		);
		assert_eq!(field.name(), "");
	}

	#[test]
	fn test_field_allow_list() {
		let field = Field::allow_list("Gender", "Anrede", ["", "Herr", "Frau"]);

		assert_eq!(
			field.constraint().allow_list(),
			Some(&[Value::from(""), Value::from("Herr"), Value::from("Frau")][..])
		);
	}

	#[test]
	fn test_field_setters() {
		let mut field = Field::new("Firm", "", "type:string");

		field.set_value("Google AG");
		field.set_constraint("type:string|required:true");
		field.set_name("Company");

		assert_eq!(field.value().as_scalar(), Some("Google AG"));
		assert_eq!(
			field.constraint().rule_string(),
			Some("type:string|required:true")
		);
		assert_eq!(field.name(), "Company");
		assert_eq!(field.key(), "Firm");
	}

	#[test]
	fn test_constraint_serializes_untagged() {
		let rules = serde_json::to_value(ConstraintSpec::from("type:url")).unwrap();
		assert_eq!(rules, serde_json::json!("type:url"));

		let list = serde_json::to_value(ConstraintSpec::from(vec![Value::from("a")])).unwrap();
		assert_eq!(list, serde_json::json!(["a"]));
	}
}
