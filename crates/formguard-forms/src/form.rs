use crate::ValidationResult;
use crate::constraints;
use crate::definition::ConfigurationError;
use crate::field::{ConstraintSpec, Field};
use crate::rules::Rules;
use crate::value::Value;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Configuration error: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Duplicate field key: {0}")]
	DuplicateKey(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Serializable view of a field, as returned by [`Form::get_fields`].
///
/// `rules` is the raw rule string or the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
	pub key: String,
	pub value: Value,
	pub rules: ConstraintSpec,
	pub name: String,
}

impl From<&Field> for FieldSnapshot {
	fn from(field: &Field) -> Self {
		Self {
			key: field.key().to_string(),
			value: field.value().clone(),
			rules: field.constraint().clone(),
			name: field.name().to_string(),
		}
	}
}

/// An ordered collection of uniquely keyed fields
///
/// Fields keep their insertion order, and that order is the order of the keys
/// reported by [`Form::validate`]. A field whose key is already present is
/// rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
	fields: Vec<Field>,
	index: HashMap<String, usize>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(form.is_empty());
	/// assert!(form.validate().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a form from `fields`, dropping every field whose key was
	/// already seen
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::{Field, Form};
	///
	/// let form = Form::with_fields([
	///     Field::new("Firm", "Google AG", "type:string"),
	///     Field::new("Firm", "Apple", "type:string"),
	/// ]);
	/// assert_eq!(form.len(), 1);
	/// assert_eq!(form.get_field("Firm").unwrap().value().as_scalar(), Some("Google AG"));
	/// ```
	pub fn with_fields<I>(fields: I) -> Self
	where
		I: IntoIterator<Item = Field>,
	{
		let mut form = Self::new();
		form.add_fields(fields);
		form
	}

	/// Add a field, returning `false` if its key is already taken
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::{Field, Form};
	///
	/// let mut form = Form::new();
	/// assert!(form.add_field(Field::new("Website", "https://www.google.ch/", "type:url")));
	/// assert!(!form.add_field(Field::new("Website", "", "type:url")));
	/// ```
	pub fn add_field(&mut self, field: Field) -> bool {
		if self.index.contains_key(field.key()) {
			tracing::debug!(key = field.key(), "rejected field with duplicate key");
			return false;
		}
		self.index.insert(field.key().to_string(), self.fields.len());
		self.fields.push(field);
		true
	}

	/// Add several fields, returning `true` only if every one was admitted.
	///
	/// Rejected duplicates do not stop the remaining fields from being
	/// added.
	pub fn add_fields<I>(&mut self, fields: I) -> bool
	where
		I: IntoIterator<Item = Field>,
	{
		fields
			.into_iter()
			.fold(true, |all_added, field| self.add_field(field) && all_added)
	}

	pub fn get_field(&self, key: &str) -> Option<&Field> {
		self.index.get(key).map(|&i| &self.fields[i])
	}

	pub fn get_field_mut(&mut self, key: &str) -> Option<&mut Field> {
		self.index.get(key).map(|&i| &mut self.fields[i])
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Field keys in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(Field::key)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Snapshot every field in insertion order.
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::{Field, Form};
	///
	/// let form = Form::with_fields([Field::allow_list("Gender", "Frau", ["", "Herr", "Frau"])]);
	/// let json = serde_json::to_value(form.get_fields()).unwrap();
	/// assert_eq!(
	///     json,
	///     serde_json::json!([
	///         {"key": "Gender", "value": "Frau", "rules": ["", "Herr", "Frau"], "name": ""}
	///     ])
	/// );
	/// ```
	pub fn get_fields(&self) -> Vec<FieldSnapshot> {
		self.fields.iter().map(FieldSnapshot::from).collect()
	}

	/// Validate every field and return the keys of those that fail
	///
	/// All fields are checked; the result follows insertion order and is
	/// empty when the whole form is valid.
	///
	/// # Examples
	///
	/// ```
	/// use formguard_forms::{Field, Form};
	///
	/// let form = Form::with_fields([
	///     Field::new("Date", "2018-13-15", "type:date|required:true|format:Y-m-d"),
	///     Field::new("Firm", "Google AG", "type:string|required:true|max:50"),
	///     Field::allow_list("Gender", "Anrede", ["", "Herr", "Frau"]),
	/// ]);
	/// assert_eq!(form.validate(), vec!["Date", "Gender"]);
	/// ```
	pub fn validate(&self) -> ValidationResult {
		self.fields
			.iter()
			.filter(|field| !field_passes(field))
			.map(|field| field.key().to_string())
			.collect()
	}

	pub fn is_valid(&self) -> bool {
		self.fields.iter().all(field_passes)
	}
}

fn field_passes(field: &Field) -> bool {
	match field.constraint() {
		ConstraintSpec::AllowList(allowed) => {
			let passed = allowed.contains(field.value());
			if !passed {
				tracing::debug!(key = field.key(), "value is not in the allow-list");
			}
			passed
		}
		ConstraintSpec::Rules(rule_string) => {
			let rules = Rules::parse(rule_string);
			if !rules.required && !rules.field_type.is_present(field.value()) {
				tracing::trace!(key = field.key(), "skipping optional field without a value");
				return true;
			}
			let passed = constraints::evaluate(field.value(), &rules);
			if !passed {
				tracing::debug!(
					key = field.key(),
					field_type = %rules.field_type,
					"field failed validation"
				);
			}
			passed
		}
	}
}

impl FromIterator<Field> for Form {
	fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
		Self::with_fields(iter)
	}
}

impl Extend<Field> for Form {
	fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
		self.add_fields(iter);
	}
}

impl<'a> IntoIterator for &'a Form {
	type Item = &'a Field;
	type IntoIter = std::slice::Iter<'a, Field>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}
