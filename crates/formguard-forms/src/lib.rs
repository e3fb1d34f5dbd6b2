//! Rule-string form validation for formguard
//!
//! This crate provides the validation engine:
//! - Field values as scalars or sequences
//! - Fields governed by a rule string or by an allow-list
//! - A rule-string parser producing typed rules
//! - One constraint evaluator per declared type
//! - The `Form` engine, which reports the keys of failing fields
//! - Form definitions loaded from TOML or JSON
//!
//! ## Example
//!
//! ```
//! use formguard_forms::{Field, Form};
//!
//! let form = Form::with_fields([
//!     Field::new("SomeNumber", "968#31", r"type:string|regex:/(\d{5})/"),
//!     Field::new("Firm", "Google AG", "type:string|required:true|max:50"),
//!     Field::new("Color", "hsl(170,50%,45%)", "type:color|required:true|format:hsl"),
//!     Field::allow_list("Gender", "Herr", ["", "Herr", "Frau"]),
//! ]);
//!
//! assert_eq!(form.validate(), vec!["SomeNumber"]);
//! ```

pub mod constraints;
pub mod definition;
pub mod field;
pub mod form;
pub mod rules;
pub mod value;

pub use constraints::ConstraintEvaluator;
pub use definition::{ConfigurationError, FieldDescriptor, FormDefinition};
pub use field::{ConstraintSpec, Field};
pub use form::{FieldSnapshot, Form, FormError, FormResult};
pub use rules::{FieldType, RuleMap, Rules, parse_rules};
pub use value::{Value, is_array_empty};

/// Failing field keys, in field order.
pub type ValidationResult = Vec<String>;

pub mod prelude {
	pub use super::{
		ConstraintSpec, Field, FieldType, Form, FormDefinition, FormError, FormResult, Rules,
		ValidationResult, Value,
	};
}
