//! # formguard
//!
//! Declarative field validation driven by compact rule strings.
//!
//! Each field of a form carries either a rule string such as
//! `type:string|required:true|max:50` or a fixed list of allowed values.
//! Validating the form returns the keys of every field that fails, in field
//! order.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - The validation engine: fields, rule parsing,
//!   constraint evaluators and form definitions
//! - `validators` (default) - The stateless predicates the engine is built on
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use formguard::prelude::*;
//!
//! let form = Form::with_fields([
//!     Field::new("Firm", "Google AG", "type:string|required:true|max:50"),
//!     Field::new("E-Mail", "info@some-mail.com", "type:email|required:true"),
//!     Field::new("Date", "2018-13-15", "type:date|required:true|format:Y-m-d"),
//!     Field::allow_list("Gender", "Anrede", ["", "Herr", "Frau"]),
//! ]);
//!
//! assert_eq!(form.validate(), vec!["Date", "Gender"]);
//! # }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "validators")]
pub mod validators;

#[cfg(feature = "forms")]
pub use formguard_forms::{
	ConfigurationError, ConstraintSpec, Field, FieldType, Form, FormDefinition, FormError,
	FormResult, Rules, ValidationResult, Value,
};

#[cfg(feature = "validators")]
pub use formguard_validators::ColorFormat;

/// Commonly used items
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use formguard_forms::prelude::*;

	#[cfg(feature = "validators")]
	pub use formguard_validators::prelude::*;
}
