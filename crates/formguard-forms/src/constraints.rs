//! Type-specific constraint evaluators
//!
//! Every declared field type maps to one [`ConstraintEvaluator`]. Evaluators
//! are stateless: they look at a value and the parsed [`Rules`] and report
//! whether the value satisfies them.
//!
//! | Type | Evaluator | Rules consulted |
//! |---|---|---|
//! | `string` | [`StringConstraint`] | `regex`, `min`, `max` (character count) |
//! | `number` | [`NumberConstraint`] | `positive`, `negative`, `nonzero`, `min`, `max` |
//! | `email` | [`EmailConstraint`] | |
//! | `url` | [`UrlConstraint`] | |
//! | `color` | [`ColorConstraint`] | `format` |
//! | `date`, `datetime`, `time` | [`DateConstraint`] | `format` |
//! | `array` | [`ArrayConstraint`] | `min`, `max` (element count) |
//!
//! Unknown types have no evaluator and always fail.

pub mod array;
pub mod color;
pub mod date;
pub mod email;
pub mod number;
pub mod string;
pub mod url;

pub use array::ArrayConstraint;
pub use color::ColorConstraint;
pub use date::DateConstraint;
pub use email::EmailConstraint;
pub use number::NumberConstraint;
pub use string::StringConstraint;
pub use url::UrlConstraint;

use crate::rules::{FieldType, Rules};
use crate::value::Value;

/// Decides whether a value satisfies the rules of one field type.
pub trait ConstraintEvaluator: Send + Sync {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool;
}

/// Returns the evaluator for a field type, or `None` for unknown types.
pub fn evaluator_for(field_type: &FieldType) -> Option<&'static dyn ConstraintEvaluator> {
	match field_type {
		FieldType::String => Some(&StringConstraint),
		FieldType::Number => Some(&NumberConstraint),
		FieldType::Email => Some(&EmailConstraint),
		FieldType::Url => Some(&UrlConstraint),
		FieldType::Color => Some(&ColorConstraint),
		FieldType::Date => Some(&DateConstraint::DATE),
		FieldType::DateTime => Some(&DateConstraint::DATETIME),
		FieldType::Time => Some(&DateConstraint::TIME),
		FieldType::Array => Some(&ArrayConstraint),
		FieldType::Unknown(_) => None,
	}
}

/// Evaluates `value` against `rules` using the evaluator of the declared
/// type.
///
/// # Examples
///
/// ```
/// use formguard_forms::{Value, constraints::evaluate, rules::Rules};
///
/// let rules = Rules::parse("type:number|min:1|max:10");
/// assert!(evaluate(&Value::from("10"), &rules));
/// assert!(!evaluate(&Value::from("11"), &rules));
///
/// let unknown = Rules::parse("type:phone");
/// assert!(!evaluate(&Value::from("+41 44 000 00 00"), &unknown));
/// ```
pub fn evaluate(value: &Value, rules: &Rules) -> bool {
	evaluator_for(&rules.field_type).is_some_and(|evaluator| evaluator.evaluate(value, rules))
}

/// Checks a count or measure against the optional inclusive bounds.
pub(crate) fn within_bounds(measure: f64, rules: &Rules) -> bool {
	rules.max.is_none_or(|max| measure <= max) && rules.min.is_none_or(|min| measure >= min)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(5.0, "min:5|max:5", true)]
	#[case(4.9, "min:5", false)]
	#[case(5.1, "max:5", false)]
	#[case(1000.0, "", true)]
	fn test_within_bounds(#[case] measure: f64, #[case] rules: &str, #[case] expected: bool) {
		assert_eq!(within_bounds(measure, &Rules::parse(rules)), expected);
	}

	#[test]
	fn test_unknown_type_has_no_evaluator() {
		assert!(evaluator_for(&FieldType::Unknown("phone".to_string())).is_none());
	}

	#[test]
	fn test_every_known_type_has_an_evaluator() {
		for name in [
			"string", "number", "email", "url", "color", "date", "datetime", "time", "array",
		] {
			assert!(
				evaluator_for(&FieldType::from_name(name)).is_some(),
				"missing evaluator for {name}"
			);
		}
	}
}
