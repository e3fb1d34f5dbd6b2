use super::{ConstraintEvaluator, within_bounds};
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::{is_string_not_empty, regex};

/// Non-blank text, optionally matching a delimited `regex` and bounded in
/// character count by `min`/`max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConstraint;

impl ConstraintEvaluator for StringConstraint {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool {
		let Some(text) = value.as_scalar() else {
			return false;
		};
		if !is_string_not_empty(text) {
			return false;
		}
		if let Some(pattern) = &rules.regex {
			if !regex(pattern, text) {
				return false;
			}
		}
		within_bounds(text.chars().count() as f64, rules)
	}
}
