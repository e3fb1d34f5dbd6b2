use super::{ConstraintEvaluator, within_bounds};
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::parse_number;

/// Numeric text with optional sign and inclusive range rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberConstraint;

impl ConstraintEvaluator for NumberConstraint {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool {
		let Some(number) = value.as_scalar().and_then(parse_number) else {
			return false;
		};
		if rules.positive && number < 0.0 {
			return false;
		}
		if rules.negative && number > 0.0 {
			return false;
		}
		if rules.nonzero && number == 0.0 {
			return false;
		}
		within_bounds(number, rules)
	}
}
