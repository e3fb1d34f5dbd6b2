use super::{ConstraintEvaluator, within_bounds};
use crate::rules::Rules;
use crate::value::Value;

/// A sequence value whose element count respects `min`/`max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayConstraint;

impl ConstraintEvaluator for ArrayConstraint {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool {
		value
			.as_sequence()
			.is_some_and(|items| within_bounds(items.len() as f64, rules))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::from(vec![Value::from("a"), Value::from(123)]), "min:1|max:1", false)]
	#[case(Value::from(vec![Value::from("a"), Value::from(123)]), "min:1|max:2", true)]
	#[case(Value::from(vec!["a"]), "min:1|max:1", true)]
	#[case(Value::Sequence(vec![]), "", true)]
	#[case(Value::Sequence(vec![]), "min:1", false)]
	#[case(Value::from("a"), "", false)]
	fn test_array_constraint(#[case] value: Value, #[case] rules: &str, #[case] expected: bool) {
		let rules = Rules::parse(rules);
		assert_eq!(ArrayConstraint.evaluate(&value, &rules), expected);
	}
}
