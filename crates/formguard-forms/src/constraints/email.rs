use super::ConstraintEvaluator;
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::is_email;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailConstraint;

impl ConstraintEvaluator for EmailConstraint {
	fn evaluate(&self, value: &Value, _rules: &Rules) -> bool {
		value.as_scalar().is_some_and(is_email)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_email_constraint() {
		let rules = Rules::default();
		assert!(EmailConstraint.evaluate(&Value::from("info@some-mail.com"), &rules));
		assert!(!EmailConstraint.evaluate(&Value::from("info(at)some-mail.com"), &rules));
		assert!(!EmailConstraint.evaluate(&Value::from(""), &rules));
		assert!(!EmailConstraint.evaluate(&Value::from(vec!["a@b.ch"]), &rules));
	}
}
