use super::ConstraintEvaluator;
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::is_url;

#[derive(Debug, Clone, Copy, Default)]
pub struct UrlConstraint;

impl ConstraintEvaluator for UrlConstraint {
	fn evaluate(&self, value: &Value, _rules: &Rules) -> bool {
		value.as_scalar().is_some_and(is_url)
	}
}
