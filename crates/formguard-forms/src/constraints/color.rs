use super::ConstraintEvaluator;
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::{ColorFormat, is_color};

/// Color notation selected by the `format` rule. A missing or unknown format
/// means hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConstraint;

impl ConstraintEvaluator for ColorConstraint {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool {
		let format = ColorFormat::from_name_or_default(rules.format.as_deref());
		value.as_scalar().is_some_and(|color| is_color(color, format))
	}
}
