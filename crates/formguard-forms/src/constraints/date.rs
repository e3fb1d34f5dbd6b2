use super::ConstraintEvaluator;
use crate::rules::Rules;
use crate::value::Value;
use formguard_validators::{
	DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT, DEFAULT_TIME_FORMAT, is_date,
};

/// Date, datetime or time text under the `format` rule, falling back to the
/// pattern of the declared type.
#[derive(Debug, Clone, Copy)]
pub struct DateConstraint {
	default_format: &'static str,
}

impl DateConstraint {
	pub const DATE: DateConstraint = DateConstraint::new(DEFAULT_DATE_FORMAT);
	pub const DATETIME: DateConstraint = DateConstraint::new(DEFAULT_DATETIME_FORMAT);
	pub const TIME: DateConstraint = DateConstraint::new(DEFAULT_TIME_FORMAT);

	pub const fn new(default_format: &'static str) -> Self {
		Self { default_format }
	}

	pub fn default_format(&self) -> &'static str {
		self.default_format
	}
}

impl Default for DateConstraint {
	fn default() -> Self {
		Self::DATE
	}
}

impl ConstraintEvaluator for DateConstraint {
	fn evaluate(&self, value: &Value, rules: &Rules) -> bool {
		let pattern = rules.format.as_deref().unwrap_or(self.default_format);
		value.as_scalar().is_some_and(|text| is_date(text, pattern))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DateConstraint::DATE, "2018-12-11", "", true)]
	#[case(DateConstraint::DATE, "2018-13-15", "", false)]
	#[case(DateConstraint::DATE, "2018-12-11", "format:Y-m-d", true)]
	#[case(DateConstraint::DATE, "11.12.2018", "format:d.m.Y", true)]
	#[case(DateConstraint::DATE, "11.12.2018", "", false)]
	#[case(DateConstraint::DATETIME, "2018-12-11 08:15:00", "", true)]
	#[case(DateConstraint::DATETIME, "2018-12-11", "", false)]
	#[case(DateConstraint::TIME, "08:15:00", "", true)]
	#[case(DateConstraint::TIME, "08:15", "format:H:i", true)]
	#[case(DateConstraint::TIME, "25:00:00", "", false)]
	fn test_date_constraint(
		#[case] constraint: DateConstraint,
		#[case] text: &str,
		#[case] rules: &str,
		#[case] expected: bool,
	) {
		let rules = Rules::parse(rules);
		assert_eq!(constraint.evaluate(&Value::from(text), &rules), expected);
	}

	#[test]
	fn test_default_formats() {
		assert_eq!(DateConstraint::default().default_format(), "Y-m-d");
		assert_eq!(DateConstraint::DATETIME.default_format(), "Y-m-d H:i:s");
		assert_eq!(DateConstraint::TIME.default_format(), "H:i:s");
	}
}
