//! Facade re-export tests

use formguard::prelude::*;
use rstest::rstest;

#[rstest]
#[case("2018-12-11", true)]
#[case("2018-13-15", false)]
fn test_prelude_reaches_both_crates(#[case] date: &str, #[case] valid: bool) {
	// Arrange
	let form = Form::with_fields([Field::new("Date", date, "type:date|required:true")]);

	// Act
	let engine_result = form.is_valid();
	let predicate_result = is_date(date, "Y-m-d");

	// Assert
	assert_eq!(engine_result, valid);
	assert_eq!(predicate_result, valid);
}

#[test]
fn test_module_paths() {
	let rules = formguard::forms::Rules::parse("type:color|format:rgb");
	assert_eq!(rules.field_type, formguard::FieldType::Color);
	assert!(formguard::validators::is_color(
		"rgb(0,255,0)",
		formguard::ColorFormat::Rgb
	));
}
