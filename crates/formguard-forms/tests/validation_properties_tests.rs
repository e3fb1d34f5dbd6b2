//! Property tests for the validation engine

use formguard_forms::prelude::*;
use proptest::prelude::*;

const TYPES: [&str; 8] = [
	"string", "number", "email", "url", "color", "date", "datetime", "time",
];

proptest! {
	#[test]
	fn prop_validate_is_deterministic(
		values in prop::collection::vec("\\PC{0,12}", 1..6),
		type_index in 0usize..TYPES.len(),
	) {
		let form: Form = values
			.iter()
			.enumerate()
			.map(|(i, value)| Field::new(format!("f{i}"), value.as_str(), format!("type:{}", TYPES[type_index])))
			.collect();

		prop_assert_eq!(form.validate(), form.validate());
	}

	#[test]
	fn prop_optional_empty_field_never_reported(
		type_index in 0usize..TYPES.len(),
		extra in "(\\|max:[0-9]{1,3})?(\\|min:[0-9]{1,3})?",
	) {
		let rules = format!("type:{}|required:false{extra}", TYPES[type_index]);
		let form = Form::with_fields([Field::new("f", "", rules)]);

		prop_assert!(form.validate().is_empty());
	}

	#[test]
	fn prop_required_empty_field_always_reported(type_index in 0usize..TYPES.len()) {
		let rules = format!("type:{}|required:true", TYPES[type_index]);
		let form = Form::with_fields([Field::new("f", "", rules)]);

		prop_assert_eq!(form.validate(), vec!["f".to_string()]);
	}

	#[test]
	fn prop_number_bounds_are_inclusive(min in -1000i32..1000, span in 0i32..1000) {
		let max = min + span;
		let rules = format!("type:number|min:{min}|max:{max}");
		let form = Form::with_fields([
			Field::new("low", min, rules.as_str()),
			Field::new("high", max, rules.as_str()),
			Field::new("below", min - 1, rules.as_str()),
			Field::new("above", max + 1, rules.as_str()),
		]);

		prop_assert_eq!(form.validate(), vec!["below".to_string(), "above".to_string()]);
	}

	#[test]
	fn prop_string_length_bounds_are_inclusive(len in 1usize..40) {
		let rules = format!("type:string|min:{len}|max:{len}");
		let form = Form::with_fields([
			Field::new("exact", "é".repeat(len), rules.as_str()),
			Field::new("longer", "é".repeat(len + 1), rules.as_str()),
		]);

		prop_assert_eq!(form.validate(), vec!["longer".to_string()]);
	}

	#[test]
	fn prop_allow_list_is_exact(choice in "[A-Za-z]{1,8}") {
		let allowed = vec!["Herr".to_string(), "Frau".to_string()];
		let form = Form::with_fields([Field::allow_list("Gender", choice.as_str(), allowed.clone())]);

		prop_assert_eq!(form.is_valid(), allowed.contains(&choice));
	}
}
