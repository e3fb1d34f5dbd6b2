//! Numeric predicates
//!
//! A value is numeric when, after trimming surrounding whitespace, it is a
//! decimal literal: an optional sign, digits with an optional fraction (or a
//! bare fraction such as `.5`), and an optional exponent. Hexadecimal
//! literals, `inf` and `nan` are not numeric.

use crate::lazy_patterns::NUMBER_REGEX;

/// Parses a numeric value into an `f64`, returning `None` when the value is
/// not numeric.
///
/// # Examples
///
/// ```
/// use formguard_validators::parse_number;
///
/// assert_eq!(parse_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_number("-3e2"), Some(-300.0));
/// assert_eq!(parse_number("0x1A"), None);
/// assert_eq!(parse_number("nan"), None);
/// ```
pub fn parse_number(value: &str) -> Option<f64> {
	let trimmed = value.trim();
	if !NUMBER_REGEX.is_match(trimmed) {
		return None;
	}
	trimmed.parse::<f64>().ok()
}

/// Returns `true` when the value is numeric after trimming.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_number;
///
/// assert!(is_number("96831"));
/// assert!(is_number("  -0.25 "));
/// assert!(!is_number("968#31"));
/// assert!(!is_number(""));
/// ```
pub fn is_number(value: &str) -> bool {
	parse_number(value).is_some()
}

/// Returns `true` when the value is numeric and not below zero.
pub fn is_number_positive(value: &str) -> bool {
	parse_number(value).is_some_and(|n| n >= 0.0)
}

/// Returns `true` when the value is numeric and not above zero.
pub fn is_number_negative(value: &str) -> bool {
	parse_number(value).is_some_and(|n| n <= 0.0)
}

/// Returns `true` when the value is numeric and different from zero.
pub fn is_number_nonzero(value: &str) -> bool {
	parse_number(value).is_some_and(|n| n != 0.0)
}
