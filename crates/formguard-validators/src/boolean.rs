//! Boolean literal predicate

/// Returns `true` when the trimmed value is `true`, `false`, `1` or `0`.
///
/// Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_bool;
///
/// assert!(is_bool(" true "));
/// assert!(is_bool("0"));
/// assert!(!is_bool("yes"));
/// ```
pub fn is_bool(value: &str) -> bool {
	matches!(value.trim(), "true" | "false" | "1" | "0")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("true", true)]
	#[case("false", true)]
	#[case("1", true)]
	#[case("0", true)]
	#[case("  false\n", true)]
	#[case("TRUE", false)]
	#[case("yes", false)]
	#[case("2", false)]
	#[case("01", false)]
	#[case("", false)]
	fn test_is_bool(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_bool(value), expected);
	}
}
