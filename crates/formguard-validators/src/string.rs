//! String presence and length predicates

/// Returns `false` iff the value is empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_string_not_empty;
///
/// assert!(is_string_not_empty("Google AG"));
/// assert!(!is_string_not_empty("   "));
/// assert!(!is_string_not_empty(""));
/// ```
pub fn is_string_not_empty(value: &str) -> bool {
	!value.trim().is_empty()
}

/// Returns `true` when the character count of `value` lies within
/// `min..=max`.
///
/// # Examples
///
/// ```
/// use formguard_validators::text_length_range;
///
/// assert!(text_length_range("hello", 1, 5));
/// assert!(!text_length_range("hello!", 1, 5));
/// assert!(text_length_range("Zürich", 6, 6));
/// ```
pub fn text_length_range(value: &str, min: usize, max: usize) -> bool {
	let len = value.chars().count();
	len >= min && len <= max
}
