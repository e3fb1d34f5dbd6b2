//! URL predicate
//!
//! Unlike a full URL parser this only recognizes the common "web address"
//! shape: an optional `http://`/`https://` scheme, an optional `www.`, a host
//! ending in a 2-4 letter lowercase top-level domain, and an optional path or
//! query made of URL-safe characters.

use crate::lazy_patterns::URL_REGEX;

/// Returns `true` when the value is a non-empty web address.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_url;
///
/// assert!(is_url("https://www.google.ch/"));
/// assert!(is_url("example.com/path?q=1"));
/// assert!(!is_url("ftp://example.com"));
/// assert!(!is_url(""));
/// ```
pub fn is_url(value: &str) -> bool {
	!value.is_empty() && URL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("http://example.com")]
	#[case("https://example.com")]
	#[case("https://www.google.ch/")]
	#[case("www.example.org")]
	#[case("example.io")]
	#[case("https://sub.example.com/path/to/page")]
	#[case("https://example.com/search?q=rust&page=2")]
	#[case("http://user@example.com")]
	fn test_is_url_valid(#[case] url: &str) {
		// Act
		let result = is_url(url);

		// Assert
		assert!(result, "Expected '{url}' to be a valid URL");
	}

	#[rstest]
	#[case("")]
	#[case("not a url")]
	#[case("ftp://example.com")]
	#[case("http://localhost")]
	#[case("https://example.COM")]
	#[case("https://example.toolong")]
	#[case("https://example.com/with space")]
	#[case("x.c")]
	fn test_is_url_invalid(#[case] url: &str) {
		// Act
		let result = is_url(url);

		// Assert
		assert!(!result, "Expected '{url}' to be rejected");
	}
}
