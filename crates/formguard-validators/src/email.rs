//! Email address predicate

use crate::lazy_patterns::{DOMAIN_LABEL_REGEX, EMAIL_LOCAL_REGEX};

const MAX_LOCAL_LENGTH: usize = 64;
const MAX_EMAIL_LENGTH: usize = 320;

/// Returns `true` when the trimmed value is a syntactically valid email
/// address.
///
/// The local part must be a dot-atom of at most 64 characters. The domain
/// must consist of at least two DNS labels, each at most 63 characters and
/// not starting or ending with a hyphen.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_email;
///
/// assert!(is_email("info@some-mail.com"));
/// assert!(is_email("first.last+tag@mail.example.org"));
/// assert!(!is_email("no-at-sign.example.com"));
/// assert!(!is_email("user@localhost"));
/// assert!(!is_email(""));
/// ```
pub fn is_email(value: &str) -> bool {
	let email = value.trim();
	if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
		return false;
	}

	let Some((local, domain)) = email.rsplit_once('@') else {
		return false;
	};

	if local.is_empty() || local.len() > MAX_LOCAL_LENGTH || !EMAIL_LOCAL_REGEX.is_match(local) {
		return false;
	}

	let labels: Vec<&str> = domain.split('.').collect();
	labels.len() >= 2 && labels.iter().all(|label| DOMAIN_LABEL_REGEX.is_match(label))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("info@some-mail.com")]
	#[case("user@example.com")]
	#[case("  padded@example.com  ")]
	#[case("first.last@example.co.uk")]
	#[case("user+tag@example.com")]
	#[case("o'brien@example.ie")]
	#[case("x@a1.io")]
	fn test_is_email_valid(#[case] email: &str) {
		assert!(is_email(email), "Expected '{email}' to be a valid email");
	}

	#[rstest]
	#[case("")]
	#[case("plainaddress")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@localhost")]
	#[case("user@@example.com")]
	#[case(".user@example.com")]
	#[case("user.@example.com")]
	#[case("us..er@example.com")]
	#[case("user@-example.com")]
	#[case("user@example-.com")]
	#[case("user@example..com")]
	#[case("user name@example.com")]
	fn test_is_email_invalid(#[case] email: &str) {
		assert!(!is_email(email), "Expected '{email}' to be rejected");
	}

	#[test]
	fn test_is_email_local_part_too_long() {
		let local = "a".repeat(MAX_LOCAL_LENGTH + 1);
		assert!(!is_email(&format!("{local}@example.com")));

		let local = "a".repeat(MAX_LOCAL_LENGTH);
		assert!(is_email(&format!("{local}@example.com")));
	}
}
