//! Delimited pattern matching
//!
//! Rule strings carry regexes in delimited form: `/\d{5}/`, `#^[a-z]+$#i`,
//! `{\w+}`. The first character is the delimiter (any character that is not
//! alphanumeric, a backslash or whitespace; `(`, `[`, `{` and `<` close with
//! their matching bracket). Modifiers follow the closing delimiter:
//!
//! | Modifier | Effect |
//! |---|---|
//! | `i` | case-insensitive |
//! | `m` | `^`/`$` match at line boundaries |
//! | `s` | `.` matches newlines |
//! | `x` | whitespace and `#` comments are ignored |
//! | `U` | swaps greedy and lazy quantifiers |
//! | `u`, `D`, `A` | accepted, no effect |
//!
//! The compiled pattern always has to match the whole subject.

use crate::errors::{PatternError, PatternResult};
use ::regex::{Regex, RegexBuilder};

fn closing_delimiter(open: char) -> char {
	match open {
		'(' => ')',
		'[' => ']',
		'{' => '}',
		'<' => '>',
		other => other,
	}
}

/// Splits a delimited pattern into its body and modifier suffix.
fn split_delimited(pattern: &str) -> PatternResult<(&str, &str)> {
	let pattern = pattern.trim_start();
	let mut chars = pattern.char_indices();
	let (_, open) = chars.next().ok_or(PatternError::Empty)?;
	if open.is_alphanumeric() || open == '\\' || open.is_whitespace() {
		return Err(PatternError::InvalidDelimiter(open));
	}
	let close = closing_delimiter(open);
	let nests = close != open;
	let body_start = open.len_utf8();

	let mut depth = 0usize;
	let mut escaped = false;
	for (idx, c) in chars {
		if escaped {
			escaped = false;
			continue;
		}
		if c == '\\' {
			escaped = true;
		} else if nests && c == open {
			depth += 1;
		} else if c == close {
			if depth == 0 {
				return Ok((&pattern[body_start..idx], &pattern[idx + c.len_utf8()..]));
			}
			depth -= 1;
		}
	}

	Err(PatternError::Unterminated(close))
}

/// Compiles a delimited pattern into a regex anchored at both ends of the
/// subject.
///
/// # Examples
///
/// ```
/// use formguard_validators::{PatternError, compile_pattern};
///
/// let re = compile_pattern(r"/[a-z]+/i").unwrap();
/// assert!(re.is_match("Hello"));
/// assert!(!re.is_match("Hello!"));
///
/// assert_eq!(compile_pattern("/abc").unwrap_err(), PatternError::Unterminated('/'));
/// assert_eq!(compile_pattern("/abc/q").unwrap_err(), PatternError::UnknownModifier('q'));
/// ```
pub fn compile_pattern(pattern: &str) -> PatternResult<Regex> {
	let (body, modifiers) = split_delimited(pattern)?;

	let anchored = format!(r"\A(?:{body})\z");
	let mut builder = RegexBuilder::new(&anchored);
	for modifier in modifiers.chars() {
		match modifier {
			'i' => builder.case_insensitive(true),
			'm' => builder.multi_line(true),
			's' => builder.dot_matches_new_line(true),
			'x' => builder.ignore_whitespace(true),
			'U' => builder.swap_greed(true),
			'u' | 'D' | 'A' => &mut builder,
			c if c.is_whitespace() => &mut builder,
			c => return Err(PatternError::UnknownModifier(c)),
		};
	}

	Ok(builder.build()?)
}

/// Returns `true` when `subject` matches the delimited `pattern` in full.
///
/// Patterns that fail to compile never match.
///
/// # Examples
///
/// ```
/// use formguard_validators::regex;
///
/// assert!(regex(r"/(\d{5})/", "96831"));
/// assert!(!regex(r"/(\d{5})/", "968#31"));
/// assert!(regex(r"/yes|no/", "no"));
/// assert!(!regex(r"/[unclosed/", "x"));
/// ```
pub fn regex(pattern: &str, subject: &str) -> bool {
	match compile_pattern(pattern) {
		Ok(re) => re.is_match(subject),
		Err(err) => {
			tracing::warn!(pattern, error = %err, "pattern cannot be compiled");
			false
		}
	}
}
