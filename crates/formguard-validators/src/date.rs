//! Date, time and datetime predicate
//!
//! Patterns use the single-letter date format notation common to web form
//! definitions (`Y-m-d`, `d.m.Y H:i`, ...). A value is accepted when it parses
//! under the pattern and formatting the parsed result under the same pattern
//! reproduces the value exactly. The round trip rejects overflowing input such
//! as month 13 or February 30 as well as unpadded input for padded fields.
//!
//! | Letter | Meaning | Letter | Meaning |
//! |---|---|---|---|
//! | `Y` | 4-digit year | `H` | hour `00-23` |
//! | `y` | 2-digit year | `G` | hour `0-23` |
//! | `m` | month `01-12` | `h` | hour `01-12` |
//! | `n` | month `1-12` | `g` | hour `1-12` |
//! | `d` | day `01-31` | `i` | minutes `00-59` |
//! | `j` | day `1-31` | `s` | seconds `00-59` |
//! | `M` | month `Jan-Dec` | `A` | `AM`/`PM` |
//! | `F` | month `January-December` | `a` | `am`/`pm` |
//! | `D` | weekday `Mon-Sun` | `U` | Unix timestamp |
//! | `l` | weekday `Monday-Sunday` | `\` | escapes the next character |
//!
//! Components missing from a pattern are filled with fixed defaults
//! (year 2000, January, day 1, midnight) before the round trip, so a
//! `m-d` pattern accepts `02-29`.

use chrono::format::{Parsed, StrftimeItems, parse};
use std::fmt::Write;

/// Default pattern for `date` fields.
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d";
/// Default pattern for `datetime` fields.
pub const DEFAULT_DATETIME_FORMAT: &str = "Y-m-d H:i:s";
/// Default pattern for `time` fields.
pub const DEFAULT_TIME_FORMAT: &str = "H:i:s";

const DEFAULT_YEAR: i64 = 2000;

// Pattern letters with a meaning that has no chrono equivalent here.
const UNSUPPORTED_LETTERS: &str = "NSwzWLoXxBuveIOPpTZcr";

/// Which components a translated pattern carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Layout {
	year: bool,
	month: bool,
	day: bool,
	hour: bool,
	twelve_hour: bool,
	meridiem: bool,
	minute: bool,
	timestamp: bool,
}

impl Layout {
	fn has_date(&self) -> bool {
		self.year || self.month || self.day || self.timestamp
	}

	fn has_time(&self) -> bool {
		self.hour || self.minute || self.meridiem || self.timestamp
	}
}

/// Translates a date pattern into a chrono format string.
///
/// Returns `None` when the pattern uses a letter without a chrono equivalent
/// or ends in a dangling escape.
fn translate(pattern: &str) -> Option<(String, Layout)> {
	let mut format = String::with_capacity(pattern.len() * 2);
	let mut layout = Layout::default();
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		let item = match c {
			'Y' => {
				layout.year = true;
				"%Y"
			}
			'y' => {
				layout.year = true;
				"%y"
			}
			'm' => {
				layout.month = true;
				"%m"
			}
			'n' => {
				layout.month = true;
				"%-m"
			}
			'M' => {
				layout.month = true;
				"%b"
			}
			'F' => {
				layout.month = true;
				"%B"
			}
			'd' => {
				layout.day = true;
				"%d"
			}
			'j' => {
				layout.day = true;
				"%-d"
			}
			'D' => "%a",
			'l' => "%A",
			'H' => {
				layout.hour = true;
				"%H"
			}
			'G' => {
				layout.hour = true;
				"%-H"
			}
			'h' => {
				layout.hour = true;
				layout.twelve_hour = true;
				"%I"
			}
			'g' => {
				layout.hour = true;
				layout.twelve_hour = true;
				"%-I"
			}
			'i' => {
				layout.minute = true;
				"%M"
			}
			's' => "%S",
			'A' => {
				layout.meridiem = true;
				"%p"
			}
			'a' => {
				layout.meridiem = true;
				"%P"
			}
			'U' => {
				layout.timestamp = true;
				"%s"
			}
			'\\' => {
				push_literal(&mut format, chars.next()?);
				continue;
			}
			c if UNSUPPORTED_LETTERS.contains(c) => return None,
			c => {
				push_literal(&mut format, c);
				continue;
			}
		};
		format.push_str(item);
	}

	Some((format, layout))
}

fn push_literal(format: &mut String, c: char) {
	if c == '%' {
		format.push_str("%%");
	} else {
		format.push(c);
	}
}

/// Fills the components the pattern does not carry so that chrono can
/// resolve a complete value.
fn fill_defaults(parsed: &mut Parsed, layout: &Layout) -> Option<()> {
	if layout.timestamp {
		return Some(());
	}
	if layout.has_date() {
		if !layout.year {
			parsed.set_year(DEFAULT_YEAR).ok()?;
		}
		if !layout.month {
			parsed.set_month(1).ok()?;
		}
		if !layout.day {
			parsed.set_day(1).ok()?;
		}
	}
	if layout.has_time() {
		if !layout.hour && !layout.meridiem {
			parsed.set_hour(0).ok()?;
		}
		if layout.twelve_hour && !layout.meridiem {
			parsed.set_ampm(false).ok()?;
		}
		if !layout.minute {
			parsed.set_minute(0).ok()?;
		}
	}
	Some(())
}

fn round_trip(value: &str, format: &str, layout: &Layout) -> Option<String> {
	let mut parsed = Parsed::new();
	parse(&mut parsed, value, StrftimeItems::new(format)).ok()?;
	// chrono reads second 60 as a leap second and prints it back unchanged.
	if parsed.second() == Some(60) {
		return None;
	}
	fill_defaults(&mut parsed, layout)?;

	let mut rendered = String::with_capacity(value.len());
	let written = match (layout.has_date(), layout.has_time()) {
		(true, true) => {
			let datetime = parsed.to_naive_datetime_with_offset(0).ok()?;
			write!(rendered, "{}", datetime.format(format))
		}
		(true, false) => {
			let date = parsed.to_naive_date().ok()?;
			write!(rendered, "{}", date.format(format))
		}
		(false, true) => {
			let time = parsed.to_naive_time().ok()?;
			write!(rendered, "{}", time.format(format))
		}
		(false, false) => return None,
	};
	written.ok()?;
	Some(rendered)
}

/// Returns `true` when the trimmed value is a valid date, time or datetime
/// under `pattern`.
///
/// Patterns without any date or time component never match.
///
/// # Examples
///
/// ```
/// use formguard_validators::is_date;
///
/// assert!(is_date("2018-12-11", "Y-m-d"));
/// assert!(!is_date("2018-13-15", "Y-m-d"));
/// assert!(!is_date("2019-02-29", "Y-m-d"));
/// assert!(is_date("11.12.2018 08:30", "d.m.Y H:i"));
/// assert!(is_date("23:59:59", "H:i:s"));
/// ```
pub fn is_date(value: &str, pattern: &str) -> bool {
	let value = value.trim();
	let Some((format, layout)) = translate(pattern) else {
		tracing::trace!(pattern, "date pattern uses an unsupported letter");
		return false;
	};
	round_trip(value, &format, &layout).is_some_and(|rendered| rendered == value)
}
