//! Syntactic predicates for formguard
//!
//! Every function in this crate answers a single question of the form
//! "is this value a syntactically valid X" and returns a plain `bool`.
//! The predicates are pure: they hold no state, perform no I/O and can be
//! called from any thread.
//!
//! | Predicate | Accepts |
//! |---|---|
//! | [`is_number`] | Decimal literals with optional sign, fraction and exponent |
//! | [`is_bool`] | `true`, `false`, `1` and `0` |
//! | [`is_string_not_empty`] | Any value that is not blank after trimming |
//! | [`is_url`] | Host names with an optional `http(s)://` and `www.` prefix |
//! | [`is_email`] | Dot-atom local part and a multi-label domain |
//! | [`is_color`] | `hex`, `rgb`, `rgba`, `hsl` and `hsla` notations |
//! | [`is_date`] | Values that survive a parse/format round trip under a pattern |
//! | [`regex`] | Delimited patterns (`/…/flags`) matching the whole subject |
//!
//! ## Example
//!
//! ```
//! use formguard_validators::{ColorFormat, is_color, is_date, is_number, regex};
//!
//! assert!(is_number(" 42.5 "));
//! assert!(is_color("hsl(170, 50%, 45%)", ColorFormat::Hsl));
//! assert!(is_date("2018-12-11", "Y-m-d"));
//! assert!(!is_date("2018-13-15", "Y-m-d"));
//! assert!(regex(r"/\d{5}/", "96831"));
//! ```

pub(crate) mod lazy_patterns;

pub mod boolean;
pub mod color;
pub mod custom_regex;
pub mod date;
pub mod email;
pub mod errors;
pub mod numeric;
pub mod string;
pub mod url;

pub use boolean::is_bool;
pub use color::{ColorFormat, is_color};
pub use custom_regex::{compile_pattern, regex};
pub use date::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT, DEFAULT_TIME_FORMAT, is_date};
pub use email::is_email;
pub use errors::{PatternError, PatternResult};
pub use numeric::{
	is_number, is_number_negative, is_number_nonzero, is_number_positive, parse_number,
};
pub use string::{is_string_not_empty, text_length_range};
pub use url::is_url;

/// Re-export commonly used items
pub mod prelude {
	pub use super::boolean::is_bool;
	pub use super::color::{ColorFormat, is_color};
	pub use super::custom_regex::regex;
	pub use super::date::is_date;
	pub use super::email::is_email;
	pub use super::numeric::{
		is_number, is_number_negative, is_number_nonzero, is_number_positive, parse_number,
	};
	pub use super::string::{is_string_not_empty, text_length_range};
	pub use super::url::is_url;
}
