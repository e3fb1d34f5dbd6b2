//! Rule string parsing
//!
//! A rule string is a list of `name:value` (or `name=value`) pairs separated
//! by `|`:
//!
//! ```text
//! type:string|required:true|max:50|regex:/^(Herr|Frau)$/
//! ```
//!
//! Names are ASCII letters. Values run up to the next `|`, except values that
//! start with `/`: those extend to the first `/` that is followed (after
//! optional modifier letters and whitespace) by `|` or by the end of the
//! string, so a delimited regex may contain `|`. A value may contain `:` and
//! `=`. Keys and values are trimmed.
//!
//! Parsing never fails. Text that does not form a pair is ignored, and a name
//! that occurs twice keeps its last value.

use crate::value::Value;
use formguard_validators::parse_number;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Raw `name → value` pairs of a rule string.
pub type RuleMap = HashMap<String, String>;

static RULE_PAIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?P<key>[a-zA-Z]+)\s*(?::|=)\s*(?P<value>/.*?/[a-zA-Z]*\s*(?:\||$)|[^|]+)")
		.expect("RULE_PAIR_REGEX: invalid regex pattern")
});

/// Splits a rule string into its raw pairs.
///
/// # Examples
///
/// ```
/// use formguard_forms::rules::parse_rules;
///
/// let rules = parse_rules("type:string |required=true| regex:/^(a|b)$/|max:5");
/// assert_eq!(rules["type"], "string");
/// assert_eq!(rules["required"], "true");
/// assert_eq!(rules["regex"], "/^(a|b)$/");
/// assert_eq!(rules["max"], "5");
/// ```
pub fn parse_rules(rule_string: &str) -> RuleMap {
	RULE_PAIR_REGEX
		.captures_iter(rule_string.trim())
		.map(|caps| {
			let value = caps["value"].trim();
			let value = match value.strip_suffix('|') {
				Some(delimited) if value.starts_with('/') => delimited.trim_end(),
				_ => value,
			};
			(caps["key"].trim().to_string(), value.to_string())
		})
		.collect()
}

/// The declared type of a rule-string field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
	#[default]
	String,
	Number,
	Email,
	Url,
	Color,
	Date,
	DateTime,
	Time,
	Array,
	/// A type name the engine does not know; such fields always fail.
	Unknown(String),
}

impl FieldType {
	pub fn from_name(name: &str) -> Self {
		match name {
			"string" => FieldType::String,
			"number" => FieldType::Number,
			"email" => FieldType::Email,
			"url" => FieldType::Url,
			"color" => FieldType::Color,
			"date" => FieldType::Date,
			"datetime" => FieldType::DateTime,
			"time" => FieldType::Time,
			"array" => FieldType::Array,
			other => FieldType::Unknown(other.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			FieldType::String => "string",
			FieldType::Number => "number",
			FieldType::Email => "email",
			FieldType::Url => "url",
			FieldType::Color => "color",
			FieldType::Date => "date",
			FieldType::DateTime => "datetime",
			FieldType::Time => "time",
			FieldType::Array => "array",
			FieldType::Unknown(name) => name,
		}
	}

	/// Returns `true` when `value` counts as given for this type.
	///
	/// Array fields need at least one element; every other type only needs
	/// something other than the empty string.
	pub fn is_present(&self, value: &Value) -> bool {
		match (self, value) {
			(FieldType::Array, value) => !value.is_empty(),
			(_, Value::Scalar(s)) => !s.is_empty(),
			(_, Value::Sequence(_)) => true,
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Typed view of a parsed rule string.
///
/// # Examples
///
/// ```
/// use formguard_forms::rules::{FieldType, Rules};
///
/// let rules = Rules::parse("type:number|required:true|positive:true|max:10");
/// assert!(rules.required);
/// assert_eq!(rules.field_type, FieldType::Number);
/// assert!(rules.positive);
/// assert_eq!(rules.max, Some(10.0));
/// assert_eq!(rules.min, None);
///
/// let defaults = Rules::parse("");
/// assert!(!defaults.required);
/// assert_eq!(defaults.field_type, FieldType::String);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rules {
	pub required: bool,
	pub field_type: FieldType,
	pub max: Option<f64>,
	pub min: Option<f64>,
	pub format: Option<String>,
	pub regex: Option<String>,
	pub positive: bool,
	pub negative: bool,
	pub nonzero: bool,
	/// Pairs with names the engine does not interpret
	pub extra: RuleMap,
}

impl Rules {
	pub fn parse(rule_string: &str) -> Self {
		let rules = Self::from(parse_rules(rule_string));
		tracing::trace!(rule_string, ?rules, "parsed rules");
		rules
	}
}

fn flag(value: &str) -> bool {
	value == "true"
}

fn bound(name: &str, value: &str) -> Option<f64> {
	let parsed = parse_number(value);
	if parsed.is_none() {
		tracing::warn!(rule = name, value, "ignoring non-numeric bound");
	}
	parsed
}

impl From<RuleMap> for Rules {
	fn from(map: RuleMap) -> Self {
		let mut rules = Rules::default();
		for (name, value) in map {
			match name.as_str() {
				"required" => rules.required = flag(&value),
				"type" => rules.field_type = FieldType::from_name(&value),
				"max" => rules.max = bound(&name, &value),
				"min" => rules.min = bound(&name, &value),
				"format" => rules.format = Some(value),
				"regex" => rules.regex = Some(value),
				"positive" => rules.positive = flag(&value),
				"negative" => rules.negative = flag(&value),
				"nonzero" => rules.nonzero = flag(&value),
				_ => {
					rules.extra.insert(name.clone(), value);
				}
			}
		}
		rules
	}
}
