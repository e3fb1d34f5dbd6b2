//! Regex patterns compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

// Decimal literal: optional sign, digits with optional fraction (or a bare
// fraction), optional exponent. Hexadecimal, `inf` and `nan` are rejected.
pub(crate) static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
		.expect("NUMBER_REGEX: invalid regex pattern")
});

// Host-ish URL pattern. The word boundary is ASCII-only.
pub(crate) static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,4}(?-u:\b)([-a-zA-Z0-9@:%_+.~#?&/=]*)$",
	)
	.expect("URL_REGEX: invalid regex pattern")
});

// Dot-atom local part of an email address.
pub(crate) static EMAIL_LOCAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$",
	)
	.expect("EMAIL_LOCAL_REGEX: invalid regex pattern")
});

// Single DNS label: no leading or trailing hyphen, at most 63 characters.
pub(crate) static DOMAIN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
		.expect("DOMAIN_LABEL_REGEX: invalid regex pattern")
});

const RGB_CHANNEL: &str = r"(0|255|25[0-4]|2[0-4]\d|1\d\d|0?\d?\d)";
const HUE: &str = r"(0|360|35\d|3[0-4]\d|[12]\d\d|0?\d?\d)";
const PERCENT: &str = r"(0|100|\d{1,2})%";
const ALPHA: &str = r"(0?\.\d|1(\.0)?)";
const SEP: &str = r"\s*,\s*";

/// Builds a color grammar that accepts both `name(a,b,c)` and the bare
/// comma-separated `a,b,c` form.
fn color_pattern(name: &str, components: &[&str]) -> String {
	let body = components.join(SEP);
	format!(r"^{name}\({body}\)$|^{body}$")
}

pub(crate) static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^#?(([A-Fa-f0-9]{6})|([A-Fa-f0-9]{3}))$")
		.expect("HEX_COLOR_REGEX: invalid regex pattern")
});

pub(crate) static RGB_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&color_pattern(
		"rgb",
		&[RGB_CHANNEL, RGB_CHANNEL, RGB_CHANNEL],
	))
	.expect("RGB_COLOR_REGEX: invalid regex pattern")
});

pub(crate) static RGBA_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&color_pattern(
		"rgba",
		&[RGB_CHANNEL, RGB_CHANNEL, RGB_CHANNEL, ALPHA],
	))
	.expect("RGBA_COLOR_REGEX: invalid regex pattern")
});

pub(crate) static HSL_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&color_pattern("hsl", &[HUE, PERCENT, PERCENT]))
		.expect("HSL_COLOR_REGEX: invalid regex pattern")
});

pub(crate) static HSLA_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&color_pattern("hsla", &[HUE, PERCENT, PERCENT, ALPHA]))
		.expect("HSLA_COLOR_REGEX: invalid regex pattern")
});
