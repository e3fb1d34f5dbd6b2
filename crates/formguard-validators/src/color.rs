//! Color notation predicate
//!
//! Each [`ColorFormat`] has a fixed numeric-range grammar:
//!
//! - `Hex`: `#rrggbb` or `#rgb`, the leading `#` is optional
//! - `Rgb`: three channels `0..=255`
//! - `Rgba`: three channels plus an alpha of `0.0..=1.0` with one decimal
//! - `Hsl`: hue `0..=360`, saturation and lightness `0%..=100%`
//! - `Hsla`: as `Hsl` plus alpha
//!
//! The functional notations accept both `rgb(r, g, b)` and the bare
//! `r, g, b` form.

use crate::errors::UnknownColorFormat;
use crate::lazy_patterns::{
	HEX_COLOR_REGEX, HSL_COLOR_REGEX, HSLA_COLOR_REGEX, RGB_COLOR_REGEX, RGBA_COLOR_REGEX,
};
use std::fmt;
use std::str::FromStr;

/// Supported color notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
	#[default]
	Hex,
	Rgb,
	Rgba,
	Hsl,
	Hsla,
}

impl ColorFormat {
	/// All formats, in declaration order.
	pub const ALL: [ColorFormat; 5] = [
		ColorFormat::Hex,
		ColorFormat::Rgb,
		ColorFormat::Rgba,
		ColorFormat::Hsl,
		ColorFormat::Hsla,
	];

	/// Resolves an optional format name, falling back to [`ColorFormat::Hex`]
	/// when the name is absent or unknown.
	///
	/// # Examples
	///
	/// ```
	/// use formguard_validators::ColorFormat;
	///
	/// assert_eq!(ColorFormat::from_name_or_default(Some("hsl")), ColorFormat::Hsl);
	/// assert_eq!(ColorFormat::from_name_or_default(Some("cmyk")), ColorFormat::Hex);
	/// assert_eq!(ColorFormat::from_name_or_default(None), ColorFormat::Hex);
	/// ```
	pub fn from_name_or_default(name: Option<&str>) -> Self {
		name.and_then(|n| n.parse().ok()).unwrap_or_default()
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ColorFormat::Hex => "hex",
			ColorFormat::Rgb => "rgb",
			ColorFormat::Rgba => "rgba",
			ColorFormat::Hsl => "hsl",
			ColorFormat::Hsla => "hsla",
		}
	}
}

impl fmt::Display for ColorFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ColorFormat {
	type Err = UnknownColorFormat;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ColorFormat::ALL
			.into_iter()
			.find(|format| format.as_str() == s)
			.ok_or_else(|| UnknownColorFormat(s.to_string()))
	}
}

/// Returns `true` when the trimmed value is a color in the given notation.
///
/// # Examples
///
/// ```
/// use formguard_validators::{ColorFormat, is_color};
///
/// assert!(is_color("#1a2B3c", ColorFormat::Hex));
/// assert!(is_color("rgb(255, 0, 10)", ColorFormat::Rgb));
/// assert!(is_color("255,0,10", ColorFormat::Rgb));
/// assert!(is_color("hsla(170, 50%, 45%, .5)", ColorFormat::Hsla));
/// assert!(!is_color("rgb(256, 0, 0)", ColorFormat::Rgb));
/// ```
pub fn is_color(value: &str, format: ColorFormat) -> bool {
	let color = value.trim();
	let pattern = match format {
		ColorFormat::Hex => &*HEX_COLOR_REGEX,
		ColorFormat::Rgb => &*RGB_COLOR_REGEX,
		ColorFormat::Rgba => &*RGBA_COLOR_REGEX,
		ColorFormat::Hsl => &*HSL_COLOR_REGEX,
		ColorFormat::Hsla => &*HSLA_COLOR_REGEX,
	};
	pattern.is_match(color)
}
