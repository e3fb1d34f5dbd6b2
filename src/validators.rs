//! Predicate module.
//!
//! This module provides the stateless recognizers for numbers, emails, URLs,
//! colors, dates and delimited patterns.
//!
//! # Examples
//!
//! ```rust
//! use formguard::validators::{ColorFormat, is_color, is_number};
//!
//! assert!(is_number("96831"));
//! assert!(is_color("#00ff00", ColorFormat::Hex));
//! ```

pub use formguard_validators::*;
