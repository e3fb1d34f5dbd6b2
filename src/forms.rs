//! Form validation module.
//!
//! This module provides fields, rule-string parsing, constraint evaluators
//! and the `Form` engine.
//!
//! # Examples
//!
//! ```rust
//! use formguard::forms::{Field, Form};
//!
//! let form = Form::with_fields([Field::new("Website", "https://www.google.ch/", "type:url")]);
//! assert!(form.is_valid());
//! ```

pub use formguard_forms::*;
