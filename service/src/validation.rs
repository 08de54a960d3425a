//! Syntactic email address validation.
//!
//! The check is purely lexical: no DNS or MX lookup is performed and no
//! mailbox is contacted. [`EMAIL_PATTERN`] also backs the `validator`
//! derive on submitted forms:
//!
//! ```ignore
//! use validator::Validate;
//! use crate::validation::EMAIL_PATTERN;
//!
//! #[derive(Validate)]
//! struct EmailForm {
//!     #[validate(regex(path = *EMAIL_PATTERN))]
//!     email: String,
//! }
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, domain labels, then a top-level domain of two or more letters.
#[allow(clippy::expect_used)] // pattern is a compile-time constant
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` when the whole candidate matches the address pattern.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
