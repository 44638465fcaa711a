//! Regex-driven redaction.
//!
//! A [`RegexRedactor`] applies an ordered list of [`Pair`]s. Each pair
//! couples a compiled pattern with a delegate [`Redactor`](crate::Redactor)
//! that produces the replacement for every match:
//!
//! ```
//! use redact::pattern::{Pair, RegexRedactor, SSN_PATTERN};
//! use redact::strategies::BlackoutRedactor;
//! use redact::Redactor;
//!
//! let pair = Pair::new(SSN_PATTERN, BlackoutRedactor::new("X"))?;
//! let redactor = RegexRedactor::new(vec![pair])?;
//!
//! assert_eq!(
//!     redactor.redact("the SSN is 123-45-6789")?,
//!     "the SSN is XXXXXXXXXXX"
//! );
//! # Ok::<(), redact::Error>(())
//! ```

mod pair;
mod patterns;
mod regex_redactor;

pub use pair::Pair;
pub use patterns::{
    builtin_pattern, builtin_patterns, BuiltinPattern, AUTH_HEADER_PATTERN, SSN_PATTERN,
};
pub use regex_redactor::RegexRedactor;
