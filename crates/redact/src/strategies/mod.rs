//! Leaf redaction strategies.
//!
//! Each strategy is an independent [`Redactor`](crate::Redactor):
//!
//! - [`SimpleRedactor`]: replaces the whole input with fixed text.
//! - [`BlackoutRedactor`]: blacks out every character of every word.
//! - [`SubstringRedactor`]: replaces a literal substring.
//! - [`MiddleRedactor`]: keeps a prefix and/or suffix, hides the rest.
//! - [`UrlRedactor`]: hides URL credentials.

mod blackout;
mod middle;
mod simple;
mod substring;
mod url;

pub use blackout::BlackoutRedactor;
pub use middle::{
    MiddleMode, MiddleRedactor, MiddleRedactorBuilder, DEFAULT_PREFIX_LENGTH,
    DEFAULT_REPLACEMENT_TEXT, DEFAULT_SUFFIX_LENGTH,
};
pub use simple::SimpleRedactor;
pub use substring::SubstringRedactor;
pub use self::url::UrlRedactor;
