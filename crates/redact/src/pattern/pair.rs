//! Pattern/delegate pairs.

use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Result};
use crate::redactor::Redactor;
use crate::strategies::SimpleRedactor;

/// A compiled pattern and the redactor that replaces its matches.
///
/// The pattern is validated and compiled once, here; a `Pair` is immutable
/// afterwards and cheap to clone.
#[derive(Debug, Clone)]
pub struct Pair {
    regex: Regex,
    delegate: Arc<dyn Redactor>,
}

impl Pair {
    /// Create a pair whose matches are replaced by `delegate`'s output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `pattern` is empty and
    /// [`Error::InvalidPattern`] if it does not compile.
    pub fn new(pattern: &str, delegate: impl Redactor + 'static) -> Result<Self> {
        Self::from_shared(pattern, Arc::new(delegate))
    }

    /// Create a pair around an already shared delegate.
    ///
    /// # Errors
    ///
    /// Same as [`Pair::new`].
    pub fn from_shared(pattern: &str, delegate: Arc<dyn Redactor>) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::configuration("regex pattern is required"));
        }

        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex, delegate })
    }

    /// Create a pair that replaces every match with fixed text.
    ///
    /// The text is a replacement template: `$1`, `${name}` and friends expand
    /// to the corresponding capture group, and `$$` is a literal `$`.
    ///
    /// # Errors
    ///
    /// Same as [`Pair::new`].
    pub fn simple(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::new(pattern, SimpleRedactor::new(replacement))
    }

    /// The pattern source text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled pattern.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The redactor applied to each match.
    #[must_use]
    pub fn delegate(&self) -> &dyn Redactor {
        self.delegate.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::MiddleRedactor;

    #[test]
    fn test_empty_pattern_rejected() {
        let err = Pair::simple("", "test").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("regex pattern is required"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Pair::simple("foo(", "test").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_accessors() {
        let pair = Pair::new(r"b[aA][rRzZ]", MiddleRedactor::new()).unwrap();
        assert_eq!(pair.pattern(), r"b[aA][rRzZ]");
        assert!(pair.regex().is_match("baZ"));
        assert_eq!(pair.delegate().redact("bar").unwrap(), "[redacted]");
        assert_eq!(pair.delegate().constant_output(), None);
    }

    #[test]
    fn test_simple_pair_is_constant() {
        let pair = Pair::simple("test", "[redacted]").unwrap();
        assert_eq!(pair.delegate().constant_output(), Some("[redacted]"));
    }

    #[test]
    fn test_shared_delegate() {
        let shared: Arc<dyn Redactor> = Arc::new(SimpleRedactor::new("X"));
        let first = Pair::from_shared("a", Arc::clone(&shared)).unwrap();
        let second = Pair::from_shared("b", shared).unwrap();
        assert_eq!(first.delegate().redact("a").unwrap(), "X");
        assert_eq!(second.delegate().redact("b").unwrap(), "X");
    }
}
