//! Whole-string replacement.

use crate::error::Result;
use crate::redactor::Redactor;

/// Replaces any input with a fixed replacement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRedactor {
    replacement: String,
}

impl SimpleRedactor {
    /// Create a redactor that always returns `replacement`.
    #[must_use]
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    /// The replacement text.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Redactor for SimpleRedactor {
    fn redact(&self, _input: &str) -> Result<String> {
        Ok(self.replacement.clone())
    }

    fn constant_output(&self) -> Option<&str> {
        Some(&self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_ignores_input() {
        let r = SimpleRedactor::new("[redacted]");
        assert_eq!(r.redact("this is a test.").unwrap(), "[redacted]");
        assert_eq!(r.redact("").unwrap(), "[redacted]");
    }

    #[test]
    fn test_constant_output() {
        let r = SimpleRedactor::new("XXX");
        assert_eq!(r.constant_output(), Some("XXX"));
        assert_eq!(r.replacement(), "XXX");
    }
}
