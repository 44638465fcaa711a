//! Literal substring replacement.

use crate::error::Result;
use crate::redactor::Redactor;

/// Replaces every occurrence of a literal substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringRedactor {
    substring: String,
    replacement: String,
}

impl SubstringRedactor {
    /// Create a redactor replacing `substring` with `replacement`.
    #[must_use]
    pub fn new(substring: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
            replacement: replacement.into(),
        }
    }
}

impl Redactor for SubstringRedactor {
    fn redact(&self, input: &str) -> Result<String> {
        // An empty needle would match between every character.
        if self.substring.is_empty() {
            return Ok(input.to_string());
        }
        Ok(input.replace(&self.substring, &self.replacement))
    }
}
