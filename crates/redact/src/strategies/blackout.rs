//! Word-by-word blackout.

use crate::error::Result;
use crate::redactor::Redactor;

/// Replaces every character of every word with a replacement token.
///
/// Words are separated by runs of whitespace and rejoined with a single
/// space, so a word of `n` characters becomes `n` copies of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackoutRedactor {
    replacement: String,
}

impl BlackoutRedactor {
    /// Create a blackout redactor using `replacement` for each character.
    #[must_use]
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
        }
    }

    fn black_out(&self, word: &str) -> String {
        self.replacement.repeat(word.chars().count())
    }
}

impl Redactor for BlackoutRedactor {
    fn redact(&self, input: &str) -> Result<String> {
        let words: Vec<String> = input
            .split_whitespace()
            .map(|word| self.black_out(word))
            .collect();
        Ok(words.join(" "))
    }
}
