//! Middle redaction: keep the edges of a value, hide the rest.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::redactor::Redactor;

/// Default number of leading characters left visible.
pub const DEFAULT_PREFIX_LENGTH: usize = 3;

/// Default number of trailing characters left visible.
pub const DEFAULT_SUFFIX_LENGTH: usize = 3;

/// Default replacement text.
pub const DEFAULT_REPLACEMENT_TEXT: &str = "[redacted]";

const MIN_PREFIX_LENGTH: usize = 3;
const MIN_SUFFIX_LENGTH: usize = 3;
const MIN_REPLACEMENT_TEXT_LENGTH: usize = 3;

/// Which edges of the input a [`MiddleRedactor`] reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiddleMode {
    /// Reveal both prefix and suffix when the input is long enough,
    /// falling back to the prefix alone.
    #[default]
    Full,
    /// Reveal only the prefix.
    PrefixOnly,
    /// Reveal only the suffix.
    SuffixOnly,
}

impl std::fmt::Display for MiddleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::PrefixOnly => write!(f, "prefix_only"),
            Self::SuffixOnly => write!(f, "suffix_only"),
        }
    }
}

/// Replaces the middle of a string, leaving a visible prefix and suffix.
///
/// Inputs too short to reveal both edges without exposing most of the value
/// reveal one edge or none:
///
/// - empty input stays empty;
/// - input of at least `prefix + replacement + suffix` characters reveals the
///   edges selected by the mode;
/// - shorter input reveals only the prefix (only the suffix in
///   [`MiddleMode::SuffixOnly`]) if it still has at least
///   `edge + replacement` characters;
/// - anything else becomes the bare replacement text.
///
/// All lengths are counted in `char`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleRedactor {
    mode: MiddleMode,
    prefix_length: usize,
    suffix_length: usize,
    replacement_text: String,
}

impl MiddleRedactor {
    /// Create a redactor with the default configuration: full mode, three
    /// visible characters at each end, `"[redacted]"` in between.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: MiddleMode::default(),
            prefix_length: DEFAULT_PREFIX_LENGTH,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            replacement_text: DEFAULT_REPLACEMENT_TEXT.to_string(),
        }
    }

    /// Start building a redactor from the default configuration.
    #[must_use]
    pub fn builder() -> MiddleRedactorBuilder {
        MiddleRedactorBuilder {
            inner: Self::new(),
        }
    }

    /// The configured mode.
    #[must_use]
    pub fn mode(&self) -> MiddleMode {
        self.mode
    }

    fn prefix<'a>(&self, input: &'a str) -> &'a str {
        let end = input
            .char_indices()
            .nth(self.prefix_length)
            .map_or(input.len(), |(i, _)| i);
        &input[..end]
    }

    fn suffix<'a>(&self, input: &'a str, length: usize) -> &'a str {
        let start = input
            .char_indices()
            .nth(length - self.suffix_length)
            .map_or(input.len(), |(i, _)| i);
        &input[start..]
    }

    fn with_prefix(&self, input: &str) -> String {
        format!("{}{}", self.prefix(input), self.replacement_text)
    }

    fn with_suffix(&self, input: &str, length: usize) -> String {
        format!("{}{}", self.replacement_text, self.suffix(input, length))
    }
}

impl Default for MiddleRedactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor for MiddleRedactor {
    fn redact(&self, input: &str) -> Result<String> {
        let length = input.chars().count();
        if length == 0 {
            return Ok(String::new());
        }

        let replacement_length = self.replacement_text.chars().count();
        let min_length = self.prefix_length + replacement_length + self.suffix_length;

        if length >= min_length {
            return Ok(match self.mode {
                MiddleMode::Full => format!(
                    "{}{}{}",
                    self.prefix(input),
                    self.replacement_text,
                    self.suffix(input, length)
                ),
                MiddleMode::PrefixOnly => self.with_prefix(input),
                MiddleMode::SuffixOnly => self.with_suffix(input, length),
            });
        }

        if length > replacement_length {
            match self.mode {
                MiddleMode::Full | MiddleMode::PrefixOnly
                    if length >= self.prefix_length + replacement_length =>
                {
                    return Ok(self.with_prefix(input));
                }
                MiddleMode::SuffixOnly if length >= self.suffix_length + replacement_length => {
                    return Ok(self.with_suffix(input, length));
                }
                _ => {}
            }
        }

        Ok(self.replacement_text.clone())
    }
}

/// Builder for a validated [`MiddleRedactor`].
#[derive(Debug, Clone)]
pub struct MiddleRedactorBuilder {
    inner: MiddleRedactor,
}

impl MiddleRedactorBuilder {
    /// Set which edges are revealed. Default is [`MiddleMode::Full`].
    #[must_use]
    pub fn mode(mut self, mode: MiddleMode) -> Self {
        self.inner.mode = mode;
        self
    }

    /// Set the number of leading characters to reveal. Must be at least 3.
    #[must_use]
    pub fn prefix_length(mut self, prefix_length: usize) -> Self {
        self.inner.prefix_length = prefix_length;
        self
    }

    /// Set the number of trailing characters to reveal. Must be at least 3.
    #[must_use]
    pub fn suffix_length(mut self, suffix_length: usize) -> Self {
        self.inner.suffix_length = suffix_length;
        self
    }

    /// Set the replacement text. Must be at least 3 characters long.
    #[must_use]
    pub fn replacement_text(mut self, replacement_text: impl Into<String>) -> Self {
        self.inner.replacement_text = replacement_text.into();
        self
    }

    /// Validate the configuration and build the redactor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if either edge length is below 3 or
    /// the replacement text is shorter than 3 characters.
    pub fn build(self) -> Result<MiddleRedactor> {
        let inner = self.inner;

        if inner.prefix_length < MIN_PREFIX_LENGTH {
            return Err(Error::configuration(format!(
                "middle prefix length must not be less than {MIN_PREFIX_LENGTH}"
            )));
        }

        if inner.suffix_length < MIN_SUFFIX_LENGTH {
            return Err(Error::configuration(format!(
                "middle suffix length must not be less than {MIN_SUFFIX_LENGTH}"
            )));
        }

        if inner.replacement_text.chars().count() < MIN_REPLACEMENT_TEXT_LENGTH {
            return Err(Error::configuration(format!(
                "middle replacement text must not be shorter than {MIN_REPLACEMENT_TEXT_LENGTH} characters"
            )));
        }

        Ok(inner)
    }
}
