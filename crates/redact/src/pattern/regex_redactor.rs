//! The regex redactor.

use std::ops::Range;

use regex::Regex;
use tracing::{debug, trace};

use super::pair::Pair;
use crate::error::{Error, Result};
use crate::redactor::Redactor;

/// Replaces matches of one or more patterns using per-pattern delegates.
///
/// Pairs are applied in order, each to the output of the previous one.
///
/// When a pair's delegate has a [constant output](Redactor::constant_output)
/// that does not itself match the pattern, all matches are replaced in a
/// single pass and the constant is expanded as a replacement template (`$1`,
/// `${name}`). Otherwise matches are replaced
/// one at a time: the leftmost match is handed to the delegate, its output is
/// spliced in, and the string is scanned again from scratch. Every rescan
/// must find strictly fewer matches than the one before, otherwise the
/// delegate is feeding its own pattern and redaction fails with
/// [`Error::RedactionLoop`].
#[derive(Debug, Clone)]
pub struct RegexRedactor {
    pairs: Vec<Pair>,
    max_substitutions: Option<usize>,
}

impl RegexRedactor {
    /// Create a redactor from an ordered, non-empty list of pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `pairs` is empty.
    pub fn new(pairs: Vec<Pair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(Error::configuration("regex pairs must not be empty"));
        }

        Ok(Self {
            pairs,
            max_substitutions: None,
        })
    }

    /// Cap the number of delegate substitutions performed for any one pair
    /// in a single call.
    #[must_use]
    pub fn with_max_substitutions(mut self, limit: usize) -> Self {
        self.max_substitutions = Some(limit);
        self
    }

    /// The pairs, in application order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    fn substitute_each(&self, pair: &Pair, input: String) -> Result<String> {
        let mut text = input;
        let mut previous: Option<usize> = None;
        let mut substitutions = 0usize;

        while let Some((range, count)) = first_match(pair.regex(), &text) {
            if let Some(previous) = previous {
                if count >= previous {
                    return Err(Error::RedactionLoop {
                        pattern: pair.pattern().to_string(),
                        previous,
                        current: count,
                    });
                }
            }

            if let Some(limit) = self.max_substitutions {
                if substitutions >= limit {
                    return Err(Error::SubstitutionLimit {
                        pattern: pair.pattern().to_string(),
                        limit,
                    });
                }
            }

            let replacement = pair
                .delegate()
                .redact(&text[range.clone()])
                .map_err(|source| Error::delegate_failure(pair.pattern(), source))?;

            trace!(
                start = range.start,
                matched_len = range.len(),
                replacement_len = replacement.len(),
                remaining = count - 1,
                "Substituted match"
            );

            text.replace_range(range, &replacement);
            substitutions += 1;
            previous = Some(count);
        }

        Ok(text)
    }
}

/// The leftmost match and the total number of non-overlapping matches.
fn first_match(regex: &Regex, haystack: &str) -> Option<(Range<usize>, usize)> {
    let mut matches = regex.find_iter(haystack);
    let first = matches.next()?.range();
    Some((first, 1 + matches.count()))
}

impl Redactor for RegexRedactor {
    fn redact(&self, input: &str) -> Result<String> {
        let mut text = input.to_string();

        for (index, pair) in self.pairs.iter().enumerate() {
            // A constant that matches its own pattern must go through the
            // rescan loop so the guard can reject it.
            let constant = pair
                .delegate()
                .constant_output()
                .filter(|replacement| !pair.regex().is_match(replacement));

            text = match constant {
                Some(replacement) => {
                    debug!(pair = index, "Replacing all matches with constant output");
                    pair.regex().replace_all(&text, replacement).into_owned()
                }
                None => {
                    debug!(pair = index, "Substituting matches via delegate");
                    self.substitute_each(pair, text)?
                }
            };
        }

        Ok(text)
    }
}
