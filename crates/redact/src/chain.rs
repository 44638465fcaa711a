//! Sequential composition of redactors.

use tracing::trace;

use crate::error::{Error, Result};
use crate::redactor::Redactor;

/// Runs a sequence of redactors, each on the previous one's output.
///
/// The first failing step aborts the chain with [`Error::ChainStep`]. An
/// empty chain returns its input unchanged.
#[derive(Debug, Default)]
pub struct Chain {
    redactors: Vec<Box<dyn Redactor>>,
}

impl Chain {
    /// Create a chain from redactors in application order.
    #[must_use]
    pub fn new(redactors: Vec<Box<dyn Redactor>>) -> Self {
        Self { redactors }
    }

    /// Append a redactor to the end of the chain.
    #[must_use]
    pub fn then(mut self, redactor: impl Redactor + 'static) -> Self {
        self.redactors.push(Box::new(redactor));
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.redactors.len()
    }

    /// Whether the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.redactors.is_empty()
    }
}

impl Redactor for Chain {
    fn redact(&self, input: &str) -> Result<String> {
        let mut text = input.to_string();
        for (index, redactor) in self.redactors.iter().enumerate() {
            trace!(step = index, "Running chain step");
            text = redactor
                .redact(&text)
                .map_err(|source| Error::chain_step(index, format!("{redactor:?}"), source))?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{BlackoutRedactor, SimpleRedactor, SubstringRedactor, UrlRedactor};

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = Chain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.redact("unchanged").unwrap(), "unchanged");
    }

    #[test]
    fn test_steps_run_in_order() {
        let chain = Chain::default()
            .then(SubstringRedactor::new("secret", "hidden"))
            .then(SubstringRedactor::new("hidden", "[gone]"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.redact("a secret here").unwrap(), "a [gone] here");

        let reversed = Chain::default()
            .then(SubstringRedactor::new("hidden", "[gone]"))
            .then(SubstringRedactor::new("secret", "hidden"));
        assert_eq!(reversed.redact("a secret here").unwrap(), "a hidden here");
    }

    #[test]
    fn test_boxed_constructor() {
        let chain = Chain::new(vec![
            Box::new(BlackoutRedactor::new("x")),
            Box::new(SubstringRedactor::new("xx", "y")),
        ]);
        assert_eq!(chain.redact("abcd e").unwrap(), "yy x");
    }

    #[test]
    fn test_failing_step_aborts() {
        let chain = Chain::default()
            .then(SubstringRedactor::new("string", "XXXXX"))
            .then(UrlRedactor::new("http"))
            .then(SimpleRedactor::new("never reached"));

        let err = chain.redact("this is a string").unwrap_err();
        match &err {
            Error::ChainStep {
                index, redactor, ..
            } => {
                assert_eq!(*index, 1);
                assert!(redactor.contains("UrlRedactor"));
            }
            other => panic!("Expected ChainStep, got {other:?}"),
        }
        assert!(matches!(err.root_cause(), Error::Parse { .. }));
    }

    #[test]
    fn test_chain_is_not_constant() {
        let chain = Chain::default().then(SimpleRedactor::new("x"));
        assert_eq!(chain.constant_output(), None);
    }
}
