//! The common redactor contract.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// A component that turns text into a version with sensitive content obscured.
///
/// Implementations hold immutable configuration and no per-call state, so a
/// single instance can be shared across threads and called concurrently.
/// Strategies that cannot fail simply never return `Err`.
pub trait Redactor: fmt::Debug + Send + Sync {
    /// Redact `input`, returning the redacted text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be processed by this strategy or
    /// a nested redactor fails.
    fn redact(&self, input: &str) -> Result<String>;

    /// The fixed output of a redactor that ignores its input.
    ///
    /// Returns `Some` only when `redact` yields the same text for every
    /// input. The regex redactor uses this to replace all matches of a
    /// pattern in one pass instead of invoking the redactor per match.
    fn constant_output(&self) -> Option<&str> {
        None
    }
}

impl<R: Redactor + ?Sized> Redactor for &R {
    fn redact(&self, input: &str) -> Result<String> {
        (**self).redact(input)
    }

    fn constant_output(&self) -> Option<&str> {
        (**self).constant_output()
    }
}

impl<R: Redactor + ?Sized> Redactor for Box<R> {
    fn redact(&self, input: &str) -> Result<String> {
        (**self).redact(input)
    }

    fn constant_output(&self) -> Option<&str> {
        (**self).constant_output()
    }
}

impl<R: Redactor + ?Sized> Redactor for Arc<R> {
    fn redact(&self, input: &str) -> Result<String> {
        (**self).redact(input)
    }

    fn constant_output(&self) -> Option<&str> {
        (**self).constant_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{BlackoutRedactor, SimpleRedactor};

    #[test]
    fn test_trait_objects_forward() {
        let boxed: Box<dyn Redactor> = Box::new(SimpleRedactor::new("X"));
        assert_eq!(boxed.redact("anything").unwrap(), "X");
        assert_eq!(boxed.constant_output(), Some("X"));

        let shared: Arc<dyn Redactor> = Arc::new(BlackoutRedactor::new("*"));
        assert_eq!(shared.redact("ab c").unwrap(), "** *");
        assert_eq!(shared.constant_output(), None);
    }

    #[test]
    fn test_reference_forwards() {
        let simple = SimpleRedactor::new("[gone]");
        let by_ref = &simple;
        assert_eq!(Redactor::redact(&by_ref, "x").unwrap(), "[gone]");
    }

    #[test]
    fn test_redactors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Redactor>();
    }
}
