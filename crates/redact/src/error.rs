//! Error types for redact.
//!
//! Every redactor reports failure through [`Error`]. Construction problems
//! surface from constructors; redaction problems surface from
//! [`Redactor::redact`](crate::Redactor::redact). Errors that wrap a nested
//! failure keep it as their [`source`](std::error::Error::source).

use thiserror::Error;

/// The main error type for redact operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Construction Errors ===
    /// A redactor was constructed with invalid arguments.
    #[error("invalid redactor configuration: {message}")]
    Configuration {
        /// Description of the invalid argument.
        message: String,
    },

    /// A regex pattern failed to compile.
    #[error("regex pattern {pattern:?} failed to compile: {source}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The underlying error.
        #[source]
        source: regex::Error,
    },

    // === Redaction Errors ===
    /// A delegate redactor failed while substituting a regex match.
    #[error("delegate redactor failed for pattern {pattern:?}: {source}")]
    DelegateFailure {
        /// Pattern whose match was being substituted.
        pattern: String,
        /// The delegate's error.
        #[source]
        source: Box<Error>,
    },

    /// The match count did not shrink after a substitution.
    ///
    /// The delegate's output matches its own pattern, so substituting would
    /// never terminate.
    #[error(
        "redaction loop detected for pattern {pattern:?}: \
         {current} matches after substitution, {previous} before"
    )]
    RedactionLoop {
        /// The offending pattern.
        pattern: String,
        /// Match count on the scan before the substitution.
        previous: usize,
        /// Match count on the scan after the substitution.
        current: usize,
    },

    /// More substitutions were attempted than the configured cap allows.
    #[error("substitution limit of {limit} exceeded for pattern {pattern:?}")]
    SubstitutionLimit {
        /// The pattern being processed.
        pattern: String,
        /// The configured cap.
        limit: usize,
    },

    /// A step of a chain failed.
    #[error("chain step {index} ({redactor}) failed: {source}")]
    ChainStep {
        /// Zero-based position of the failing step.
        index: usize,
        /// Debug description of the failing redactor.
        redactor: String,
        /// The step's error.
        #[source]
        source: Box<Error>,
    },

    /// Input could not be parsed as a URL.
    ///
    /// The input itself is deliberately left out of the message.
    #[error("failed to parse URL: {source}")]
    Parse {
        /// The underlying error.
        #[source]
        source: url::ParseError,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for redact operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Self::Parse { source }
    }
}

impl Error {
    /// Create a new construction-time configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a delegate's failure for the given pattern.
    #[must_use]
    pub fn delegate_failure(pattern: impl Into<String>, source: Error) -> Self {
        Self::DelegateFailure {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a chain step's failure.
    #[must_use]
    pub fn chain_step(index: usize, redactor: impl Into<String>, source: Error) -> Self {
        Self::ChainStep {
            index,
            redactor: redactor.into(),
            source: Box::new(source),
        }
    }

    /// Check if this error was raised while constructing a redactor.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::InvalidPattern { .. }
        )
    }

    /// Check if this error is a tripped loop guard.
    #[must_use]
    pub fn is_redaction_loop(&self) -> bool {
        matches!(self, Self::RedactionLoop { .. })
    }

    /// Follow `DelegateFailure` and `ChainStep` wrappers to the innermost error.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::DelegateFailure { source, .. } | Self::ChainStep { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}
