//! Diagnostics for the `redact` binary.
//!
//! The library only emits `tracing` events (pair and step indices, match
//! counts, never matched text). Redacted output owns stdout, so the
//! subscriber installed here writes to stderr.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// How much the binary reports about its own work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Per-pair and per-step decisions (`-v`).
    Verbose,
    /// Every substitution (`-vv` and beyond).
    Trace,
}

impl Verbosity {
    /// Map `-q` and repeated `-v` flags to a verbosity. Quiet wins.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// The most detailed level let through.
    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// Filter directive limiting output to this crate at [`Self::level`].
    #[must_use]
    pub fn directive(self) -> String {
        format!("redact={}", self.level())
    }
}

/// A valid `RUST_LOG` value wins; anything else falls back to `verbosity`.
fn build_filter(rust_log: Option<&str>, verbosity: Verbosity) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.directive()))
}

/// Install the stderr subscriber for the binary.
///
/// `RUST_LOG` overrides `verbosity` when set. Calling this again after a
/// subscriber is installed has no effect.
///
/// ```no_run
/// use redact::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(rust_log.as_deref(), verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Trace-level logging through the test writer.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(Verbosity::Trace.directive())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Trace);
    }

    #[test]
    fn test_levels_widen_with_verbosity() {
        assert!(Verbosity::Quiet.level() < Verbosity::Normal.level());
        assert!(Verbosity::Normal.level() < Verbosity::Verbose.level());
        assert!(Verbosity::Verbose.level() < Verbosity::Trace.level());
    }

    #[test]
    fn test_directive_targets_crate() {
        assert_eq!(Verbosity::Quiet.directive(), "redact=error");
        assert_eq!(Verbosity::default().directive(), "redact=info");
        assert_eq!(Verbosity::Trace.directive(), "redact=trace");
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        let filter = build_filter(Some("redact=trace"), Verbosity::Quiet);
        assert_eq!(filter.to_string(), "redact=trace");
    }

    #[test]
    fn test_missing_or_invalid_rust_log_falls_back() {
        let filter = build_filter(None, Verbosity::Verbose);
        assert_eq!(filter.to_string(), "redact=debug");

        let filter = build_filter(Some("redact=loudest"), Verbosity::Verbose);
        assert_eq!(filter.to_string(), "redact=debug");
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
        init_test_logging();
    }
}
