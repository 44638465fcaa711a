//! Built-in redaction patterns.
//!
//! Reusable pattern sources for common kinds of sensitive text. They are
//! plain strings so they can be combined with any delegate via
//! [`Pair::new`](super::Pair::new) or referenced by name from configuration.

/// An HTTP authorization header line.
///
/// Group 1 captures the header name and separator, so a replacement of
/// `${1}[redacted]` keeps the header name and hides the credentials.
pub const AUTH_HEADER_PATTERN: &str = r"(?i)(Authorization[\s]*:[\s]*).*";

/// A US Social Security Number, with or without separating hyphens.
pub const SSN_PATTERN: &str = r"(\d{3}-?\d{2}-?\d{4})";

/// A named built-in pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinPattern {
    /// Name used to reference the pattern from configuration.
    pub name: &'static str,

    /// Description of what this pattern matches.
    pub description: &'static str,

    /// The regex source.
    pub pattern: &'static str,
}

const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "auth_header",
        description: "HTTP Authorization header values",
        pattern: AUTH_HEADER_PATTERN,
    },
    BuiltinPattern {
        name: "ssn",
        description: "US Social Security Numbers, hyphenated or not",
        pattern: SSN_PATTERN,
    },
    BuiltinPattern {
        name: "bearer_token",
        description: "Bearer authentication tokens",
        pattern: r"(?i)bearer\s+[a-zA-Z0-9_.=-]+",
    },
    BuiltinPattern {
        name: "aws_key",
        description: "AWS access key IDs",
        pattern: r"(AKIA|ABIA|ACCA|ASIA)[A-Z0-9]{16}",
    },
    BuiltinPattern {
        name: "github_token",
        description: "GitHub personal access and app tokens",
        pattern: r"(ghp_|gho_|ghu_|ghs_|ghr_)[a-zA-Z0-9]{36}",
    },
    BuiltinPattern {
        name: "private_key",
        description: "PEM private key headers",
        pattern: r"-----BEGIN (?:RSA |EC |DSA )?PRIVATE KEY-----",
    },
];

/// All built-in patterns, in a stable order.
#[must_use]
pub fn builtin_patterns() -> &'static [BuiltinPattern] {
    BUILTIN_PATTERNS
}

/// Look up a built-in pattern by name.
#[must_use]
pub fn builtin_pattern(name: &str) -> Option<&'static BuiltinPattern> {
    BUILTIN_PATTERNS.iter().find(|p| p.name == name)
}
