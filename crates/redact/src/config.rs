//! Configuration management for redact.
//!
//! This module describes a redaction pipeline declaratively and loads it with
//! figment from TOML config files, environment variables, and defaults.
//!
//! ```toml
//! [pipeline]
//! max_substitutions = 10000
//!
//! [[pipeline.steps]]
//! kind = "regex"
//!
//! [[pipeline.steps.pairs]]
//! builtin = "ssn"
//! delegate = { kind = "blackout", replacement = "#" }
//!
//! [[pipeline.steps]]
//! kind = "substring"
//! substring = "hunter2"
//! replacement = "*******"
//! ```

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::pattern::{builtin_pattern, Pair, RegexRedactor};
use crate::redactor::Redactor;
use crate::strategies::{
    BlackoutRedactor, MiddleMode, MiddleRedactor, SimpleRedactor, SubstringRedactor, UrlRedactor,
    DEFAULT_PREFIX_LENGTH, DEFAULT_REPLACEMENT_TEXT, DEFAULT_SUFFIX_LENGTH,
};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir holding the config file.
const CONFIG_DIR_NAME: &str = "redact";

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "REDACT_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `REDACT_`, nested with `__`)
/// 2. TOML config file at `~/.config/redact/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The redaction pipeline.
    pub pipeline: PipelineConfig,
}

/// An ordered list of redaction steps, run as a [`Chain`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Steps in application order.
    pub steps: Vec<StepConfig>,

    /// Cap on delegate substitutions per regex pair and call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_substitutions: Option<usize>,
}

/// One redactor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepConfig {
    /// Replace the whole input.
    Simple {
        /// Replacement text.
        replacement: String,
    },

    /// Black out every character of every word.
    Blackout {
        /// Token written per character.
        replacement: String,
    },

    /// Replace a literal substring.
    Substring {
        /// Text to look for.
        substring: String,
        /// Replacement text.
        replacement: String,
    },

    /// Keep a prefix and/or suffix, hide the middle.
    Middle {
        /// Which edges to reveal.
        #[serde(default)]
        mode: MiddleMode,
        /// Leading characters to reveal.
        #[serde(default = "default_prefix_length")]
        prefix_length: usize,
        /// Trailing characters to reveal.
        #[serde(default = "default_suffix_length")]
        suffix_length: usize,
        /// Replacement text.
        #[serde(default = "default_replacement_text")]
        replacement_text: String,
    },

    /// Hide URL credentials.
    Url {
        /// Replacement for passwords.
        password_replacement: String,
        /// Replacement for usernames; usernames are kept when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username_replacement: Option<String>,
    },

    /// Replace regex matches using nested redactors.
    Regex {
        /// Pattern/delegate pairs in application order.
        pairs: Vec<PairConfig>,
    },
}

/// A pattern, given inline or by built-in name, and its delegate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairConfig {
    /// Inline regex source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Name of a built-in pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<String>,

    /// Redactor applied to each match.
    pub delegate: StepConfig,
}

fn default_prefix_length() -> usize {
    DEFAULT_PREFIX_LENGTH
}

fn default_suffix_length() -> usize {
    DEFAULT_SUFFIX_LENGTH
}

fn default_replacement_text() -> String {
    DEFAULT_REPLACEMENT_TEXT.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            steps: vec![StepConfig::Regex {
                pairs: vec![
                    PairConfig {
                        pattern: None,
                        builtin: Some("auth_header".to_string()),
                        delegate: StepConfig::Simple {
                            replacement: "${1}[redacted]".to_string(),
                        },
                    },
                    PairConfig {
                        pattern: None,
                        builtin: Some("ssn".to_string()),
                        delegate: StepConfig::Simple {
                            replacement: "[redacted]".to_string(),
                        },
                    },
                ],
            }],
            max_substitutions: None,
        }
    }
}

impl StepConfig {
    /// The `kind` tag of this step.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Simple { .. } => "simple",
            Self::Blackout { .. } => "blackout",
            Self::Substring { .. } => "substring",
            Self::Middle { .. } => "middle",
            Self::Url { .. } => "url",
            Self::Regex { .. } => "regex",
        }
    }

    /// Construct the redactor this step describes.
    ///
    /// # Errors
    ///
    /// Returns the redactor's construction error, or
    /// [`Error::ConfigValidation`] for a pair naming no pattern, both kinds
    /// of pattern, or an unknown built-in.
    pub fn build(&self, max_substitutions: Option<usize>) -> Result<Box<dyn Redactor>> {
        let redactor: Box<dyn Redactor> = match self {
            Self::Simple { replacement } => Box::new(SimpleRedactor::new(replacement.as_str())),
            Self::Blackout { replacement } => {
                Box::new(BlackoutRedactor::new(replacement.as_str()))
            }
            Self::Substring {
                substring,
                replacement,
            } => Box::new(SubstringRedactor::new(
                substring.as_str(),
                replacement.as_str(),
            )),
            Self::Middle {
                mode,
                prefix_length,
                suffix_length,
                replacement_text,
            } => Box::new(
                MiddleRedactor::builder()
                    .mode(*mode)
                    .prefix_length(*prefix_length)
                    .suffix_length(*suffix_length)
                    .replacement_text(replacement_text.as_str())
                    .build()?,
            ),
            Self::Url {
                password_replacement,
                username_replacement,
            } => {
                let mut redactor = UrlRedactor::new(password_replacement.as_str());
                if let Some(username) = username_replacement {
                    redactor = redactor.with_username_replacement(username.as_str());
                }
                Box::new(redactor)
            }
            Self::Regex { pairs } => {
                let pairs = pairs
                    .iter()
                    .map(|pair| pair.build(max_substitutions))
                    .collect::<Result<Vec<_>>>()?;
                let mut redactor = RegexRedactor::new(pairs)?;
                if let Some(limit) = max_substitutions {
                    redactor = redactor.with_max_substitutions(limit);
                }
                Box::new(redactor)
            }
        };
        Ok(redactor)
    }
}

impl PairConfig {
    /// Resolve the pattern source, inline or built-in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] unless exactly one of `pattern`
    /// and `builtin` is set and any built-in name is known.
    pub fn resolve_pattern(&self) -> Result<&str> {
        match (&self.pattern, &self.builtin) {
            (Some(pattern), None) => Ok(pattern),
            (None, Some(name)) => builtin_pattern(name)
                .map(|builtin| builtin.pattern)
                .ok_or_else(|| Error::ConfigValidation {
                    message: format!("unknown builtin pattern: {name}"),
                }),
            (Some(_), Some(_)) => Err(Error::ConfigValidation {
                message: "regex pair sets both pattern and builtin".to_string(),
            }),
            (None, None) => Err(Error::ConfigValidation {
                message: "regex pair needs a pattern or a builtin".to_string(),
            }),
        }
    }

    fn build(&self, max_substitutions: Option<usize>) -> Result<Pair> {
        let delegate = self.delegate.build(max_substitutions)?;
        Pair::from_shared(self.resolve_pattern()?, delegate.into())
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `REDACT_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration by constructing every redactor it names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] naming the first step that fails
    /// to build.
    pub fn validate(&self) -> Result<()> {
        self.build_pipeline().map(|_| ())
    }

    /// Build the configured pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] naming the first step that fails
    /// to build.
    pub fn build_pipeline(&self) -> Result<Chain> {
        let max_substitutions = self.pipeline.max_substitutions;
        let redactors = self
            .pipeline
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                step.build(max_substitutions)
                    .map_err(|err| Error::ConfigValidation {
                        message: format!("pipeline step {index} ({}): {err}", step.kind()),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Chain::new(redactors))
    }
}
