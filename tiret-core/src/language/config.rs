//! Configuration structures and validation
//!
//! This module defines the TOML schema for a language configuration: where
//! the compound list comes from, how the tokenizer treats hyphens, and which
//! exception patterns guard against false positives.

use serde::{Deserialize, Serialize};

use crate::scanner::HyphenConvention;
use crate::suppression::{MatcherSpec, PatternSpec};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language identity
    pub metadata: Metadata,
    /// Scanner behavior
    #[serde(default)]
    pub scanner: ScannerSection,
    /// Inline compound entries (the bulk usually comes from a list resource)
    #[serde(default)]
    pub compounds: CompoundsSection,
    /// Exception patterns suppressing known non-compound usages
    #[serde(default)]
    pub exceptions: ExceptionsSection,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short language code, e.g. "en"
    pub code: String,
    /// Display name
    pub name: String,
}

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerSection {
    /// How the upstream tokenizer treats hyphens
    #[serde(default)]
    pub hyphen_convention: HyphenStyle,
    /// Upper bound on words per compound entry
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            hyphen_convention: HyphenStyle::default(),
            max_words: default_max_words(),
        }
    }
}

/// Serialized form of the hyphen convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenStyle {
    /// Hyphens arrive as separate tokens
    Separate,
    /// Hyphens stay inside word tokens
    Fused,
    /// Accept both conventions
    #[default]
    Auto,
}

impl From<HyphenStyle> for HyphenConvention {
    fn from(style: HyphenStyle) -> Self {
        match style {
            HyphenStyle::Separate => HyphenConvention::Separate,
            HyphenStyle::Fused => HyphenConvention::Fused,
            HyphenStyle::Auto => HyphenConvention::Auto,
        }
    }
}

/// Inline compound entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompoundsSection {
    /// Entries in list-line syntax, e.g. "part time/part-time"
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Exception pattern configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceptionsSection {
    /// Patterns in declaration order
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

/// One configured exception pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Offset of the first matcher relative to the span start
    #[serde(default)]
    pub anchor: isize,
    /// Matcher sequence; each matcher is a literal or a regex
    pub matchers: Vec<MatcherEntry>,
}

/// One configured token matcher
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatcherEntry {
    /// Literal token text
    pub literal: Option<String>,
    /// Regular expression over the whole token text
    pub regex: Option<String>,
    /// Exact comparison for literal matchers
    #[serde(default)]
    pub case_sensitive: bool,
}

fn default_max_words() -> usize {
    4
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, crate::error::CoreError> {
        let config: LanguageConfig =
            toml::from_str(text).map_err(|e| crate::error::CoreError::Config(e.to_string()))?;
        config
            .validate()
            .map_err(crate::error::CoreError::Config)?;
        Ok(config)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if self.scanner.max_words < 2 {
            return Err("scanner.max_words must be at least 2".to_string());
        }
        for (i, pattern) in self.exceptions.patterns.iter().enumerate() {
            if pattern.matchers.is_empty() {
                return Err(format!("exception pattern {i} has no matchers"));
            }
            for matcher in &pattern.matchers {
                match (&matcher.literal, &matcher.regex) {
                    (Some(_), Some(_)) => {
                        return Err(format!(
                            "exception pattern {i} mixes literal and regex in one matcher"
                        ));
                    }
                    (None, None) => {
                        return Err(format!(
                            "exception pattern {i} has a matcher with neither literal nor regex"
                        ));
                    }
                    (None, Some(_)) if matcher.case_sensitive => {
                        return Err(format!(
                            "exception pattern {i}: case_sensitive applies to literal matchers only"
                        ));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Lower the configured patterns into compilable specs
    ///
    /// Call after `validate`; matchers are known to be well-formed here.
    pub(crate) fn pattern_specs(&self) -> Vec<PatternSpec> {
        self.exceptions
            .patterns
            .iter()
            .map(|pattern| {
                let matchers = pattern
                    .matchers
                    .iter()
                    .map(|m| match (&m.literal, &m.regex) {
                        (Some(text), _) => MatcherSpec::Literal {
                            text: text.clone(),
                            case_sensitive: m.case_sensitive,
                        },
                        (_, Some(re)) => MatcherSpec::Regex(re.clone()),
                        _ => unreachable!("validated matcher"),
                    })
                    .collect();
                PatternSpec::new(pattern.anchor, matchers)
            })
            .collect()
    }
}
