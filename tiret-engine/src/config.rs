//! Checker configuration and builder

use std::path::PathBuf;

/// Configuration for a [`crate::CompoundChecker`]
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Language code for embedded rules ("en")
    pub language: String,
    /// Custom language configuration file, overrides `language`
    pub config_path: Option<PathBuf>,
    /// Compound list file used with `config_path`
    pub compounds_path: Option<PathBuf>,
    /// Tokenizer keeps hyphens inside word tokens
    pub fuse_hyphens: bool,
    /// Check sentences in parallel when several are present
    pub parallel: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            config_path: None,
            compounds_path: None,
            fuse_hyphens: false,
            parallel: true,
        }
    }
}

impl CheckerConfig {
    /// Default configuration for a language code
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Start building a configuration
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::default()
    }
}

/// Fluent builder for [`CheckerConfig`]
#[derive(Debug, Clone, Default)]
pub struct CheckerConfigBuilder {
    config: Option<CheckerConfig>,
}

impl CheckerConfigBuilder {
    fn config(&mut self) -> &mut CheckerConfig {
        self.config.get_or_insert_with(CheckerConfig::default)
    }

    /// Set the language code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.config().language = code.into();
        self
    }

    /// Use a custom language configuration file
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config().config_path = Some(path.into());
        self
    }

    /// Use a custom compound list file
    pub fn compounds_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config().compounds_path = Some(path.into());
        self
    }

    /// Keep hyphens inside word tokens during tokenization
    pub fn fuse_hyphens(mut self, fuse: bool) -> Self {
        self.config().fuse_hyphens = fuse;
        self
    }

    /// Toggle sentence-level parallelism
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config().parallel = parallel;
        self
    }

    /// Finish building
    pub fn build(mut self) -> CheckerConfig {
        self.config.take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english_parallel() {
        let config = CheckerConfig::default();
        assert_eq!(config.language, "en");
        assert!(config.parallel);
        assert!(!config.fuse_hyphens);
    }

    #[test]
    fn builder_sets_fields() {
        let config = CheckerConfig::builder()
            .language("xx")
            .fuse_hyphens(true)
            .parallel(false)
            .build();
        assert_eq!(config.language, "xx");
        assert!(config.fuse_hyphens);
        assert!(!config.parallel);
    }
}
