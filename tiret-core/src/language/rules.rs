//! Runtime compound rules
//!
//! Bridges a parsed configuration to the compiled artifacts the scan path
//! uses: the compound table, the exception suppressor, and the hyphen
//! convention. Built once, then read-only; safe to share across threads.

use crate::compound::CompoundTable;
use crate::error::CoreError;
use crate::language::config::LanguageConfig;
use crate::resolver::{classify, Flag};
use crate::scanner::{HyphenConvention, Scanner};
use crate::suppression::Suppressor;
use crate::token::Token;

/// Compiled, immutable rules for one language
#[derive(Debug, Clone)]
pub struct CompoundRules {
    code: String,
    name: String,
    table: CompoundTable,
    suppressor: Suppressor,
    convention: HyphenConvention,
}

impl CompoundRules {
    /// Build rules from a configuration and an optional compound list
    ///
    /// The list text (the usual bulk source) is parsed first, then any
    /// inline `[compounds] entries` from the configuration.
    pub fn from_config(
        config: &LanguageConfig,
        compound_list: Option<&str>,
    ) -> Result<Self, CoreError> {
        config.validate().map_err(CoreError::Config)?;

        let mut list = String::new();
        if let Some(text) = compound_list {
            list.push_str(text);
            if !list.ends_with('\n') {
                list.push('\n');
            }
        }
        for entry in &config.compounds.entries {
            list.push_str(entry);
            list.push('\n');
        }

        let table = CompoundTable::from_list(&list)?;
        if table.is_empty() {
            return Err(CoreError::Config(
                "no compound entries configured".to_string(),
            ));
        }
        if table.max_words() > config.scanner.max_words {
            return Err(CoreError::Config(format!(
                "compound list contains an entry of {} words, scanner.max_words is {}",
                table.max_words(),
                config.scanner.max_words
            )));
        }

        let suppressor = Suppressor::compile(&config.pattern_specs())?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            table,
            suppressor,
            convention: config.scanner.hyphen_convention.into(),
        })
    }

    /// Check one tokenized sentence: scan, classify, filter
    ///
    /// Total for all inputs; odd tokens simply never match. All per-call
    /// state lives on this call's stack.
    pub fn check(&self, tokens: &[Token]) -> Vec<Flag> {
        let scanner = Scanner::new(&self.table, self.convention);
        let mut flags = Vec::new();
        for candidate in scanner.scan(tokens) {
            let Some(flag) = classify(&candidate, tokens, &self.table) else {
                continue;
            };
            if self.suppressor.suppresses(tokens, candidate.start) {
                continue;
            }
            flags.push(flag);
        }
        flags
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled compound table
    pub fn table(&self) -> &CompoundTable {
        &self.table
    }

    /// The compiled exception patterns
    pub fn suppressor(&self) -> &Suppressor {
        &self.suppressor
    }

    /// The configured hyphen convention
    pub fn convention(&self) -> HyphenConvention {
        self.convention
    }
}
