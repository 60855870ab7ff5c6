//! Main compound checker and its output types

use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tiret_core::{get_rules, load_from_paths, CompoundRules, Flag, FlagKind, Token};

use crate::config::CheckerConfig;
use crate::error::ApiResult;
use crate::input::Input;
use crate::tokenizer::{split_sentences, SentenceSpan, Tokenizer};

/// Main entry point for compound spelling checking
///
/// Holds the shared read-only rules plus the tokenizer; one instance serves
/// any number of concurrent `check` calls.
#[derive(Debug)]
pub struct CompoundChecker {
    rules: Arc<CompoundRules>,
    tokenizer: Tokenizer,
    config: CheckerConfig,
}

/// Rich output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Per-sentence reports in input order
    pub reports: Vec<SentenceReport>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// All flags across sentences, in input order
    pub fn flags(&self) -> impl Iterator<Item = &FlagReport> {
        self.reports.iter().flat_map(|r| r.flags.iter())
    }

    /// Whether any sentence produced a flag
    pub fn has_flags(&self) -> bool {
        self.reports.iter().any(|r| !r.flags.is_empty())
    }
}

/// Flags found in one sentence
#[derive(Debug, Clone)]
pub struct SentenceReport {
    /// Character offset of the sentence in the input text
    pub offset: usize,
    /// Sentence text
    pub text: String,
    /// Flags in left-to-right order
    pub flags: Vec<FlagReport>,
}

/// One flagged span, positioned in the input text
#[derive(Debug, Clone)]
pub struct FlagReport {
    /// Character offset of the span start in the input text
    pub start: usize,
    /// Character offset one past the span end
    pub end: usize,
    /// The flagged surface text
    pub text: String,
    /// Message category
    pub kind: FlagKind,
    /// Human-readable message
    pub message: String,
    /// Suggested replacements, preferred first
    pub suggestions: Vec<String>,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct Metadata {
    /// Number of sentences checked
    pub sentences: usize,
    /// Number of flags produced
    pub flags: usize,
    /// Characters processed
    pub chars_processed: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl CompoundChecker {
    /// Checker with default configuration (embedded English)
    pub fn new() -> ApiResult<Self> {
        Self::with_config(CheckerConfig::default())
    }

    /// Checker for a specific embedded language
    pub fn with_language(code: &str) -> ApiResult<Self> {
        Self::with_config(CheckerConfig::new(code))
    }

    /// Checker with custom configuration
    pub fn with_config(config: CheckerConfig) -> ApiResult<Self> {
        let rules = match &config.config_path {
            Some(path) => load_from_paths(path, config.compounds_path.as_deref())?,
            None => get_rules(&config.language)?,
        };
        log::debug!(
            "loaded {} rules: {} compound entries, {} exception patterns",
            rules.code(),
            rules.table().len(),
            rules.suppressor().len()
        );
        let tokenizer = Tokenizer::new().fuse_hyphens(config.fuse_hyphens);
        Ok(Self {
            rules,
            tokenizer,
            config,
        })
    }

    /// Check an input end to end: split, tokenize, scan each sentence
    pub fn check(&self, input: Input) -> ApiResult<Output> {
        let start = Instant::now();
        let text = input.read()?;
        let sentences = split_sentences(&text);
        let sentence_count = sentences.len();

        let reports = self.check_sentences(sentences);

        let flags = reports.iter().map(|r| r.flags.len()).sum();
        Ok(Output {
            reports,
            metadata: Metadata {
                sentences: sentence_count,
                flags,
                chars_processed: text.chars().count(),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }

    /// Check a text string directly
    pub fn check_text(&self, text: &str) -> ApiResult<Output> {
        self.check(Input::from_text(text))
    }

    /// Check an already-tokenized sentence
    ///
    /// For callers with their own tokenization pipeline; flags carry token
    /// indices into the given slice.
    pub fn check_tokens(&self, tokens: &[Token]) -> Vec<Flag> {
        self.rules.check(tokens)
    }

    /// The loaded rules
    pub fn rules(&self) -> &Arc<CompoundRules> {
        &self.rules
    }

    /// The active configuration
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    fn check_sentences(&self, sentences: Vec<SentenceSpan>) -> Vec<SentenceReport> {
        #[cfg(feature = "parallel")]
        if self.config.parallel && sentences.len() > 1 {
            return sentences
                .par_iter()
                .map(|s| self.check_sentence(s))
                .collect();
        }
        sentences.iter().map(|s| self.check_sentence(s)).collect()
    }

    fn check_sentence(&self, sentence: &SentenceSpan) -> SentenceReport {
        let tokens = self.tokenizer.tokenize(&sentence.text);
        let flags = self
            .rules
            .check(&tokens)
            .into_iter()
            .map(|flag| self.position_flag(flag, &tokens, sentence))
            .collect();
        SentenceReport {
            offset: sentence.offset,
            text: sentence.text.clone(),
            flags,
        }
    }

    fn position_flag(&self, flag: Flag, tokens: &[Token], sentence: &SentenceSpan) -> FlagReport {
        let first = &tokens[flag.start];
        let last = &tokens[flag.end - 1];
        let text: String = tokens[flag.start..flag.end]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        FlagReport {
            start: sentence.offset + first.offset,
            end: sentence.offset + last.offset + last.len_chars(),
            text,
            kind: flag.kind,
            message: flag.kind.message().to_string(),
            suggestions: flag.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_part_time() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker.check_text("I have a part time job.").unwrap();
        assert_eq!(output.metadata.sentences, 1);
        assert_eq!(output.metadata.flags, 1);
        let flag = output.flags().next().unwrap();
        assert_eq!(flag.text, "part time");
        assert_eq!(flag.suggestions, ["part-time"]);
        // "I have a " is 9 characters.
        assert_eq!(flag.start, 9);
        assert_eq!(flag.end, 18);
    }

    #[test]
    fn offsets_span_multiple_sentences() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker
            .check_text("All good here. She folded the news paper.")
            .unwrap();
        assert_eq!(output.metadata.sentences, 2);
        let flag = output.flags().next().unwrap();
        assert_eq!(flag.text, "news paper");
        // Sentence two starts at 15; "She folded the " is 15 more.
        assert_eq!(flag.start, 30);
        assert_eq!(flag.end, 40);
    }

    #[test]
    fn clean_text_has_no_flags() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker
            .check_text("The notebook is on the shelf. It was a part-time effort.")
            .unwrap();
        assert!(!output.has_flags());
        assert_eq!(output.metadata.flags, 0);
    }

    #[test]
    fn unsupported_language_is_an_api_error() {
        let err = CompoundChecker::with_language("xx").unwrap_err();
        assert_eq!(err.to_string(), "language 'xx' not supported");
    }

    #[test]
    fn fused_tokenizer_still_catches_wrong_hyphenation() {
        let checker = CompoundChecker::with_config(
            CheckerConfig::builder().fuse_hyphens(true).build(),
        )
        .unwrap();
        let output = checker.check_text("It is written on the note-book.").unwrap();
        assert_eq!(output.metadata.flags, 1);
        let flag = output.flags().next().unwrap();
        assert_eq!(flag.suggestions, ["notebook"]);
    }
}
