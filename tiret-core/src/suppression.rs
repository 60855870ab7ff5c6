//! Exception patterns that suppress known non-compound usages
//!
//! A pattern is a short sequence of token matchers anchored relative to a
//! candidate's span start: anchor -1 aligns the first matcher on the token
//! immediately before the span. Whitespace tokens do not participate in
//! alignment. Patterns compile once; a candidate survives only if no pattern
//! matches around it.

use regex::Regex;

use crate::error::CoreError;
use crate::scanner::MatchCandidate;
use crate::token::Token;

/// Declarative form of one token matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherSpec {
    /// Literal token text, case-insensitive unless stated otherwise
    Literal {
        /// Token text to match
        text: String,
        /// Compare exactly instead of case-insensitively
        case_sensitive: bool,
    },
    /// Regular expression matched against the whole token text
    Regex(String),
}

impl MatcherSpec {
    /// Case-insensitive literal matcher
    pub fn literal(text: impl Into<String>) -> Self {
        MatcherSpec::Literal {
            text: text.into(),
            case_sensitive: false,
        }
    }

    /// Case-sensitive literal matcher
    pub fn literal_exact(text: impl Into<String>) -> Self {
        MatcherSpec::Literal {
            text: text.into(),
            case_sensitive: true,
        }
    }

    /// Regex matcher over the full token text
    pub fn regex(pattern: impl Into<String>) -> Self {
        MatcherSpec::Regex(pattern.into())
    }
}

/// Declarative form of one exception pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    /// Offset of the first matcher relative to the span start
    pub anchor: isize,
    /// Matchers aligned at consecutive non-whitespace tokens
    pub matchers: Vec<MatcherSpec>,
}

impl PatternSpec {
    /// Pattern with the given anchor and matchers
    pub fn new(anchor: isize, matchers: Vec<MatcherSpec>) -> Self {
        Self { anchor, matchers }
    }
}

/// One compiled matcher
#[derive(Debug, Clone)]
enum TokenMatcher {
    Literal { text: String, case_sensitive: bool },
    Regex(Regex),
}

impl TokenMatcher {
    fn matches(&self, token: &Token) -> bool {
        match self {
            TokenMatcher::Literal {
                text,
                case_sensitive: true,
            } => token.text == *text,
            TokenMatcher::Literal { text, .. } => token.lower == *text,
            TokenMatcher::Regex(re) => re.is_match(&token.text),
        }
    }
}

#[derive(Debug, Clone)]
struct ExceptionPattern {
    anchor: isize,
    matchers: Vec<TokenMatcher>,
}

/// Compiled exception pattern set
#[derive(Debug, Clone, Default)]
pub struct Suppressor {
    patterns: Vec<ExceptionPattern>,
}

impl Suppressor {
    /// Suppressor with no patterns; every candidate survives
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile pattern specs; fails with the offending pattern index
    pub fn compile(specs: &[PatternSpec]) -> Result<Self, CoreError> {
        let mut patterns = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let mut matchers = Vec::with_capacity(spec.matchers.len());
            for matcher in &spec.matchers {
                matchers.push(match matcher {
                    MatcherSpec::Literal {
                        text,
                        case_sensitive,
                    } => TokenMatcher::Literal {
                        text: if *case_sensitive {
                            text.clone()
                        } else {
                            text.to_lowercase()
                        },
                        case_sensitive: *case_sensitive,
                    },
                    MatcherSpec::Regex(pattern) => {
                        // Anchored so the token must match in full.
                        let re = Regex::new(&format!("^(?:{pattern})$"))
                            .map_err(|source| CoreError::InvalidPattern { index, source })?;
                        TokenMatcher::Regex(re)
                    }
                });
            }
            patterns.push(ExceptionPattern {
                anchor: spec.anchor,
                matchers,
            });
        }
        Ok(Self { patterns })
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are compiled
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches around a span starting at `span_start`
    pub fn suppresses(&self, tokens: &[Token], span_start: usize) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        // Alignment positions skip whitespace tokens.
        let visible: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_whitespace())
            .map(|(i, _)| i)
            .collect();
        let Some(span_pos) = visible.iter().position(|&i| i == span_start) else {
            return false;
        };

        'patterns: for pattern in &self.patterns {
            let base = span_pos as isize + pattern.anchor;
            for (k, matcher) in pattern.matchers.iter().enumerate() {
                let pos = base + k as isize;
                if pos < 0 || pos as usize >= visible.len() {
                    continue 'patterns;
                }
                if !matcher.matches(&tokens[visible[pos as usize]]) {
                    continue 'patterns;
                }
            }
            return true;
        }
        false
    }

    /// Drop candidates suppressed by any pattern
    pub fn filter(
        &self,
        candidates: Vec<MatchCandidate>,
        tokens: &[Token],
    ) -> Vec<MatchCandidate> {
        candidates
            .into_iter()
            .filter(|c| !self.suppresses(tokens, c.start))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The stock contraction guard: apostrophe immediately before "re"
    fn apostrophe_re() -> Suppressor {
        Suppressor::compile(&[PatternSpec::new(
            -1,
            vec![MatcherSpec::regex("['\u{00B4}\u{2019}]"), MatcherSpec::literal("re")],
        )])
        .unwrap()
    }

    #[test]
    fn contraction_is_suppressed() {
        let sup = apostrophe_re();
        let tokens = vec![
            Token::word("you", 0),
            Token::punctuation("'", 3),
            Token::word("re", 4),
            Token::whitespace(" ", 6),
            Token::word("entry", 7),
        ];
        assert!(sup.suppresses(&tokens, 2));
    }

    #[test]
    fn plain_re_is_not_suppressed() {
        let sup = apostrophe_re();
        let tokens = vec![
            Token::word("the", 0),
            Token::whitespace(" ", 3),
            Token::word("re", 4),
            Token::whitespace(" ", 6),
            Token::word("entry", 7),
        ];
        assert!(!sup.suppresses(&tokens, 2));
    }

    #[test]
    fn whitespace_does_not_shift_alignment() {
        let sup = Suppressor::compile(&[PatternSpec::new(-1, vec![MatcherSpec::literal("the")])])
            .unwrap();
        let tokens = vec![
            Token::word("the", 0),
            Token::whitespace("  ", 3),
            Token::word("note", 5),
        ];
        // Anchor -1 sees "the" across the whitespace token.
        assert!(sup.suppresses(&tokens, 2));
    }

    #[test]
    fn out_of_bounds_anchor_does_not_match() {
        let sup = Suppressor::compile(&[PatternSpec::new(-1, vec![MatcherSpec::literal("x")])])
            .unwrap();
        let tokens = vec![Token::word("re", 0)];
        assert!(!sup.suppresses(&tokens, 0));
    }

    #[test]
    fn literal_is_case_insensitive_by_default() {
        let sup = Suppressor::compile(&[PatternSpec::new(0, vec![MatcherSpec::literal("re")])])
            .unwrap();
        let tokens = vec![Token::word("Re", 0)];
        assert!(sup.suppresses(&tokens, 0));

        let exact =
            Suppressor::compile(&[PatternSpec::new(0, vec![MatcherSpec::literal_exact("re")])])
                .unwrap();
        assert!(!exact.suppresses(&tokens, 0));
    }

    #[test]
    fn regex_must_cover_whole_token() {
        let sup = Suppressor::compile(&[PatternSpec::new(0, vec![MatcherSpec::regex("re")])])
            .unwrap();
        assert!(sup.suppresses(&[Token::word("re", 0)], 0));
        assert!(!sup.suppresses(&[Token::word("rex", 0)], 0));
    }

    #[test]
    fn bad_regex_reports_pattern_index() {
        let err = Suppressor::compile(&[
            PatternSpec::new(0, vec![MatcherSpec::literal("fine")]),
            PatternSpec::new(0, vec![MatcherSpec::regex("(unclosed")]),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPattern { index: 1, .. }));
    }

    #[test]
    fn filter_keeps_unsuppressed_candidates() {
        use crate::compound::{CompoundTable, Spelling};

        let sup = apostrophe_re();
        let table = CompoundTable::from_list("re entry/re-entry\n").unwrap();
        let tokens = vec![
            Token::word("you", 0),
            Token::punctuation("'", 3),
            Token::word("re", 4),
            Token::whitespace(" ", 6),
            Token::word("entry", 7),
        ];
        let candidates = crate::scanner::Scanner::new(&table, Default::default()).scan(&tokens);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].spelling, Spelling::Open);
        assert!(sup.filter(candidates, &tokens).is_empty());

        let tokens = vec![
            Token::word("re", 0),
            Token::whitespace(" ", 2),
            Token::word("entry", 3),
        ];
        let candidates = crate::scanner::Scanner::new(&table, Default::default()).scan(&tokens);
        assert_eq!(sup.filter(candidates, &tokens).len(), 1);
    }

    #[test]
    fn empty_suppressor_keeps_everything() {
        let sup = Suppressor::empty();
        assert!(sup.is_empty());
        assert!(!sup.suppresses(&[Token::word("re", 0)], 0));
    }
}
