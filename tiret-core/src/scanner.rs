//! Greedy leftmost-longest compound scanner
//!
//! Walks a tokenized sentence left to right. At each word token the table is
//! consulted; candidate entries are tried longest first, and the first
//! variant-length success consumes its span. Matched spans are never
//! re-entered, so output candidates are non-overlapping and deterministic.

use crate::compound::{CompoundTable, Spelling};
use crate::token::Token;

/// How the upstream tokenizer treats hyphens
///
/// Some tokenizers emit `-` as its own token between words, others keep it
/// inside a single fused token. `Auto` accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HyphenConvention {
    /// Hyphens arrive as separate punctuation tokens
    Separate,
    /// Hyphens stay inside word tokens ("part-time" is one token)
    Fused,
    /// Accept either convention
    #[default]
    Auto,
}

/// A tentative compound match, pending classification and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    /// First token index of the span
    pub start: usize,
    /// One past the last token index of the span
    pub end: usize,
    /// Index of the matched entry in the table
    pub entry: usize,
    /// Spelling category actually written in the sentence
    pub spelling: Spelling,
}

/// Separator style seen between matched words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joiner {
    Space,
    Hyphen,
}

/// Compound scanner over one table
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    table: &'a CompoundTable,
    convention: HyphenConvention,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for a table and tokenizer convention
    pub fn new(table: &'a CompoundTable, convention: HyphenConvention) -> Self {
        Self { table, convention }
    }

    /// Scan a tokenized sentence, producing non-overlapping candidates in
    /// left-to-right order
    pub fn scan(&self, tokens: &[Token]) -> Vec<MatchCandidate> {
        let mut candidates = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if !tokens[i].is_word() {
                i += 1;
                continue;
            }
            match self.match_at(tokens, i) {
                Some(candidate) => {
                    i = candidate.end;
                    candidates.push(candidate);
                }
                None => i += 1,
            }
        }
        candidates
    }

    /// Longest match starting at word token `i`, if any
    fn match_at(&self, tokens: &[Token], i: usize) -> Option<MatchCandidate> {
        // Multi-token sequences span more words than any fused token can,
        // so they are tried first.
        for &idx in self.table.lookup(&tokens[i].lower) {
            if let Some((end, spelling)) = self.match_words(tokens, i, idx) {
                return Some(MatchCandidate {
                    start: i,
                    end,
                    entry: idx,
                    spelling,
                });
            }
        }

        if let Some((idx, spelling)) = self.table.lookup_fused(&tokens[i].lower) {
            if spelling == Spelling::Hyphenated && self.convention == HyphenConvention::Separate {
                return None;
            }
            let entry = self.table.entry(idx);
            if entry.fused_matches(&tokens[i].text, spelling) {
                return Some(MatchCandidate {
                    start: i,
                    end: i + 1,
                    entry: idx,
                    spelling,
                });
            }
        }

        None
    }

    /// Match an entry's word sequence against tokens starting at `start`
    ///
    /// Words must be joined uniformly: all by whitespace (Open) or all by
    /// bare hyphen tokens (Hyphenated). Returns the exclusive end index and
    /// the written category.
    fn match_words(&self, tokens: &[Token], start: usize, idx: usize) -> Option<(usize, Spelling)> {
        let entry = self.table.entry(idx);
        if !entry.word_matches(0, &tokens[start].text, &tokens[start].lower) {
            return None;
        }

        let mut joiner: Option<Joiner> = None;
        let mut last_word = start;
        for j in 1..entry.word_count() {
            let mut k = last_word + 1;
            let this_joiner = if k < tokens.len() && tokens[k].is_hyphen() {
                k += 1;
                Joiner::Hyphen
            } else {
                let ws_start = k;
                while k < tokens.len() && tokens[k].is_whitespace() {
                    k += 1;
                }
                if k == ws_start {
                    return None;
                }
                Joiner::Space
            };
            if k >= tokens.len() || !tokens[k].is_word() {
                return None;
            }
            match joiner {
                None => joiner = Some(this_joiner),
                Some(seen) if seen != this_joiner => return None,
                Some(_) => {}
            }
            if !entry.word_matches(j, &tokens[k].text, &tokens[k].lower) {
                return None;
            }
            last_word = k;
        }

        let spelling = match joiner {
            Some(Joiner::Hyphen) => Spelling::Hyphenated,
            _ => Spelling::Open,
        };
        if spelling == Spelling::Hyphenated && self.convention == HyphenConvention::Fused {
            return None;
        }
        Some((last_word + 1, spelling))
    }
}
