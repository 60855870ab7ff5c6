//! Token input types for the compound scanner
//!
//! Tokenization itself happens upstream (tiret-engine ships a plain word
//! tokenizer, other callers bring their own). The scanner only needs the
//! token text, its precomputed lowercase form, and a coarse kind.

use core::fmt;

/// Coarse classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Alphanumeric word content
    Word,
    /// Punctuation or symbol, one token per character run
    Punctuation,
    /// Whitespace run, excluded from span content
    Whitespace,
}

/// A sentence token as seen by the scanner
///
/// Tokens are read-only input. The `lower` form is computed once at
/// construction so the scan loop never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text as written
    pub text: String,
    /// Lowercase form used for case-insensitive lookup
    pub lower: String,
    /// Coarse token kind
    pub kind: TokenKind,
    /// Character offset of the token within its sentence
    pub offset: usize,
}

impl Token {
    /// Create a token of the given kind
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            text,
            lower,
            kind,
            offset,
        }
    }

    /// Create a word token
    pub fn word(text: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Word, text, offset)
    }

    /// Create a punctuation token
    pub fn punctuation(text: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Punctuation, text, offset)
    }

    /// Create a whitespace token
    pub fn whitespace(text: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Whitespace, text, offset)
    }

    /// Whether this token is word content
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Whether this token is a whitespace run
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whether this token is a bare hyphen joining two words
    #[inline]
    pub fn is_hyphen(&self) -> bool {
        self.kind == TokenKind::Punctuation && matches!(self.text.as_str(), "-" | "\u{2010}")
    }

    /// Length of the token in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
