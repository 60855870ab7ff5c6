//! Plain word tokenizer and sentence splitter
//!
//! Callers with a real NLP pipeline should tokenize upstream and use
//! `CompoundChecker::check_tokens` directly; this module exists so text can
//! be checked end to end without one. The sentence splitter is deliberately
//! naive: terminal punctuation followed by whitespace ends a sentence.

use tiret_core::Token;

/// Word tokenizer producing the token stream the scanner expects
///
/// Words are maximal alphanumeric runs. Whitespace runs collapse into one
/// token; every other character is a single punctuation token. With
/// `fuse_hyphens`, a hyphen between alphanumerics stays inside the word
/// token ("part-time" comes out as one token).
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    fuse_hyphens: bool,
}

impl Tokenizer {
    /// Tokenizer emitting hyphens as separate tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep hyphens inside word tokens
    pub fn fuse_hyphens(mut self, fuse: bool) -> Self {
        self.fuse_hyphens = fuse;
        self
    }

    /// Tokenize one sentence; offsets are character positions
    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            if ch.is_alphanumeric() {
                let start = i;
                while i < chars.len() {
                    let c = chars[i];
                    if c.is_alphanumeric() {
                        i += 1;
                    } else if self.fuse_hyphens
                        && c == '-'
                        && i + 1 < chars.len()
                        && chars[i + 1].is_alphanumeric()
                    {
                        i += 1;
                    } else {
                        break;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                tokens.push(Token::word(text, start));
            } else if ch.is_whitespace() {
                let start = i;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                tokens.push(Token::whitespace(text, start));
            } else {
                tokens.push(Token::punctuation(ch.to_string(), i));
                i += 1;
            }
        }
        tokens
    }
}

/// One sentence with its character offset in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Character offset of the sentence start
    pub offset: usize,
    /// Sentence text including its terminator
    pub text: String,
}

/// Split text into sentences at terminal punctuation followed by whitespace
pub fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        if matches!(chars[i], '.' | '!' | '?') {
            // Consume the terminator run, e.g. "?!" or "...".
            while i < chars.len() && matches!(chars[i], '.' | '!' | '?') {
                i += 1;
            }
            if i >= chars.len() || chars[i].is_whitespace() {
                push_sentence(&chars, start, i, &mut sentences);
                start = i;
            }
        } else {
            i += 1;
        }
    }
    push_sentence(&chars, start, chars.len(), &mut sentences);
    sentences
}

fn push_sentence(chars: &[char], start: usize, end: usize, out: &mut Vec<SentenceSpan>) {
    let mut begin = start;
    while begin < end && chars[begin].is_whitespace() {
        begin += 1;
    }
    if begin == end {
        return;
    }
    out.push(SentenceSpan {
        offset: begin,
        text: chars[begin..end].iter().collect(),
    });
}
