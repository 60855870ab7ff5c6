//! Candidate classification
//!
//! Decides whether a matched span is actually misspelled. A candidate whose
//! written category is in the entry's acceptable set is correct usage and
//! yields nothing; anything else becomes a flag carrying the message kind and
//! the acceptable surfaces as suggestions.

use core::fmt;

use crate::compound::{CompoundTable, Spelling};
use crate::scanner::MatchCandidate;
use crate::token::Token;

/// Which correction message applies to a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Only the hyphenated spelling is correct
    Hyphen,
    /// Only the solid spelling is correct
    Solid,
    /// Hyphenated and solid are both correct, separate words are not
    HyphenOrSolid,
}

impl FlagKind {
    /// Human-readable message for this kind
    pub fn message(&self) -> &'static str {
        match self {
            FlagKind::Hyphen => "This word is normally spelled with hyphen.",
            FlagKind::Solid => "This word is normally spelled as one.",
            FlagKind::HyphenOrSolid => {
                "This expression is normally spelled as one or with hyphen."
            }
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Hyphen => write!(f, "hyphen"),
            FlagKind::Solid => write!(f, "solid"),
            FlagKind::HyphenOrSolid => write!(f, "hyphen-or-solid"),
        }
    }
}

/// A confirmed misspelling with suggested corrections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// First token index of the flagged span
    pub start: usize,
    /// One past the last token index of the flagged span
    pub end: usize,
    /// Message category
    pub kind: FlagKind,
    /// Acceptable surfaces, preferred variant first
    pub suggestions: Vec<String>,
}

/// Classify a candidate against its entry; `None` means correct usage
pub fn classify(
    candidate: &MatchCandidate,
    tokens: &[Token],
    table: &CompoundTable,
) -> Option<Flag> {
    let entry = table.entry(candidate.entry);
    if entry.acceptable.contains(&candidate.spelling) {
        return None;
    }

    let wants_hyphen = entry.acceptable.contains(&Spelling::Hyphenated);
    let wants_solid = entry.acceptable.contains(&Spelling::Solid);
    let kind = match (wants_hyphen, wants_solid) {
        (true, true) => FlagKind::HyphenOrSolid,
        (true, false) => FlagKind::Hyphen,
        // The parser guarantees at least one acceptable category.
        _ => FlagKind::Solid,
    };

    // Keep a capitalized span capitalized in the suggestions, unless the
    // first word is pinned to an exact case.
    let capitalize = !entry.case_sensitive[0]
        && tokens[candidate.start]
            .text
            .chars()
            .next()
            .is_some_and(char::is_uppercase);

    let mut suggestions: Vec<String> = Vec::new();
    for variant in entry.acceptable_variants() {
        let surface = if capitalize {
            capitalize_first(&variant.surface)
        } else {
            variant.surface.clone()
        };
        if !suggestions.contains(&surface) {
            suggestions.push(surface);
        }
    }

    Some(Flag {
        start: candidate.start,
        end: candidate.end,
        kind,
        suggestions,
    })
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{HyphenConvention, Scanner};

    fn table() -> CompoundTable {
        CompoundTable::from_list(
            "part time/part-time\n\
             note book/notebook\n\
             good bye/good-bye/goodbye\n\
             CD ROM/CD-ROM\n",
        )
        .unwrap()
    }

    fn toks(words: &[&str]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut offset = 0;
        for (i, w) in words.iter().enumerate() {
            if i > 0 {
                out.push(Token::whitespace(" ", offset));
                offset += 1;
            }
            out.push(Token::word(*w, offset));
            offset += w.chars().count();
        }
        out
    }

    fn first_flag(table: &CompoundTable, tokens: &[Token]) -> Option<Flag> {
        let scanner = Scanner::new(table, HyphenConvention::Auto);
        let candidates = scanner.scan(tokens);
        assert_eq!(candidates.len(), 1, "expected one candidate");
        classify(&candidates[0], tokens, table)
    }

    #[test]
    fn open_form_of_hyphenated_compound_is_flagged() {
        let table = table();
        let tokens = toks(&["part", "time"]);
        let flag = first_flag(&table, &tokens).unwrap();
        assert_eq!(flag.kind, FlagKind::Hyphen);
        assert_eq!(flag.kind.message(), "This word is normally spelled with hyphen.");
        assert_eq!(flag.suggestions, ["part-time"]);
    }

    #[test]
    fn acceptable_spelling_is_not_flagged() {
        let table = table();
        let tokens = vec![Token::word("part-time", 0)];
        assert!(first_flag(&table, &tokens).is_none());
        let tokens = toks(&["notebook"]);
        assert!(first_flag(&table, &tokens).is_none());
    }

    #[test]
    fn wrong_hyphenation_of_solid_compound_suggests_solid() {
        let table = table();
        let tokens = vec![
            Token::word("note", 0),
            Token::punctuation("-", 4),
            Token::word("book", 5),
        ];
        let flag = first_flag(&table, &tokens).unwrap();
        assert_eq!(flag.kind, FlagKind::Solid);
        assert_eq!(flag.suggestions, ["notebook"]);
    }

    #[test]
    fn both_acceptable_yields_combined_message_and_all_suggestions() {
        let table = table();
        let tokens = toks(&["good", "bye"]);
        let flag = first_flag(&table, &tokens).unwrap();
        assert_eq!(flag.kind, FlagKind::HyphenOrSolid);
        assert_eq!(flag.suggestions, ["good-bye", "goodbye"]);
    }

    #[test]
    fn capitalized_span_capitalizes_suggestions() {
        let table = table();
        let tokens = toks(&["Part", "time"]);
        let flag = first_flag(&table, &tokens).unwrap();
        assert_eq!(flag.suggestions, ["Part-time"]);
    }

    #[test]
    fn case_pinned_first_word_keeps_source_casing() {
        let table = table();
        let tokens = toks(&["CD", "ROM"]);
        let flag = first_flag(&table, &tokens).unwrap();
        assert_eq!(flag.suggestions, ["CD-ROM"]);
    }

    #[test]
    fn kind_display_is_stable() {
        assert_eq!(FlagKind::Hyphen.to_string(), "hyphen");
        assert_eq!(FlagKind::Solid.to_string(), "solid");
        assert_eq!(FlagKind::HyphenOrSolid.to_string(), "hyphen-or-solid");
    }
}
