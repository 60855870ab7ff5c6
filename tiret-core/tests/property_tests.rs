//! Property tests: scanning is total, deterministic, and stable

use proptest::prelude::*;
use tiret_core::{get_rules, Token, TokenKind};

fn arb_token() -> impl Strategy<Value = Token> {
    let kind = prop_oneof![
        Just(TokenKind::Word),
        Just(TokenKind::Punctuation),
        Just(TokenKind::Whitespace),
    ];
    (kind, "[a-zA-Z'\\-\u{00e9}]{0,8}").prop_map(|(kind, text)| Token::new(kind, text, 0))
}

proptest! {
    /// Scanning never fails, whatever the token content looks like.
    #[test]
    fn check_is_total(tokens in prop::collection::vec(arb_token(), 0..24)) {
        let rules = get_rules("en").unwrap();
        let _ = rules.check(&tokens);
    }

    /// Two runs over the same input produce identical flags.
    #[test]
    fn check_is_deterministic(tokens in prop::collection::vec(arb_token(), 0..24)) {
        let rules = get_rules("en").unwrap();
        prop_assert_eq!(rules.check(&tokens), rules.check(&tokens));
    }

    /// Flags never overlap and come out in left-to-right order.
    #[test]
    fn flags_are_ordered_and_disjoint(words in prop::collection::vec("[a-z]{1,10}", 0..16)) {
        let rules = get_rules("en").unwrap();
        let mut tokens = Vec::new();
        let mut offset = 0;
        for (i, w) in words.iter().enumerate() {
            if i > 0 {
                tokens.push(Token::whitespace(" ", offset));
                offset += 1;
            }
            tokens.push(Token::word(w.clone(), offset));
            offset += w.chars().count();
        }
        let flags = rules.check(&tokens);
        for pair in flags.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for flag in &flags {
            prop_assert!(flag.start < flag.end);
            prop_assert!(flag.end <= tokens.len());
            prop_assert!(!flag.suggestions.is_empty());
        }
    }
}
