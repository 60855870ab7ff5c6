//! Compound spelling detection engine
//!
//! Detects compounds written as separate words (or with wrong hyphenation)
//! when a canonical hyphenated or solid spelling exists, e.g. "part time"
//! where "part-time" is expected. The engine consumes tokenized sentences
//! and produces flagged spans with suggested corrections; tokenization and
//! sentence segmentation happen upstream.
//!
//! Everything is built once at load time; the compound table and the
//! exception patterns are immutable afterwards and safe to share across
//! threads without locking.
//!
//! # Example
//!
//! ```rust
//! use tiret_core::{get_rules, Token};
//!
//! let rules = get_rules("en").unwrap();
//! let tokens = vec![
//!     Token::word("part", 0),
//!     Token::whitespace(" ", 4),
//!     Token::word("time", 5),
//! ];
//! let flags = rules.check(&tokens);
//! assert_eq!(flags.len(), 1);
//! assert_eq!(flags[0].suggestions, ["part-time"]);
//! ```

#![warn(missing_docs)]

pub mod compound;
pub mod error;
pub mod language;
pub mod resolver;
pub mod scanner;
pub mod suppression;
pub mod token;

pub use compound::{CompoundEntry, CompoundTable, Spelling, Variant};
pub use error::{CoreError, Result};
pub use language::{get_rules, load_from_paths, CompoundRules, HyphenStyle, LanguageConfig};
pub use resolver::{classify, Flag, FlagKind};
pub use scanner::{HyphenConvention, MatchCandidate, Scanner};
pub use suppression::{MatcherSpec, PatternSpec, Suppressor};
pub use token::{Token, TokenKind};
