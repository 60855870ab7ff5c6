//! Application orchestration for compound spelling checking
//!
//! This crate wires the tiret-core matching engine into an end-to-end
//! checker: sentence splitting, tokenization, per-sentence scanning (in
//! parallel when the `parallel` feature is on), and output positioned as
//! character offsets in the original text.
//!
//! # Example
//!
//! ```rust
//! use tiret_engine::CompoundChecker;
//!
//! let checker = CompoundChecker::new().unwrap();
//! let output = checker.check_text("I have a part time job.").unwrap();
//! assert_eq!(output.metadata.flags, 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod processor;
pub mod tokenizer;

// Re-export key types
pub use config::{CheckerConfig, CheckerConfigBuilder};
pub use error::{ApiError, ApiResult, EngineError, Result};
pub use input::Input;
pub use processor::{CompoundChecker, FlagReport, Metadata, Output, SentenceReport};
pub use tokenizer::{split_sentences, SentenceSpan, Tokenizer};

// Re-export from core for convenience
pub use tiret_core::{CompoundRules, Flag, FlagKind, Token, TokenKind};
