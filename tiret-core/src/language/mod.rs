//! Language configuration, loading, and compiled rules

pub mod config;
mod loader;
mod rules;

pub use config::{HyphenStyle, LanguageConfig};
pub use loader::{get_rules, load_from_paths};
pub use rules::CompoundRules;
