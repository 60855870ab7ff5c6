//! Language rules loader
//!
//! Manages embedded and file-based language rules. Embedded rules are built
//! at most once per process behind a `OnceLock`, then shared read-only.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::CoreError;
use crate::language::config::LanguageConfig;
use crate::language::rules::CompoundRules;

/// Embedded language rules
static EMBEDDED: OnceLock<HashMap<String, Arc<CompoundRules>>> = OnceLock::new();

/// Load embedded language rules by code
pub fn get_rules(code: &str) -> Result<Arc<CompoundRules>, CoreError> {
    // Initialize embedded languages on first access.
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map: HashMap<String, Arc<CompoundRules>> = HashMap::new();

        // Load English
        match load_embedded(
            include_str!("../../configs/languages/english.toml"),
            include_str!("../../resources/en/compounds.txt"),
        ) {
            Ok(rules) => {
                map.insert("en".to_string(), rules.clone());
                map.insert("english".to_string(), rules);
            }
            Err(e) => {
                eprintln!("Warning: failed to load English rules: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnknownLanguage {
            code: code.to_string(),
        })
}

/// Load custom rules from a configuration file and an optional compound list
pub fn load_from_paths(
    config_path: impl AsRef<Path>,
    compounds_path: Option<&Path>,
) -> Result<Arc<CompoundRules>, CoreError> {
    let config_path = config_path.as_ref();
    let config_text = fs::read_to_string(config_path).map_err(|source| CoreError::Io {
        path: config_path.display().to_string(),
        source,
    })?;
    let config = LanguageConfig::from_toml(&config_text)?;

    let list = match compounds_path {
        Some(path) => Some(fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?),
        None => None,
    };

    Ok(Arc::new(CompoundRules::from_config(
        &config,
        list.as_deref(),
    )?))
}

fn load_embedded(toml_str: &str, list: &str) -> Result<Arc<CompoundRules>, CoreError> {
    let config = LanguageConfig::from_toml(toml_str)?;
    Ok(Arc::new(CompoundRules::from_config(&config, Some(list))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_embedded() {
        let rules = get_rules("en").unwrap();
        assert_eq!(rules.code(), "en");
        assert!(!rules.table().is_empty());
        // The full name resolves to the same shared instance.
        let by_name = get_rules("English").unwrap();
        assert!(Arc::ptr_eq(&rules, &by_name));
    }

    #[test]
    fn unknown_code_errors() {
        let err = get_rules("xx").unwrap_err();
        assert!(matches!(err, CoreError::UnknownLanguage { .. }));
    }

    #[test]
    fn missing_config_path_is_io_error() {
        let err = load_from_paths("/nonexistent/lang.toml", None).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
