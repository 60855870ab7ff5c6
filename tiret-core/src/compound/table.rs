//! Compound lookup table
//!
//! Built once from a compound list, then treated as read-only shared state.
//! Multi-word lookups hash the normalized first word and chain entries
//! longest-first; solid and fused-hyphen single-token surfaces get their own
//! index so one-token spellings resolve in O(1) as well.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::compound::entry::{CompoundEntry, Spelling};
use crate::error::CoreError;

/// Immutable lookup structure over a loaded compound list
#[derive(Debug, Clone)]
pub struct CompoundTable {
    entries: Vec<CompoundEntry>,
    /// Normalized first word -> entry indices, longest word count first
    by_first_word: HashMap<String, Vec<usize>>,
    /// Lowercase one-token realization -> (entry index, spelling)
    by_fused: HashMap<String, (usize, Spelling)>,
    max_words: usize,
}

impl CompoundTable {
    /// Build a table from compound list text
    pub fn from_list(list: &str) -> Result<Self, CoreError> {
        let mut entries: Vec<CompoundEntry> = Vec::new();
        let mut key_index: HashMap<String, usize> = HashMap::new();

        for (i, line) in list.lines().enumerate() {
            let line_no = i + 1;
            let Some(entry) = CompoundEntry::parse_line(line, line_no)? else {
                continue;
            };
            if let Some(&existing) = key_index.get(&entry.key) {
                // An exact repeat is tolerated, a conflicting one is fatal.
                if entries[existing].variants == entry.variants {
                    continue;
                }
                return Err(CoreError::DuplicateKey {
                    key: entry.key,
                    line: line_no,
                });
            }
            key_index.insert(entry.key.clone(), entries.len());
            entries.push(entry);
        }

        let mut by_first_word: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_fused: HashMap<String, (usize, Spelling)> = HashMap::new();
        let mut max_words = 0;

        for (idx, entry) in entries.iter().enumerate() {
            max_words = max_words.max(entry.word_count());
            by_first_word
                .entry(entry.words_lower[0].clone())
                .or_default()
                .push(idx);

            for (fused, spelling) in [
                (entry.solid_lower(), Spelling::Solid),
                (entry.hyphenated_lower(), Spelling::Hyphenated),
            ] {
                if let Some(&(other, _)) = by_fused.get(&fused) {
                    if other != idx {
                        return Err(CoreError::DuplicateKey {
                            key: fused,
                            line: entry.line,
                        });
                    }
                }
                by_fused.insert(fused, (idx, spelling));
            }
        }

        // Longest-first within a chain; stable sort keeps declaration order
        // among equal lengths.
        for chain in by_first_word.values_mut() {
            chain.sort_by(|&a, &b| entries[b].word_count().cmp(&entries[a].word_count()));
        }

        Ok(Self {
            entries,
            by_first_word,
            by_fused,
            max_words,
        })
    }

    /// Load a compound list from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let list = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_list(&list)
    }

    /// Entries whose first word matches, longest word count first
    pub fn lookup(&self, first_word_lower: &str) -> &[usize] {
        self.by_first_word
            .get(first_word_lower)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entry index spelled by a single fused token, if any
    pub fn lookup_fused(&self, token_lower: &str) -> Option<(usize, Spelling)> {
        self.by_fused.get(token_lower).copied()
    }

    /// Entry by index
    #[inline]
    pub fn entry(&self, idx: usize) -> &CompoundEntry {
        &self.entries[idx]
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[CompoundEntry] {
        &self.entries
    }

    /// Number of loaded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest word count across all entries
    #[inline]
    pub fn max_words(&self) -> usize {
        self.max_words
    }
}
