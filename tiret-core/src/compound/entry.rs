//! Compound entries and list-line parsing
//!
//! One list line describes one compound concept: its spelling variants
//! separated by `/`, e.g. `part time/part-time`. Variants are classified by
//! shape: a hyphen makes a variant Hyphenated, internal whitespace makes it
//! Open, anything else is Solid. The open-form word sequence becomes the
//! normalized key; a word written in all uppercase is matched case-sensitively
//! at that position.

use smallvec::SmallVec;

use crate::error::CoreError;

/// Spelling category of a compound surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    /// Words separated by whitespace ("part time")
    Open,
    /// Words joined by hyphens ("part-time")
    Hyphenated,
    /// Words written as one ("parttime")
    Solid,
}

impl Spelling {
    /// Classify a raw variant string by its shape
    pub fn of(surface: &str) -> Self {
        if surface.contains('-') || surface.contains('\u{2010}') {
            Spelling::Hyphenated
        } else if surface.chars().any(char::is_whitespace) {
            Spelling::Open
        } else {
            Spelling::Solid
        }
    }
}

/// One declared spelling of a compound entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Surface form as written in the list (open forms single-spaced)
    pub surface: String,
    /// Spelling category of this surface
    pub spelling: Spelling,
}

/// A compound concept with its accepted and rejected spellings
///
/// Immutable after parsing. The word sequence carries the source casing;
/// `words_lower` is precomputed so the scan loop compares without allocating.
#[derive(Debug, Clone)]
pub struct CompoundEntry {
    /// Normalized key: lowercase open-form words joined by single spaces
    pub key: String,
    /// Word sequence with source casing
    pub words: SmallVec<[String; 3]>,
    /// Lowercase word sequence for case-insensitive comparison
    pub words_lower: SmallVec<[String; 3]>,
    /// Per-word case-sensitivity, true where the source spelling is all caps
    pub case_sensitive: SmallVec<[bool; 3]>,
    /// Declared variants in declaration order
    pub variants: Vec<Variant>,
    /// Spelling categories that count as correct, declaration order, deduped
    pub acceptable: SmallVec<[Spelling; 2]>,
    /// 1-based line number in the source list
    pub line: usize,
}

impl CompoundEntry {
    /// Parse one list line; `Ok(None)` for blanks and `#` comments
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Self>, CoreError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let raw: Vec<&str> = trimmed.split('/').map(str::trim).collect();
        if raw.len() < 2 || raw.iter().any(|v| v.is_empty()) {
            return Err(CoreError::MalformedLine {
                line: line_no,
                reason: "expected at least two non-empty variants separated by '/'".to_string(),
            });
        }

        let variants: Vec<Variant> = raw
            .iter()
            .map(|v| {
                let spelling = Spelling::of(v);
                let surface = match spelling {
                    Spelling::Open => v.split_whitespace().collect::<Vec<_>>().join(" "),
                    _ => v.to_string(),
                };
                Variant { surface, spelling }
            })
            .collect();

        // The word boundaries come from the first separable variant.
        let mut words: SmallVec<[String; 3]> = SmallVec::new();
        for variant in &variants {
            if variant.spelling != Spelling::Solid {
                words = split_words(&variant.surface)
                    .map(str::to_string)
                    .collect();
                break;
            }
        }
        if words.len() < 2 {
            return Err(CoreError::MalformedLine {
                line: line_no,
                reason: "no variant shows the word boundaries".to_string(),
            });
        }

        let mut case_sensitive: SmallVec<[bool; 3]> = words.iter().map(|w| all_caps(w)).collect();

        // Every variant must spell the same word sequence.
        for variant in &variants {
            match variant.spelling {
                Spelling::Solid => {
                    let joined: String = words.join("").to_lowercase();
                    if variant.surface.to_lowercase() != joined {
                        return Err(CoreError::MalformedLine {
                            line: line_no,
                            reason: format!(
                                "solid variant '{}' does not match the word sequence",
                                variant.surface
                            ),
                        });
                    }
                }
                _ => {
                    let split: Vec<&str> = split_words(&variant.surface).collect();
                    if split.len() != words.len()
                        || split
                            .iter()
                            .zip(words.iter())
                            .any(|(a, b)| a.to_lowercase() != b.to_lowercase())
                    {
                        return Err(CoreError::MalformedLine {
                            line: line_no,
                            reason: format!(
                                "variant '{}' disagrees on the word sequence",
                                variant.surface
                            ),
                        });
                    }
                    // An all-caps spelling in any variant pins that position.
                    for (j, seg) in split.iter().enumerate() {
                        if all_caps(seg) && !case_sensitive[j] {
                            case_sensitive[j] = true;
                            words[j] = seg.to_string();
                        }
                    }
                }
            }
        }

        let mut acceptable: SmallVec<[Spelling; 2]> = SmallVec::new();
        for variant in &variants {
            if variant.spelling != Spelling::Open && !acceptable.contains(&variant.spelling) {
                acceptable.push(variant.spelling);
            }
        }
        if acceptable.is_empty() {
            return Err(CoreError::MalformedLine {
                line: line_no,
                reason: "entry declares no hyphenated or solid spelling".to_string(),
            });
        }

        let words_lower: SmallVec<[String; 3]> =
            words.iter().map(|w| w.to_lowercase()).collect();
        let key = words_lower.join(" ");

        Ok(Some(Self {
            key,
            words,
            words_lower,
            case_sensitive,
            variants,
            acceptable,
            line: line_no,
        }))
    }

    /// Number of words in the compound
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Lowercase solid realization, e.g. "notebook"
    pub fn solid_lower(&self) -> String {
        self.words_lower.join("")
    }

    /// Lowercase hyphenated realization, e.g. "note-book"
    pub fn hyphenated_lower(&self) -> String {
        self.words_lower.join("-")
    }

    /// Case check for one word position against a written form
    #[inline]
    pub fn word_matches(&self, j: usize, written: &str, written_lower: &str) -> bool {
        if self.case_sensitive[j] {
            written == self.words[j]
        } else {
            written_lower == self.words_lower[j]
        }
    }

    /// Whether a single fused token spells this compound in the given category
    ///
    /// Handles tokenizers that keep hyphens inside tokens ("part-time") and
    /// solid single tokens ("parttime"), enforcing per-word case rules.
    pub fn fused_matches(&self, text: &str, spelling: Spelling) -> bool {
        match spelling {
            Spelling::Hyphenated => {
                let segs: Vec<&str> =
                    text.split(['-', '\u{2010}']).collect();
                segs.len() == self.words.len()
                    && segs
                        .iter()
                        .enumerate()
                        .all(|(j, seg)| self.word_matches(j, seg, &seg.to_lowercase()))
            }
            Spelling::Solid => {
                let chars: Vec<char> = text.chars().collect();
                let mut cursor = 0;
                for (j, word) in self.words.iter().enumerate() {
                    let len = word.chars().count();
                    if cursor + len > chars.len() {
                        return false;
                    }
                    let seg: String = chars[cursor..cursor + len].iter().collect();
                    if !self.word_matches(j, &seg, &seg.to_lowercase()) {
                        return false;
                    }
                    cursor += len;
                }
                cursor == chars.len()
            }
            Spelling::Open => false,
        }
    }

    /// Declared variants whose spelling is in the acceptable set
    pub fn acceptable_variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants
            .iter()
            .filter(|v| self.acceptable.contains(&v.spelling))
    }
}

/// Split a surface form into words at hyphens and whitespace
fn split_words(surface: &str) -> impl Iterator<Item = &str> {
    surface
        .split(|c: char| c == '-' || c == '\u{2010}' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

/// True for words written entirely in uppercase, e.g. "CD"
fn all_caps(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_uppercase())
}
