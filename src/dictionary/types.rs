// Dictionary record types shared by the store, the storage backend and views

use serde::{Deserialize, Serialize};

/// Store-assigned dictionary identifier
pub type DictionaryId = i64;

/// A single word/translation pair stored inside a dictionary.
///
/// Pairs have no identity of their own; two pairs are the same pair when both
/// fields are equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WordPair {
    /// Source-language term
    pub word: String,
    /// Target-language term
    pub translation: String,
}

impl WordPair {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }

    /// True if both fields match
    pub fn matches(&self, word: &str, translation: &str) -> bool {
        self.word == word && self.translation == translation
    }
}

/// A named dictionary holding an append-ordered list of word pairs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    /// Unique identifier, immutable after creation
    pub id: DictionaryId,
    /// Unique name, used as the lookup key from views
    pub name: String,
    /// Word pairs in insertion order
    #[serde(default)]
    pub words: Vec<WordPair>,
    /// RFC 3339 creation timestamp
    #[serde(default)]
    pub created_at: String,
}

impl Dictionary {
    /// First pair whose source word equals `word`
    pub fn find_word(&self, word: &str) -> Option<&WordPair> {
        self.words.iter().find(|pair| pair.word == word)
    }

    pub fn contains_pair(&self, word: &str, translation: &str) -> bool {
        self.words.iter().any(|pair| pair.matches(word, translation))
    }
}

/// What `add_word` does when the exact pair is already present
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Append the pair again
    #[default]
    Allow,
    /// Fail with a conflict
    Reject,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
