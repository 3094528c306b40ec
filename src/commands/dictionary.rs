// Dictionary commands for view CRUD operations
// Exposes DictionaryStore to views and emits change events on mutations
//
// Views pass primitive strings (ids arrive as route parameters), so input is
// validated and trimmed here before it reaches the store.

use std::sync::Arc;

use crate::dictionary::{Dictionary, DictionaryError, DictionaryId, DictionaryStore, WordPair};
use crate::events::dictionary_events::{DictionariesUpdatedPayload, WordsUpdatedPayload};
use crate::events::{current_timestamp, DictionaryEventEmitter};

/// Map DictionaryError to user-friendly error messages
pub fn to_user_error(error: DictionaryError) -> String {
    crate::debug!("Dictionary command failed [{}]: {}", error.kind(), error);
    match error {
        DictionaryError::NotFound(msg) => format!("Not found: {}", msg),
        DictionaryError::Conflict(msg) => format!("Already exists: {}", msg),
        DictionaryError::Validation(msg) => msg,
        DictionaryError::Storage(msg) => format!("Failed to access dictionary storage: {}", msg),
    }
}

/// Trim a required text field, rejecting blank input
fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, DictionaryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DictionaryError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}

/// Parse a dictionary id passed as a route parameter
fn parse_dictionary_id(raw: &str) -> Result<DictionaryId, DictionaryError> {
    raw.trim()
        .parse::<DictionaryId>()
        .map_err(|_| DictionaryError::Validation(format!("Invalid dictionary id '{}'", raw)))
}

/// View-facing command surface over a shared dictionary store
#[derive(Clone)]
pub struct DictionaryCommands {
    store: Arc<DictionaryStore>,
    emitter: Arc<dyn DictionaryEventEmitter>,
}

impl DictionaryCommands {
    pub fn new(store: Arc<DictionaryStore>, emitter: Arc<dyn DictionaryEventEmitter>) -> Self {
        Self { store, emitter }
    }

    fn emit_dictionaries_updated(&self, action: &str, dictionary_id: DictionaryId) {
        self.emitter.emit_dictionaries_updated(DictionariesUpdatedPayload {
            action: action.to_string(),
            dictionary_id,
            timestamp: current_timestamp(),
        });
    }

    fn emit_words_updated(&self, action: &str, dictionary_name: &str, word: &str) {
        self.emitter.emit_words_updated(WordsUpdatedPayload {
            action: action.to_string(),
            dictionary_name: dictionary_name.to_string(),
            word: word.to_string(),
            timestamp: current_timestamp(),
        });
    }

    /// List all dictionaries
    pub async fn list_dictionaries(&self) -> Result<Vec<Dictionary>, String> {
        self.store.list_dictionaries().await.map_err(to_user_error)
    }

    /// Get a dictionary by the id from a route parameter
    pub async fn get_dictionary(&self, dict_id: &str) -> Result<Option<Dictionary>, String> {
        let id = parse_dictionary_id(dict_id).map_err(to_user_error)?;
        self.store.get_dictionary(id).await.map_err(to_user_error)
    }

    /// Get a dictionary by name
    pub async fn get_dictionary_by_name(&self, name: &str) -> Result<Option<Dictionary>, String> {
        let name = require_text(name, "Dictionary name").map_err(to_user_error)?;
        self.store
            .get_dictionary_by_name(name)
            .await
            .map_err(to_user_error)
    }

    /// Create a new dictionary
    ///
    /// # Arguments
    /// * `name` - Dictionary name, trimmed; must be non-empty and unused
    ///
    /// # Returns
    /// The newly created Dictionary with its generated ID
    pub async fn create_dictionary(&self, name: &str) -> Result<Dictionary, String> {
        let name = require_text(name, "Dictionary name").map_err(to_user_error)?;
        let dictionary = self
            .store
            .create_dictionary(name)
            .await
            .map_err(to_user_error)?;

        self.emit_dictionaries_updated("add", dictionary.id);
        Ok(dictionary)
    }

    /// Rename a dictionary
    ///
    /// # Arguments
    /// * `dict_id` - Dictionary id as passed in the route
    /// * `new_name` - New name, trimmed; must be non-empty and unused
    ///
    /// No event is emitted when the id does not exist.
    pub async fn rename_dictionary(&self, dict_id: &str, new_name: &str) -> Result<(), String> {
        let id = parse_dictionary_id(dict_id).map_err(to_user_error)?;
        let new_name = require_text(new_name, "Dictionary name").map_err(to_user_error)?;
        let renamed = self
            .store
            .rename_dictionary(id, new_name)
            .await
            .map_err(to_user_error)?;

        if renamed {
            self.emit_dictionaries_updated("rename", id);
        }
        Ok(())
    }

    /// Delete a dictionary and all of its words
    pub async fn delete_dictionary(&self, dict_id: &str) -> Result<(), String> {
        let id = parse_dictionary_id(dict_id).map_err(to_user_error)?;
        let deleted = self.store.delete_dictionary(id).await.map_err(to_user_error)?;

        if deleted {
            self.emit_dictionaries_updated("delete", id);
        }
        Ok(())
    }

    /// Add a word pair to a dictionary
    pub async fn add_word(
        &self,
        dictionary_name: &str,
        word: &str,
        translation: &str,
    ) -> Result<(), String> {
        let dictionary_name =
            require_text(dictionary_name, "Dictionary name").map_err(to_user_error)?;
        let word = require_text(word, "Word").map_err(to_user_error)?;
        let translation = require_text(translation, "Translation").map_err(to_user_error)?;

        self.store
            .add_word(dictionary_name, word, translation)
            .await
            .map_err(to_user_error)?;

        self.emit_words_updated("add", dictionary_name, word);
        Ok(())
    }

    /// Word pairs of a dictionary in insertion order
    pub async fn list_words(&self, dictionary_name: &str) -> Result<Vec<WordPair>, String> {
        let dictionary_name =
            require_text(dictionary_name, "Dictionary name").map_err(to_user_error)?;
        self.store
            .list_words(dictionary_name)
            .await
            .map_err(to_user_error)
    }

    /// Look up a word pair by its source word
    pub async fn find_word_pair(
        &self,
        dictionary_name: &str,
        word: &str,
    ) -> Result<Option<WordPair>, String> {
        let dictionary_name =
            require_text(dictionary_name, "Dictionary name").map_err(to_user_error)?;
        self.store
            .find_word_pair(dictionary_name, word.trim())
            .await
            .map_err(to_user_error)
    }

    /// Replace the translation of an existing pair
    pub async fn update_word_pair(
        &self,
        dictionary_name: &str,
        original_word: &str,
        original_translation: &str,
        updated_translation: &str,
    ) -> Result<(), String> {
        let dictionary_name =
            require_text(dictionary_name, "Dictionary name").map_err(to_user_error)?;
        let updated_translation =
            require_text(updated_translation, "Translation").map_err(to_user_error)?;
        let original_word = original_word.trim();

        self.store
            .update_word_pair(
                dictionary_name,
                original_word,
                original_translation.trim(),
                updated_translation,
            )
            .await
            .map_err(to_user_error)?;

        self.emit_words_updated("update", dictionary_name, original_word);
        Ok(())
    }

    /// Remove a word pair from a dictionary
    pub async fn delete_word_pair(
        &self,
        dictionary_name: &str,
        word: &str,
        translation: &str,
    ) -> Result<(), String> {
        let dictionary_name =
            require_text(dictionary_name, "Dictionary name").map_err(to_user_error)?;
        let word = word.trim();

        let removed = self
            .store
            .delete_word_pair(dictionary_name, word, translation.trim())
            .await
            .map_err(to_user_error)?;

        if removed {
            self.emit_words_updated("delete", dictionary_name, word);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
