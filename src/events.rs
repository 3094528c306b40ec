// Dictionary change events for view notification
// Defines event payloads and emission trait for testability

use serde::Serialize;

use crate::dictionary::DictionaryId;

/// Dictionary-related event names and payloads
pub mod dictionary_events {
    use super::*;

    pub const DICTIONARIES_UPDATED: &str = "dictionaries_updated";
    pub const WORDS_UPDATED: &str = "words_updated";

    /// Payload for dictionaries_updated event
    #[derive(Debug, Clone, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct DictionariesUpdatedPayload {
        /// Type of mutation: "add", "rename", or "delete"
        pub action: String,
        /// ID of the affected dictionary
        pub dictionary_id: DictionaryId,
        /// ISO 8601 timestamp of the mutation
        pub timestamp: String,
    }

    /// Payload for words_updated event
    #[derive(Debug, Clone, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct WordsUpdatedPayload {
        /// Type of mutation: "add", "update", or "delete"
        pub action: String,
        /// Name of the dictionary holding the word
        pub dictionary_name: String,
        /// Source word of the affected pair
        pub word: String,
        /// ISO 8601 timestamp of the mutation
        pub timestamp: String,
    }
}

/// Trait for emitting dictionary events
/// Allows mocking in tests while hosts forward events to their views
pub trait DictionaryEventEmitter: Send + Sync {
    /// Emit dictionaries_updated event
    fn emit_dictionaries_updated(&self, payload: dictionary_events::DictionariesUpdatedPayload);

    /// Emit words_updated event
    fn emit_words_updated(&self, payload: dictionary_events::WordsUpdatedPayload);
}

/// Emitter that writes events to the log, for hosts without a view channel
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventEmitter;

impl DictionaryEventEmitter for LogEventEmitter {
    fn emit_dictionaries_updated(&self, payload: dictionary_events::DictionariesUpdatedPayload) {
        log_event(dictionary_events::DICTIONARIES_UPDATED, &payload);
    }

    fn emit_words_updated(&self, payload: dictionary_events::WordsUpdatedPayload) {
        log_event(dictionary_events::WORDS_UPDATED, &payload);
    }
}

fn log_event<T: Serialize>(event: &str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => crate::debug!("Event '{}': {}", event, json),
        Err(e) => crate::warn!("Failed to serialize event '{}': {}", event, e),
    }
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
