//! Storage backend trait for dictionary records.
//!
//! The trait defines the record-level interface the dictionary store is
//! written against, decoupling read-modify-write logic from the specific
//! storage engine.

use async_trait::async_trait;

use crate::dictionary::{Dictionary, DictionaryError, DictionaryId, WordPair};
use crate::turso::TursoClient;

/// Backend trait for dictionary record storage.
///
/// Every method is a single atomic write or read of whole records. The
/// primary implementation is TursoClient.
#[async_trait]
pub trait DictionaryBackend: Send + Sync {
    /// Insert a new, empty dictionary. Fails with `Conflict` if the name is taken.
    async fn insert_dictionary(&self, name: &str) -> Result<Dictionary, DictionaryError>;

    /// All dictionaries in creation order.
    async fn list_dictionaries(&self) -> Result<Vec<Dictionary>, DictionaryError>;

    /// Get a dictionary by its ID.
    async fn get_dictionary(&self, id: DictionaryId)
        -> Result<Option<Dictionary>, DictionaryError>;

    /// Get a dictionary by its unique name.
    async fn get_dictionary_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Dictionary>, DictionaryError>;

    /// Rename a dictionary. Returns false if the ID does not exist.
    async fn update_dictionary_name(
        &self,
        id: DictionaryId,
        name: &str,
    ) -> Result<bool, DictionaryError>;

    /// Replace a dictionary's word list. Returns false if the ID does not exist.
    async fn update_dictionary_words(
        &self,
        id: DictionaryId,
        words: &[WordPair],
    ) -> Result<bool, DictionaryError>;

    /// Delete a dictionary. Returns false if the ID does not exist.
    async fn delete_dictionary(&self, id: DictionaryId) -> Result<bool, DictionaryError>;
}

#[async_trait]
impl DictionaryBackend for TursoClient {
    async fn insert_dictionary(&self, name: &str) -> Result<Dictionary, DictionaryError> {
        TursoClient::insert_dictionary(self, name).await
    }

    async fn list_dictionaries(&self) -> Result<Vec<Dictionary>, DictionaryError> {
        TursoClient::list_dictionaries(self).await
    }

    async fn get_dictionary(
        &self,
        id: DictionaryId,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        TursoClient::get_dictionary(self, id).await
    }

    async fn get_dictionary_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        TursoClient::get_dictionary_by_name(self, name).await
    }

    async fn update_dictionary_name(
        &self,
        id: DictionaryId,
        name: &str,
    ) -> Result<bool, DictionaryError> {
        TursoClient::update_dictionary_name(self, id, name).await
    }

    async fn update_dictionary_words(
        &self,
        id: DictionaryId,
        words: &[WordPair],
    ) -> Result<bool, DictionaryError> {
        TursoClient::update_dictionary_words(self, id, words).await
    }

    async fn delete_dictionary(&self, id: DictionaryId) -> Result<bool, DictionaryError> {
        TursoClient::delete_dictionary(self, id).await
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
