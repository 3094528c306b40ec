// Dictionary store - durable CRUD for dictionaries and their embedded word pairs
//
// Words live inside their dictionary record, so every word-level mutation is
// read whole dictionary -> change in memory -> write the word list back, done
// under the dictionary's mutation lock.

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::locks::DictionaryLocks;
use super::{Dictionary, DictionaryError, DictionaryId, DuplicatePolicy, WordPair};
use crate::config::StoreConfig;
use crate::storage::DictionaryBackend;
use crate::turso::{initialize_schema, TursoClient};

static SHARED_STORE: OnceCell<Arc<DictionaryStore>> = OnceCell::const_new();

/// Store for dictionaries backed by a durable record collection
pub struct DictionaryStore {
    backend: Arc<dyn DictionaryBackend>,
    locks: DictionaryLocks,
    duplicate_policy: DuplicatePolicy,
}

impl std::fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryStore")
            .field("duplicate_policy", &self.duplicate_policy)
            .field("locked_dictionaries", &self.locks.len())
            .finish()
    }
}

impl DictionaryStore {
    /// Open (creating on first use) the database described by `config`.
    ///
    /// Safe to call repeatedly on the same files: the table and the unique
    /// name index are only created when the database is fresh.
    pub async fn open(config: &StoreConfig) -> Result<Self, DictionaryError> {
        let client = TursoClient::open_file(config.db_path()).await?;
        initialize_schema(&client).await?;
        crate::info!("Dictionary store opened at {:?}", client.db_path());

        Ok(Self::with_backend(Arc::new(client), config.duplicate_policy))
    }

    /// Blocking variant of [`DictionaryStore::open`] for synchronous startup code.
    pub fn open_blocking(config: &StoreConfig) -> Result<Self, DictionaryError> {
        crate::util::run_async(Self::open(config))
            .map_err(|e| DictionaryError::Storage(format!("Failed to start runtime: {}", e)))?
    }

    /// Process-wide store handle, opened on the first call.
    ///
    /// Later calls return the same handle and ignore `config`.
    pub async fn shared(config: &StoreConfig) -> Result<Arc<Self>, DictionaryError> {
        SHARED_STORE
            .get_or_try_init(|| async { Self::open(config).await.map(Arc::new) })
            .await
            .cloned()
    }

    /// Create a store over an existing backend
    pub fn with_backend(backend: Arc<dyn DictionaryBackend>, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            backend,
            locks: DictionaryLocks::new(),
            duplicate_policy,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Create a new, empty dictionary.
    ///
    /// Fails with `Conflict` if a dictionary with this name exists.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn create_dictionary(&self, name: &str) -> Result<Dictionary, DictionaryError> {
        let dictionary = self.backend.insert_dictionary(name).await?;
        crate::info!("Created dictionary '{}' (id {})", dictionary.name, dictionary.id);
        Ok(dictionary)
    }

    /// List all dictionaries
    pub async fn list_dictionaries(&self) -> Result<Vec<Dictionary>, DictionaryError> {
        self.backend.list_dictionaries().await
    }

    /// Get a dictionary by ID
    pub async fn get_dictionary(
        &self,
        id: DictionaryId,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        self.backend.get_dictionary(id).await
    }

    /// Get a dictionary by name
    pub async fn get_dictionary_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        self.backend.get_dictionary_by_name(name).await
    }

    /// Rename a dictionary. Does nothing if `id` does not exist.
    ///
    /// Only the name is written, so word mutations in flight are not lost.
    /// Returns whether a dictionary was renamed.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn rename_dictionary(
        &self,
        id: DictionaryId,
        new_name: &str,
    ) -> Result<bool, DictionaryError> {
        let renamed = self.backend.update_dictionary_name(id, new_name).await?;
        if renamed {
            crate::info!("Renamed dictionary {} to '{}'", id, new_name);
        } else {
            crate::debug!("Rename skipped, dictionary {} does not exist", id);
        }
        Ok(renamed)
    }

    /// Delete a dictionary and all of its words. Does nothing if `id` does not exist.
    ///
    /// Returns whether a dictionary was deleted.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn delete_dictionary(&self, id: DictionaryId) -> Result<bool, DictionaryError> {
        let deleted = {
            let _guard = self.locks.acquire(id).await;
            self.backend.delete_dictionary(id).await?
        };
        self.locks.remove(id);

        if deleted {
            crate::info!("Deleted dictionary {}", id);
        } else {
            crate::debug!("Delete skipped, dictionary {} does not exist", id);
        }
        Ok(deleted)
    }

    /// Append a word pair to a dictionary.
    ///
    /// Fails with `NotFound` if the dictionary does not exist, and with
    /// `Conflict` if the pair exists and duplicates are rejected.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn add_word(
        &self,
        dictionary_name: &str,
        word: &str,
        translation: &str,
    ) -> Result<(), DictionaryError> {
        let policy = self.duplicate_policy;
        let added = self
            .mutate_words(dictionary_name, |dictionary| {
                let duplicate = dictionary.contains_pair(word, translation);
                if policy == DuplicatePolicy::Reject && duplicate {
                    return Err(DictionaryError::Conflict(format!(
                        "Pair '{}' -> '{}' already exists in '{}'",
                        word, translation, dictionary_name
                    )));
                }
                dictionary.words.push(WordPair::new(word, translation));
                Ok(())
            })
            .await?;

        match added {
            Some(()) => {
                crate::debug!("Added '{}' -> '{}' to '{}'", word, translation, dictionary_name);
                Ok(())
            }
            None => Err(dictionary_not_found(dictionary_name)),
        }
    }

    /// Word pairs of a dictionary in insertion order; empty if it does not exist.
    pub async fn list_words(&self, dictionary_name: &str) -> Result<Vec<WordPair>, DictionaryError> {
        Ok(self
            .backend
            .get_dictionary_by_name(dictionary_name)
            .await?
            .map(|dictionary| dictionary.words)
            .unwrap_or_default())
    }

    /// First pair in a dictionary whose source word equals `word`
    pub async fn find_word_pair(
        &self,
        dictionary_name: &str,
        word: &str,
    ) -> Result<Option<WordPair>, DictionaryError> {
        Ok(self
            .backend
            .get_dictionary_by_name(dictionary_name)
            .await?
            .and_then(|dictionary| dictionary.find_word(word).cloned()))
    }

    /// Replace the translation of every pair matching `(original_word, original_translation)`.
    ///
    /// Fails with `NotFound` if the dictionary or a matching pair does not exist.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn update_word_pair(
        &self,
        dictionary_name: &str,
        original_word: &str,
        original_translation: &str,
        updated_translation: &str,
    ) -> Result<(), DictionaryError> {
        let updated = self
            .mutate_words(dictionary_name, |dictionary| {
                let mut matched = 0;
                for pair in dictionary
                    .words
                    .iter_mut()
                    .filter(|pair| pair.matches(original_word, original_translation))
                {
                    pair.translation = updated_translation.to_string();
                    matched += 1;
                }
                if matched == 0 {
                    return Err(DictionaryError::NotFound(format!(
                        "Pair '{}' -> '{}' not found in '{}'",
                        original_word, original_translation, dictionary_name
                    )));
                }
                Ok(matched)
            })
            .await?;

        match updated {
            Some(count) => {
                crate::debug!(
                    "Updated {} pair(s) '{}' in '{}' to '{}'",
                    count,
                    original_word,
                    dictionary_name,
                    updated_translation
                );
                Ok(())
            }
            None => Err(dictionary_not_found(dictionary_name)),
        }
    }

    /// Remove every pair matching both `word` and `translation`.
    ///
    /// Does nothing if the dictionary or the pair does not exist. Returns
    /// whether any pair was removed.
    #[must_use = "this returns a Result that should be handled"]
    pub async fn delete_word_pair(
        &self,
        dictionary_name: &str,
        word: &str,
        translation: &str,
    ) -> Result<bool, DictionaryError> {
        let removed = self
            .mutate_words(dictionary_name, |dictionary| {
                let before = dictionary.words.len();
                dictionary
                    .words
                    .retain(|pair| !pair.matches(word, translation));
                Ok(before - dictionary.words.len())
            })
            .await?;

        match removed {
            Some(count) => {
                crate::debug!(
                    "Removed {} pair(s) '{}' -> '{}' from '{}'",
                    count,
                    word,
                    translation,
                    dictionary_name
                );
                Ok(count > 0)
            }
            None => {
                crate::debug!(
                    "Delete skipped, dictionary '{}' does not exist",
                    dictionary_name
                );
                Ok(false)
            }
        }
    }

    /// Run `mutate` on a dictionary under its lock and persist its word list.
    ///
    /// Returns `Ok(None)` if the dictionary does not exist (or vanished before
    /// the write). If `mutate` fails nothing is written.
    async fn mutate_words<T, F>(
        &self,
        dictionary_name: &str,
        mutate: F,
    ) -> Result<Option<T>, DictionaryError>
    where
        F: FnOnce(&mut Dictionary) -> Result<T, DictionaryError>,
    {
        let Some(found) = self.backend.get_dictionary_by_name(dictionary_name).await? else {
            return Ok(None);
        };

        let _guard = self.locks.acquire(found.id).await;

        // Re-read under the lock; the copy above may predate another writer
        let Some(mut dictionary) = self.backend.get_dictionary(found.id).await? else {
            return Ok(None);
        };

        let result = mutate(&mut dictionary)?;

        if !self
            .backend
            .update_dictionary_words(dictionary.id, &dictionary.words)
            .await?
        {
            return Ok(None);
        }
        Ok(Some(result))
    }
}

fn dictionary_not_found(name: &str) -> DictionaryError {
    DictionaryError::NotFound(format!("Dictionary '{}' not found", name))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
