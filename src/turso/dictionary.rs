// Dictionary record operations using Turso/libsql
//
// Provides database operations for dictionary records using SQL queries.
// Word pairs are stored embedded in the record as a JSON array.

use libsql::{params, Row};

use super::client::{TursoClient, TursoError};
use crate::dictionary::{Dictionary, DictionaryError, DictionaryId, WordPair};

const SELECT_COLUMNS: &str = "SELECT id, name, words_json, created_at FROM dictionaries";

impl TursoClient {
    /// Insert a new, empty dictionary.
    ///
    /// # Arguments
    /// * `name` - Unique dictionary name
    ///
    /// # Returns
    /// The created Dictionary with its generated ID
    pub async fn insert_dictionary(&self, name: &str) -> Result<Dictionary, DictionaryError> {
        let created_at = chrono::Utc::now().to_rfc3339();

        let ids = self
            .query_map(
                "INSERT INTO dictionaries (name, words_json, created_at) VALUES (?1, '[]', ?2) RETURNING id",
                params![name, created_at.clone()],
                |row| {
                    row.get::<DictionaryId>(0)
                        .map_err(|e| DictionaryError::Storage(e.to_string()))
                },
            )
            .await
            .map_err(|e| match e {
                DictionaryError::Conflict(_) => {
                    DictionaryError::Conflict(format!("Dictionary '{}' already exists", name))
                }
                other => other,
            })?;

        let id = ids
            .into_iter()
            .next()
            .ok_or_else(|| DictionaryError::Storage("Insert returned no id".to_string()))?;

        Ok(Dictionary {
            id,
            name: name.to_string(),
            words: Vec::new(),
            created_at,
        })
    }

    /// List all dictionaries in creation order.
    pub async fn list_dictionaries(&self) -> Result<Vec<Dictionary>, DictionaryError> {
        self.query_map(&format!("{} ORDER BY id", SELECT_COLUMNS), (), row_to_dictionary)
            .await
    }

    /// Get a dictionary by its ID.
    pub async fn get_dictionary(
        &self,
        id: DictionaryId,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        let found = self
            .query_map(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_dictionary,
            )
            .await?;
        Ok(found.into_iter().next())
    }

    /// Get a dictionary by its unique name.
    pub async fn get_dictionary_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Dictionary>, DictionaryError> {
        let found = self
            .query_map(
                &format!("{} WHERE name = ?1", SELECT_COLUMNS),
                params![name],
                row_to_dictionary,
            )
            .await?;
        Ok(found.into_iter().next())
    }

    /// Change a dictionary's name. Returns false if no record has this ID.
    pub async fn update_dictionary_name(
        &self,
        id: DictionaryId,
        name: &str,
    ) -> Result<bool, DictionaryError> {
        let affected = self
            .execute(
                "UPDATE dictionaries SET name = ?1 WHERE id = ?2",
                params![name, id],
            )
            .await
            .map_err(|e| match e {
                TursoError::Constraint(_) => {
                    DictionaryError::Conflict(format!("Dictionary '{}' already exists", name))
                }
                other => DictionaryError::Storage(other.to_string()),
            })?;
        Ok(affected > 0)
    }

    /// Replace a dictionary's word list. Returns false if no record has this ID.
    pub async fn update_dictionary_words(
        &self,
        id: DictionaryId,
        words: &[WordPair],
    ) -> Result<bool, DictionaryError> {
        let words_json =
            serde_json::to_string(words).map_err(|e| DictionaryError::Storage(e.to_string()))?;
        let affected = self
            .execute(
                "UPDATE dictionaries SET words_json = ?1 WHERE id = ?2",
                params![words_json, id],
            )
            .await?;
        Ok(affected > 0)
    }

    /// Delete a dictionary and its embedded words. Returns false if no record has this ID.
    pub async fn delete_dictionary(&self, id: DictionaryId) -> Result<bool, DictionaryError> {
        let affected = self
            .execute("DELETE FROM dictionaries WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }
}

fn row_to_dictionary(row: &Row) -> Result<Dictionary, DictionaryError> {
    let id: DictionaryId = row.get(0).map_err(|e| DictionaryError::Storage(e.to_string()))?;
    let name: String = row.get(1).map_err(|e| DictionaryError::Storage(e.to_string()))?;
    let words_json: String = row.get(2).map_err(|e| DictionaryError::Storage(e.to_string()))?;
    let created_at: String = row.get(3).map_err(|e| DictionaryError::Storage(e.to_string()))?;

    let words: Vec<WordPair> = serde_json::from_str(&words_json).map_err(|e| {
        DictionaryError::Storage(format!("Corrupt word list for dictionary {}: {}", id, e))
    })?;

    Ok(Dictionary {
        id,
        name,
        words,
        created_at,
    })
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
