//! Local dictionary store.
//!
//! Named dictionaries of word/translation pairs, persisted in an embedded
//! libsql database. Views talk to [`DictionaryCommands`] (or directly to
//! [`DictionaryStore`]); every mutation is durable once it returns.
//!
//! ```ignore
//! use dictionary_store::{open, StoreConfig};
//!
//! let store = open(&StoreConfig::from_env()).await?;
//! store.create_dictionary("Spanish").await?;
//! store.add_word("Spanish", "hola", "hello").await?;
//! ```

pub mod commands;
pub mod config;
pub mod dictionary;
pub mod events;
pub mod storage;
pub mod turso;
mod util;

use std::sync::Arc;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use commands::DictionaryCommands;
pub use config::StoreConfig;
pub use dictionary::{
    Dictionary, DictionaryError, DictionaryId, DictionaryStore, DuplicatePolicy, WordPair,
};
pub use events::{DictionaryEventEmitter, LogEventEmitter};

/// Open the process-wide store, creating the database on first use.
///
/// Repeated calls return the same handle.
pub async fn open(config: &StoreConfig) -> Result<Arc<DictionaryStore>, DictionaryError> {
    DictionaryStore::shared(config).await
}
