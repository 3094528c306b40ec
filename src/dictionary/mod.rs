// Dictionary module - named dictionaries of word/translation pairs and their store

mod error;
mod locks;
mod store;
mod types;

pub use error::DictionaryError;
pub use store::DictionaryStore;
pub use types::{Dictionary, DictionaryId, DuplicatePolicy, WordPair};
