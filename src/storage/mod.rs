//! Storage abstraction layer for dictionary records.
//!
//! The dictionary store talks to storage only through [`DictionaryBackend`],
//! which TursoClient implements for the embedded database.

mod traits;

pub use traits::DictionaryBackend;
