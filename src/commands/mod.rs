// View-facing commands over the dictionary store

mod dictionary;

pub use dictionary::{to_user_error, DictionaryCommands};
