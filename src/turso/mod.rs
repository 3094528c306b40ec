// Turso/libsql embedded storage for dictionary records

mod client;
mod dictionary;
mod schema;

pub use client::{TursoClient, TursoError};
pub use schema::initialize_schema;
