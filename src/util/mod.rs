//! Shared utilities.
//!
//! - `runtime`: Tokio runtime helpers for async-to-sync bridges

mod runtime;

pub use runtime::run_async;
