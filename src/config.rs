//! Store configuration.
//!
//! The database name and schema version are fixed constants. The data
//! directory and the duplicate pair policy can be set in code or picked up
//! from the environment.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dictionary::DuplicatePolicy;

/// Name of the database (file stem of the SQLite file)
pub const DATABASE_NAME: &str = "dictionaryDB";

/// Schema version written by this crate
pub const SCHEMA_VERSION: i32 = 1;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DICTIONARY_DATA_DIR";

/// Environment variable selecting the duplicate pair policy ("allow" or "reject")
pub const DUPLICATE_POLICY_ENV: &str = "DICTIONARY_DUPLICATE_POLICY";

const APP_DIR_NAME: &str = "dictionary-manager";

/// Configuration for opening a [`crate::DictionaryStore`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
    /// Database file stem
    #[serde(default = "default_database_name")]
    pub database_name: String,
    /// What add_word does with an exact duplicate pair
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

fn default_database_name() -> String {
    DATABASE_NAME.to_string()
}

impl StoreConfig {
    /// Config rooted at `data_dir` with default name and policy
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_name: default_database_name(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Config built from the environment, falling back to the platform data dir.
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let duplicate_policy = match env::var(DUPLICATE_POLICY_ENV) {
            Ok(value) => parse_duplicate_policy(&value).unwrap_or_else(|| {
                crate::warn!(
                    "Ignoring unknown {} value '{}', using default",
                    DUPLICATE_POLICY_ENV,
                    value
                );
                DuplicatePolicy::default()
            }),
            Err(_) => DuplicatePolicy::default(),
        };

        Self {
            data_dir,
            database_name: default_database_name(),
            duplicate_policy,
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.database_name))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Platform data directory for the store, e.g. `~/.local/share/dictionary-manager`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

fn parse_duplicate_policy(value: &str) -> Option<DuplicatePolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "allow" => Some(DuplicatePolicy::Allow),
        "reject" => Some(DuplicatePolicy::Reject),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
