//! Word list configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WordListConfig {
    /// Word list file, one word per line (None for the built-in sample list)
    pub path: Option<PathBuf>,

    /// Whether to skip words the trie rejects instead of failing the load
    pub skip_invalid: bool,
}

impl Validate for WordListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            let reason = if !path.exists() {
                "file does not exist"
            } else if !path.is_file() {
                "not a regular file"
            } else {
                return Ok(());
            };
            return Err(ConfigError::WordList {
                path: path.clone(),
                reason: reason.to_string(),
            });
        }

        Ok(())
    }
}
