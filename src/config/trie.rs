//! Trie configuration module.
//!
//! This module defines how words are accepted into the trie: the alphabet,
//! case folding, and the maximum word length.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_trie::{Alphabet, TrieConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on `max_word_length`; suffix collection recurses once per character.
pub const MAX_WORD_LENGTH_LIMIT: usize = 4096;

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieSettings {
    /// Characters accepted in inserted words
    pub alphabet: Alphabet,

    /// Whether to lowercase words and prefixes before use
    pub fold_case: bool,

    /// Maximum word length in characters
    pub max_word_length: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            fold_case: false,
            max_word_length: TrieConfig::DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 || self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: format!("must be between 1 and {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }
}

impl From<&TrieSettings> for TrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        TrieConfig::new()
            .with_alphabet(settings.alphabet)
            .with_fold_case(settings.fold_case)
            .with_max_word_length(settings.max_word_length.max(1))
    }
}
