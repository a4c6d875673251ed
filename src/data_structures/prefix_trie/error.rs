// Copyright (c) 2025 Prefix Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix trie.
//!
//! Every variant describes invalid input to `insert`. A prefix that is absent
//! from the trie is not an error; `find` reports it as `None`.

/// Errors that can occur in prefix trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside the configured alphabet.
    #[error("Word '{word}' contains character {character:?} at position {position}, which is outside the {alphabet} alphabet")]
    InvalidCharacter {
        /// The rejected word (after normalization).
        word: String,
        /// The first offending character.
        character: char,
        /// Character index of the offending character.
        position: usize,
        /// Name of the configured alphabet.
        alphabet: &'static str,
    },

    /// Error when a word exceeds the maximum trie depth.
    #[error("Word '{word}' exceeds maximum word length of {max_length}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },
}

/// Result type for prefix trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = TrieError::InvalidCharacter {
            word: "caf3".to_string(),
            character: '3',
            position: 3,
            alphabet: "lowercase_ascii",
        };
        assert_eq!(
            err.to_string(),
            "Word 'caf3' contains character '3' at position 3, which is outside the lowercase_ascii alphabet"
        );

        let err = TrieError::WordTooLong {
            word: "test".to_string(),
            max_length: 3,
        };
        assert_eq!(err.to_string(), "Word 'test' exceeds maximum word length of 3");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TrieError::EmptyWord, TrieError::EmptyWord);
        assert_ne!(
            TrieError::EmptyWord,
            TrieError::WordTooLong {
                word: "a".to_string(),
                max_length: 0
            }
        );
    }
}
