// Copyright (c) 2025 Prefix Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the prefix trie.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The set of characters a trie accepts in inserted words.
///
/// Characters outside the alphabet are rejected by `insert` instead of being
/// stored as unexpected child keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `a` through `z`.
    #[default]
    LowercaseAscii,
    /// `a` through `z` and `A` through `Z`.
    AsciiAlphabetic,
    /// ASCII letters and digits.
    AsciiAlphanumeric,
    /// Any character Unicode classifies as alphabetic.
    UnicodeAlphabetic,
}

impl Alphabet {
    /// Returns `true` if `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::LowercaseAscii => c.is_ascii_lowercase(),
            Self::AsciiAlphabetic => c.is_ascii_alphabetic(),
            Self::AsciiAlphanumeric => c.is_ascii_alphanumeric(),
            Self::UnicodeAlphabetic => c.is_alphabetic(),
        }
    }

    /// Name used in error messages and configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::LowercaseAscii => "lowercase_ascii",
            Self::AsciiAlphabetic => "ascii_alphabetic",
            Self::AsciiAlphanumeric => "ascii_alphanumeric",
            Self::UnicodeAlphabetic => "unicode_alphabetic",
        }
    }
}

/// Configuration for the prefix trie.
///
/// Built with chained `with_*` calls:
///
/// ```
/// use prefix_autocomplete_lib::data_structures::prefix_trie::{Alphabet, TrieConfig};
///
/// let config = TrieConfig::new()
///     .with_alphabet(Alphabet::AsciiAlphabetic)
///     .with_fold_case(true)
///     .with_max_word_length(32);
/// assert_eq!(config.max_word_length(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Characters accepted in inserted words
    alphabet: Alphabet,

    /// Lowercase words and prefixes before they touch the trie
    fold_case: bool,

    /// Maximum word length in characters (bounds the recursion depth of suffix collection)
    max_word_length: usize,
}

impl TrieConfig {
    /// Default maximum word length.
    pub const DEFAULT_MAX_WORD_LENGTH: usize = 64;

    /// Create a new default configuration.
    ///
    /// Default values:
    /// - alphabet: lowercase ASCII
    /// - fold_case: false
    /// - max_word_length: 64
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::default(),
            fold_case: false,
            max_word_length: Self::DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Set the accepted alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Lowercase words and prefixes before inserting or looking them up.
    ///
    /// With the default lowercase alphabet this lets `"Fun"` be stored as `"fun"`
    /// instead of being rejected.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Set the maximum accepted word length in characters.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_length = max_word_length;
        self
    }

    /// The accepted alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Whether input is lowercased before use.
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// The maximum accepted word length in characters.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Apply case folding to a word or prefix.
    pub fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.fold_case && input.chars().any(char::is_uppercase) {
            Cow::Owned(input.to_lowercase())
        } else {
            Cow::Borrowed(input)
        }
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
