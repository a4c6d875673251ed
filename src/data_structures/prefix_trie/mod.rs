//! Prefix Trie Implementation
//!
//! This module provides the trie behind the autocomplete engine: words go in
//! through [`Trie::insert`], a prefix is located with [`Trie::find`], and the
//! completions beneath it come from [`TrieNode::suffixes`].
//!
//! # Example
//!
//! ```
//! use prefix_autocomplete_lib::data_structures::prefix_trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["fun", "function", "factory"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! let node = trie.find("f").expect("prefix is present");
//! assert_eq!(node.suffixes(), vec!["actory", "un", "unction"]);
//! assert!(trie.find("xyz").is_none());
//! ```

mod config;
mod error;
mod node;
mod shared;

pub use config::{Alphabet, TrieConfig};
pub use error::{TrieError, TrieResult};
pub use node::TrieNode;
pub use shared::SharedTrie;

/// A prefix tree of words.
///
/// Key features:
/// * Validation against a configurable alphabet before any node is created
/// * Optional case folding of words and prefixes
/// * Deterministic completion order (ascending by character)
/// * Monotonic growth: words are never removed
#[derive(Debug)]
pub struct Trie {
    /// The root node of the trie (the empty prefix)
    root: TrieNode,

    /// Number of distinct words stored
    len: usize,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            len: 0,
            config,
        }
    }

    /// The configuration this trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// The word is case folded if configured, then checked in full before the
    /// trie is touched, so a rejected word leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already present.
    /// * `Err(TrieError)` - If the word is empty, too long, or contains a
    ///   character outside the configured alphabet.
    pub fn insert<W>(&mut self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.config.normalize(word.as_ref());
        self.validate(&word)?;

        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.ensure_child(c));

        let is_new = node.mark_terminal();
        if is_new {
            self.len += 1;
        }
        tracing::trace!(word = %word, is_new, "inserted word");

        Ok(is_new)
    }

    /// Inserts every word from `words`, stopping at the first invalid one.
    ///
    /// Words inserted before the failure stay in the trie.
    ///
    /// # Returns
    ///
    /// The number of words that were new.
    pub fn extend<I, W>(&mut self, words: I) -> TrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word)? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn validate(&self, word: &str) -> TrieResult<()> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let alphabet = self.config.alphabet();
        let mut length = 0;
        for (position, character) in word.chars().enumerate() {
            if !alphabet.contains(character) {
                return Err(TrieError::InvalidCharacter {
                    word: word.to_string(),
                    character,
                    position,
                    alphabet: alphabet.name(),
                });
            }
            length = position + 1;
        }

        if length > self.config.max_word_length() {
            return Err(TrieError::WordTooLong {
                word: word.to_string(),
                max_length: self.config.max_word_length(),
            });
        }

        Ok(())
    }

    /// Finds the node that represents `prefix`.
    ///
    /// The empty prefix resolves to the root. A found node may have no
    /// completions at all; that is still a found prefix.
    ///
    /// # Returns
    ///
    /// * `Some(&TrieNode)` - The node at the end of the prefix path.
    /// * `None` - No inserted word starts with `prefix`.
    pub fn find<P>(&self, prefix: P) -> Option<&TrieNode>
    where
        P: AsRef<str>,
    {
        let prefix = self.config.normalize(prefix.as_ref());
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Checks if `word` was inserted (as opposed to only being a prefix).
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find(word).is_some_and(TrieNode::is_terminal)
    }

    /// Completions for `prefix` as full words rather than suffixes.
    ///
    /// # Returns
    ///
    /// * `Some(Vec<String>)` - Every stored word starting with `prefix`, in trie order.
    /// * `None` - The prefix was not found.
    pub fn complete<P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: AsRef<str>,
    {
        let prefix = self.config.normalize(prefix.as_ref());
        let node = self.find(&*prefix)?;
        Some(
            node.suffixes()
                .into_iter()
                .map(|suffix| format!("{prefix}{suffix}"))
                .collect(),
        )
    }

    /// Every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.root.suffixes()
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, not counting the root.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
