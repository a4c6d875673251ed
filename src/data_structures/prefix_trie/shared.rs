//! Thread-safe handle to a prefix trie.
//!
//! The whole trie sits behind one read-write lock. An insert can create nodes
//! at any depth of its path, so writers exclude every reader for the duration
//! of the insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Trie, TrieConfig, TrieResult};

/// A cloneable, lock-guarded [`Trie`].
///
/// Lookups return owned completions because node references cannot outlive
/// the read guard; use [`SharedTrie::with_trie`] for anything else.
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<Trie>>,
}

impl SharedTrie {
    /// Creates an empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shared trie with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self::from(Trie::with_config(config))
    }

    /// Inserts a word under the write lock.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new.
    /// * `Err(TrieError)` - If the word was rejected; the trie is unchanged.
    pub fn insert<W>(&self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let is_new = self.inner.write().insert(word)?;
        if is_new {
            tracing::debug!("shared trie grew by one word");
        }
        Ok(is_new)
    }

    /// Checks if `word` was inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().contains(word)
    }

    /// Suffix completions below `prefix`, or `None` if the prefix is absent.
    pub fn suffixes<P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: AsRef<str>,
    {
        self.inner.read().find(prefix).map(|node| node.suffixes())
    }

    /// Full-word completions for `prefix`, or `None` if the prefix is absent.
    pub fn complete<P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: AsRef<str>,
    {
        self.inner.read().complete(prefix)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against the trie while holding the read lock.
    pub fn with_trie<R>(&self, f: impl FnOnce(&Trie) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}
