//! Data structures for the autocomplete engine.
//!
//! This module contains the prefix trie that stores the word list and
//! answers prefix queries.

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{SharedTrie, Trie, TrieError, TrieNode, TrieResult};
