//! Node implementation for the prefix trie.
//!
//! This module provides the TrieNode structure used by the prefix trie.
//! Each node stands for one character position; its children extend the
//! prefix it represents by one more character.

use std::collections::btree_map::{self, BTreeMap};

/// A node in the prefix trie.
///
/// Each node owns its children outright. Terminal nodes mark the end of an
/// inserted word.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// The character this node represents (`None` for the root)
    character: Option<char>,

    /// Map of characters to child nodes, iterated in ascending character order
    children: BTreeMap<char, TrieNode>,

    /// Whether an inserted word ends exactly at this node
    is_terminal: bool,
}

impl TrieNode {
    /// Creates the root node, which represents the empty prefix.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a new node for `character`.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// The character this node represents, or `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether an inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The child for `character`, if any.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> btree_map::Iter<'_, char, TrieNode> {
        self.children.iter()
    }

    /// Returns the child for `character`, creating it first if it does not exist.
    pub fn ensure_child(&mut self, character: char) -> &mut TrieNode {
        self.children
            .entry(character)
            .or_insert_with(|| TrieNode::new(character))
    }

    /// Marks this node as the end of a word. Returns `true` if it was not
    /// terminal before.
    pub fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.is_terminal, true)
    }

    /// Collects every word completion below this node.
    ///
    /// Each returned string is the part of a stored word after the prefix this
    /// node represents. If the node is itself terminal the empty string comes
    /// first. Results follow a depth-first pre-order walk with siblings in
    /// ascending character order.
    pub fn suffixes(&self) -> Vec<String> {
        let mut results = Vec::new();
        let mut buffer = String::new();
        self.collect_suffixes(&mut buffer, &mut results);
        results
    }

    fn collect_suffixes(&self, buffer: &mut String, results: &mut Vec<String>) {
        if self.is_terminal {
            results.push(buffer.clone());
        }

        for (c, child) in &self.children {
            buffer.push(*c);
            child.collect_suffixes(buffer, results);
            buffer.pop();
        }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&TrieNode> = self.children.values().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }
}

// Children are drained onto a heap stack so dropping a deep chain never
// recurses once per level.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
