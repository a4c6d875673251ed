//! Autocomplete front end.
//!
//! Glue between user input and the prefix trie: build a trie from the
//! configured word list, answer prefix queries, and render the answers the
//! way the command-line front end prints them.

mod render;
mod session;
pub mod source;

pub use render::render_completions;
pub use session::{run_session, write_answer, PROMPT};
pub use source::{load_words, BuiltinWords, FileWords, LoadReport, WordSource};

use serde::Serialize;

use crate::config::AppConfig;
use crate::data_structures::prefix_trie::{SharedTrie, Trie, TrieConfig};
use crate::error::AppResult;

/// The answer to one prefix query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// The prefix as typed
    pub prefix: String,

    /// Whether any stored word starts with the prefix
    pub found: bool,

    /// Suffixes or full words, depending on the query
    pub completions: Vec<String>,
}

impl Completion {
    /// Render this answer as the front end prints it.
    pub fn render(&self) -> String {
        let completions = self.found.then_some(self.completions.as_slice());
        render_completions(&self.prefix, completions)
    }
}

/// Answers prefix queries against a shared trie.
#[derive(Debug, Clone, Default)]
pub struct Autocompleter {
    trie: SharedTrie,
}

impl Autocompleter {
    /// Wraps an already populated trie.
    pub fn new(trie: Trie) -> Self {
        Self {
            trie: SharedTrie::from(trie),
        }
    }

    /// Builds a trie from the configured word list.
    ///
    /// Uses the file in `config.words.path` if set, otherwise the built-in
    /// sample list.
    pub fn from_config(config: &AppConfig) -> AppResult<(Self, LoadReport)> {
        match &config.words.path {
            Some(path) => Self::from_source(config, &FileWords::new(path)),
            None => Self::from_source(config, &BuiltinWords),
        }
    }

    /// Builds a trie from `source` using the trie settings in `config`.
    pub fn from_source(
        config: &AppConfig,
        source: &dyn WordSource,
    ) -> AppResult<(Self, LoadReport)> {
        let mut trie = Trie::with_config(TrieConfig::from(&config.trie));
        let report = load_words(&mut trie, source, config.words.skip_invalid)?;
        Ok((Self::new(trie), report))
    }

    /// The underlying shared trie.
    pub fn trie(&self) -> &SharedTrie {
        &self.trie
    }

    /// Look up `prefix`, returning suffixes or, with `full_words`, complete words.
    pub fn query(&self, prefix: &str, full_words: bool) -> Completion {
        let completions = if full_words {
            self.trie.complete(prefix)
        } else {
            self.trie.suffixes(prefix)
        };

        Completion {
            prefix: prefix.to_string(),
            found: completions.is_some(),
            completions: completions.unwrap_or_default(),
        }
    }
}
