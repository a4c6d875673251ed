//! Word sources for populating the trie.
//!
//! A [`WordSource`] yields the raw word list; [`load_words`] feeds it into a
//! trie and reports what happened to each word.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data_structures::Trie;
use crate::error::AppResult;

/// The sample word list used when no word file is configured.
pub const BUILTIN_WORDS: [&str; 11] = [
    "ant",
    "anthology",
    "antagonist",
    "antonym",
    "fun",
    "function",
    "factory",
    "trie",
    "trigger",
    "trigonometry",
    "tripod",
];

/// Something that can produce a list of words.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Human-readable name used in logs.
    fn name(&self) -> String;

    /// Produce the words, in insertion order.
    fn words(&self) -> AppResult<Vec<String>>;
}

/// The built-in sample word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    fn words(&self) -> AppResult<Vec<String>> {
        Ok(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

/// A word list file with one word per line.
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with `#`
/// are ignored.
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    /// Creates a source reading from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Extract words from the contents of a word list file.
    pub fn parse(contents: &str) -> Vec<String> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

impl WordSource for FileWords {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn words(&self) -> AppResult<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(Self::parse(&contents))
    }
}

/// Outcome of loading a word source into a trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Words that were new to the trie
    pub inserted: usize,

    /// Words that were already present
    pub duplicates: usize,

    /// Words the trie rejected (only non-zero when skipping invalid words)
    pub skipped: usize,
}

/// Insert every word from `source` into `trie`.
///
/// With `skip_invalid` set, rejected words are logged and counted; otherwise
/// the first rejected word aborts the load. Words inserted before an abort
/// stay in the trie.
pub fn load_words(
    trie: &mut Trie,
    source: &dyn WordSource,
    skip_invalid: bool,
) -> AppResult<LoadReport> {
    let name = source.name();
    let words = source.words()?;
    tracing::debug!(source = %name, count = words.len(), "loading words");

    let mut report = LoadReport::default();
    for word in &words {
        match trie.insert(word) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(e) if skip_invalid => {
                tracing::warn!(source = %name, error = %e, "skipping invalid word");
                report.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(
        source = %name,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "finished loading words"
    );
    Ok(report)
}
