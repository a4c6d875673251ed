//! Errors raised while loading and checking the autocomplete configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading a config file and handing a
/// validated [`AppConfig`](crate::config::AppConfig) to the engine.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--config` path does not exist.
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file, an environment override, or the merged result could not be
    /// turned into an `AppConfig`.
    #[error("Could not parse config: {0}")]
    ParseError(String),

    /// `log.level` is not one of the tracing levels.
    #[error("Unknown log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    /// `words.path` points at something that cannot be used as a word list.
    #[error("Word list {path} is unusable: {reason}")]
    WordList {
        /// The configured word list path
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// A numeric trie setting is outside its allowed range.
    #[error("Setting {key} out of range: {message}")]
    ValueOutOfRange {
        /// Dotted key of the setting, e.g. `trie.max_word_length`
        key: String,
        /// The allowed range
        message: String,
    },
}
