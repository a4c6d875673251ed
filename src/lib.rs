//! Prefix Autocomplete Library
//!
//! This library contains the prefix trie behind the autocomplete front end,
//! together with its configuration, error handling and word-list loading.
//! The library is designed to be used by the binary crate, but can also be
//! used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_trie`]: the trie itself (insert, find, suffixes)
//! - [`autocomplete`]: word sources, query answers and their rendering
//! - [`config`]: layered configuration with validation
//! - [`error`]: crate-level error type and error reporting

pub mod autocomplete;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
