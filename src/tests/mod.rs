//! Test modules for the autocomplete engine.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and error reporting
//! - Property-based tests of the prefix trie using proptest
//! - Word source loading, with mocked sources
//! - Shared fixtures and strategies

pub mod error_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, prefix_strategy, word_list_strategy, word_strategy, TestFixture,
};
