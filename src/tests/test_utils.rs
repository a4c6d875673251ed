//! Test utilities and fixtures.
//!
//! Reusable strategies for property-based tests and a fixture for tests that
//! need files on disk or environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum length of generated words.
pub const MAX_WORD_LENGTH: usize = 12;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for non-empty lowercase ASCII words.
///
/// Draws from a small alphabet so generated words share prefixes often.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-f]{{1,{MAX_WORD_LENGTH}}}"))
        .expect("word regex is valid")
        .boxed()
}

/// Generate a strategy for lists of words, possibly containing duplicates.
pub fn word_list_strategy(max_words: usize) -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..max_words).boxed()
}

/// Generate a strategy for prefixes, including the empty prefix.
pub fn prefix_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => proptest::string::string_regex("[a-g]{1,4}").expect("prefix regex is valid"),
    ]
    .boxed()
}

/// Test fixture for tests requiring files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_test_dir()?;
        Ok(Self {
            temp_dir,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Create a file within the fixture directory.
    ///
    /// The file lives as long as the fixture.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        contents: C,
        extension: &str,
    ) -> std::io::Result<std::path::PathBuf> {
        let file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile_in(&self.temp_dir)?;
        let (mut file, path) = file.keep()?;
        std::io::Write::write_all(&mut file, contents.as_ref())?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
