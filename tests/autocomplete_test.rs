// Copyright (c) 2025 Prefix Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the prefix trie and the autocomplete front end,
//! exercised through the public library API only.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use prefix_autocomplete_lib::autocomplete::{render_completions, Autocompleter, BuiltinWords};
use prefix_autocomplete_lib::config::AppConfig;
use prefix_autocomplete_lib::data_structures::prefix_trie::{
    Alphabet, SharedTrie, Trie, TrieConfig, TrieError,
};

const WORDS: [&str; 11] = [
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

fn as_set(items: Vec<String>) -> HashSet<String> {
    items.into_iter().collect()
}

fn set_of(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_autocomplete_scenario() {
    let mut trie = Trie::new();
    for word in WORDS {
        trie.insert(word).unwrap();
    }

    let f = trie.find("f").expect("f is a stored prefix");
    assert_eq!(as_set(f.suffixes()), set_of(&["un", "unction", "actory"]));

    let tri = trie.find("tri").expect("tri is a stored prefix");
    assert_eq!(as_set(tri.suffixes()), set_of(&["e", "gger", "gonometry", "pod"]));

    assert!(trie.find("xyz").is_none());

    let before = trie.words();
    assert_eq!(trie.insert(""), Err(TrieError::EmptyWord));
    assert_eq!(trie.words(), before);
}

#[test]
fn test_suffix_plus_prefix_reconstructs_words() {
    let mut trie = Trie::new();
    trie.extend(WORDS).unwrap();

    for prefix in ["", "a", "ant", "anto", "fu", "t", "trig"] {
        let node = trie.find(prefix).unwrap();
        for suffix in node.suffixes() {
            let word = format!("{prefix}{suffix}");
            assert!(WORDS.contains(&word.as_str()), "{word} was never inserted");
        }
    }
}

#[test]
fn test_empty_trie_is_queryable() {
    let trie = Trie::new();
    assert!(trie.find("a").is_none());

    let root = trie.find("").unwrap();
    assert!(root.suffixes().is_empty());
    assert!(trie.is_empty());
}

#[test]
fn test_unicode_alphabet_with_case_folding() {
    let config = TrieConfig::new()
        .with_alphabet(Alphabet::UnicodeAlphabetic)
        .with_fold_case(true);
    let mut trie = Trie::with_config(config);

    trie.extend(["Café", "cafétéria", "über"]).unwrap();
    assert_eq!(trie.complete("CAF").unwrap(), vec!["café", "cafétéria"]);
    assert_eq!(trie.find("caf").unwrap().suffixes(), vec!["é", "étéria"]);
    assert!(trie.insert("two words").is_err());
}

#[test]
fn test_front_end_rendering() {
    let (autocompleter, _) =
        Autocompleter::from_source(&AppConfig::default(), &BuiltinWords).unwrap();

    assert_eq!(autocompleter.query("f", false).render(), "actory\nun\nunction");
    assert_eq!(autocompleter.query("xyz", false).render(), "xyz not found");
    assert_eq!(autocompleter.query("", false).render(), "");
    assert_eq!(render_completions("q", None), "q not found");
}

#[test]
fn test_shared_trie_across_threads() {
    const THREADS: usize = 4;

    let shared = SharedTrie::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Every thread inserts the full list; duplicates must collapse
                for word in WORDS {
                    shared.insert(word).unwrap();
                }
                shared.suffixes(&WORDS[i][..1]).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() > 0);
    }

    assert_eq!(shared.len(), WORDS.len());
    assert_eq!(
        as_set(shared.suffixes("tri").unwrap()),
        set_of(&["e", "gger", "gonometry", "pod"])
    );
}
