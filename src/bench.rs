//! Benchmark support for the prefix trie.
//!
//! Provides a deterministic synthetic corpus so benchmark runs are comparable.

/// Seed for the synthetic corpus generator.
const CORPUS_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Generate `count` pseudo-random lowercase words of 1..=`max_len` characters.
///
/// The same arguments always produce the same words. Duplicates are possible.
pub fn synthetic_words(count: usize, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut rng = fastrand::Rng::with_seed(CORPUS_SEED);

    (0..count)
        .map(|_| {
            let len = rng.usize(1..=max_len);
            (0..len)
                // Skewed towards the start of the alphabet so words share prefixes
                .map(|_| (b'a' + (rng.usize(0..26) * rng.usize(0..26) / 25) as u8) as char)
                .collect()
        })
        .collect()
}
