//! Vocabulary construction.
//!
//! The vocabulary is the sorted set of distinct tokens across all documents
//! in a run. Its order defines the column order of every later table, so it
//! must be stable and reproducible for the same inputs — a `BTreeSet` gives
//! both deduplication and lexicographic order in one pass.
//!
//! Tokens arriving here have already been lower-cased and inclusion-filtered
//! by the analysis chain; no further filtering happens at this stage.

use std::collections::BTreeSet;

/// Build the sorted vocabulary over the given token sequences.
///
/// # Examples
///
/// ```
/// use lexis::pipeline::vocabulary::build_vocabulary;
///
/// let docs = vec![
///     vec!["the".to_string(), "cat".to_string(), "the".to_string()],
///     vec!["the".to_string(), "dog".to_string()],
/// ];
/// assert_eq!(build_vocabulary(&docs), ["cat", "dog", "the"]);
/// ```
pub fn build_vocabulary(token_sequences: &[Vec<String>]) -> Vec<String> {
    let unique: BTreeSet<&str> = token_sequences
        .iter()
        .flatten()
        .map(|token| token.as_str())
        .collect();

    unique.into_iter().map(|token| token.to_string()).collect()
}
