//! Raw counts and the frequency statistics derived from them.
//!
//! Three tables live here, each one teaching step further along:
//!
//! - the count matrix (documents × vocabulary, raw occurrence counts),
//! - the term-frequency matrix (counts normalized by document length,
//!   rounded to 3 decimal places),
//! - the document-frequency vector (in how many documents each term
//!   appears at least once).
//!
//! Counting goes through a per-document count map, so each document is
//! scanned once regardless of vocabulary size.

use std::collections::HashMap;

/// Round a value to 3 decimal places, the precision every displayed table
/// uses.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compute the documents × vocabulary matrix of raw occurrence counts.
///
/// Row order follows `token_sequences`, column order follows `vocabulary`.
/// Each row sums to the number of tokens in that document that matched a
/// vocabulary term.
pub fn count_matrix(token_sequences: &[Vec<String>], vocabulary: &[String]) -> Vec<Vec<u32>> {
    token_sequences
        .iter()
        .map(|tokens| {
            let mut counts: HashMap<&str, u32> = HashMap::with_capacity(tokens.len());
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            vocabulary
                .iter()
                .map(|term| counts.get(term.as_str()).copied().unwrap_or(0))
                .collect()
        })
        .collect()
}

/// Derive the term-frequency matrix from raw counts.
///
/// Each cell is count / document total, rounded to 3 decimal places. A
/// document with no matched tokens gets a defined all-zero row rather than
/// a division fault.
pub fn term_frequency_matrix(counts: &[Vec<u32>]) -> Vec<Vec<f64>> {
    counts
        .iter()
        .map(|row| {
            let total: u32 = row.iter().sum();
            if total == 0 {
                return vec![0.0; row.len()];
            }
            row.iter()
                .map(|&count| round3(count as f64 / total as f64))
                .collect()
        })
        .collect()
}

/// Derive the document-frequency vector from raw counts.
///
/// For each vocabulary term, the number of documents containing it at least
/// once. By construction every vocabulary term appears in at least one
/// document, so each entry is in `1..=counts.len()`.
pub fn document_frequency(counts: &[Vec<u32>]) -> Vec<u32> {
    let terms = counts.first().map(|row| row.len()).unwrap_or(0);
    (0..terms)
        .map(|column| {
            counts
                .iter()
                .filter(|row| row[column] > 0)
                .count() as u32
        })
        .collect()
}
