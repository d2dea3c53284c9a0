//! The pipeline's result structure.

use serde::{Deserialize, Serialize};

use crate::pipeline::config::PipelineConfig;
use crate::pipeline::weighting::Weight;

/// Every table a pipeline run produces, in display order.
///
/// Grids are oriented documents × vocabulary: `counts[d][t]` is the count
/// of vocabulary term `t` in document `d`, with `t` indexing into
/// [`vocabulary`](Self::vocabulary). The report owns all of its data; once
/// returned, it has no tie to the pipeline that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// The configuration this run used.
    pub config: PipelineConfig,

    /// Ordered token sequence per document, duplicates preserved.
    pub tokens: Vec<Vec<String>>,

    /// Sorted distinct terms across all documents.
    pub vocabulary: Vec<String>,

    /// Raw occurrence counts, documents × vocabulary.
    pub counts: Vec<Vec<u32>>,

    /// Term frequency (count / document total, 3 decimal places),
    /// documents × vocabulary.
    pub term_frequency: Vec<Vec<f64>>,

    /// Number of documents containing each term at least once.
    pub document_frequency: Vec<u32>,

    /// IDF weight per vocabulary term.
    pub idf: Vec<Weight>,

    /// TF-IDF weight per (document, term) cell, documents × vocabulary.
    pub tf_idf: Vec<Vec<Weight>>,
}

impl PipelineReport {
    /// Look up a term's column index in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Number of tokens in the given document that matched the vocabulary.
    pub fn doc_token_total(&self, doc: usize) -> u32 {
        self.counts[doc].iter().sum()
    }
}
