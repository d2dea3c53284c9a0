//! The statistics pipeline: three documents in, seven tables out.
//!
//! This module wires the analysis chain and the derivation steps into one
//! pure, single-pass run:
//!
//! ```text
//! raw strings → tokens → vocabulary → counts → TF / DF / IDF / TF-IDF
//! ```
//!
//! Every run recomputes everything from scratch and the result owns all of
//! its data — there is no cache, no shared state between runs, and nothing
//! survives a run besides the returned [`PipelineReport`].

pub mod config;
pub mod frequency;
pub mod report;
pub mod vocabulary;
pub mod weighting;

pub use config::PipelineConfig;
pub use report::PipelineReport;
pub use weighting::Weight;

use log::debug;

use crate::DOC_COUNT;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::error::Result;
use crate::pipeline::frequency::{count_matrix, document_frequency, term_frequency_matrix};
use crate::pipeline::vocabulary::build_vocabulary;
use crate::pipeline::weighting::{idf_weights, tf_idf_matrix};

/// The Bag-of-Words / TF-IDF derivation pipeline.
///
/// A pipeline is configured once and can be run any number of times; runs
/// are independent and deterministic.
///
/// # Examples
///
/// ```
/// use lexis::pipeline::{Pipeline, PipelineConfig};
///
/// let pipeline = Pipeline::new(PipelineConfig::default());
/// let report = pipeline
///     .run(["the cat sat", "the dog sat", "the cat and dog"])
///     .unwrap();
///
/// assert_eq!(report.vocabulary, ["and", "cat", "dog", "sat", "the"]);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: PipelineAnalyzer,
}

impl Pipeline {
    /// Create a pipeline for the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline {
            analyzer: config.build_analyzer(),
            config,
        }
    }

    /// Get this pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline over exactly three documents.
    ///
    /// Documents may tokenize to nothing (all tokens filtered away); such
    /// documents get all-zero count and TF rows. Validating that the raw
    /// strings are non-empty is the presentation layer's job and happens
    /// before this is called.
    pub fn run(&self, documents: [&str; DOC_COUNT]) -> Result<PipelineReport> {
        let mut tokens = Vec::with_capacity(DOC_COUNT);
        for document in documents {
            tokens.push(self.analyzer.token_texts(document)?);
        }
        debug!(
            "tokenized {} documents ({} tokens total)",
            DOC_COUNT,
            tokens.iter().map(Vec::len).sum::<usize>()
        );

        let vocabulary = build_vocabulary(&tokens);
        debug!("vocabulary has {} distinct terms", vocabulary.len());

        let counts = count_matrix(&tokens, &vocabulary);
        let term_frequency = term_frequency_matrix(&counts);
        let document_frequency = document_frequency(&counts);
        let idf = idf_weights(&document_frequency, DOC_COUNT, self.config.idf_mode);
        let tf_idf = tf_idf_matrix(
            &term_frequency,
            &document_frequency,
            DOC_COUNT,
            self.config.idf_mode,
        );

        Ok(PipelineReport {
            config: self.config,
            tokens,
            vocabulary,
            counts,
            term_frequency,
            document_frequency,
            idf,
            tf_idf,
        })
    }
}
