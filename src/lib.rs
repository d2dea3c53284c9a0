//! # Lexis
//!
//! A step-by-step Bag-of-Words and TF-IDF teaching pipeline for Rust.
//!
//! Lexis takes exactly three documents and derives, one visible step at a
//! time, the classic text feature-extraction statistics: tokens, vocabulary,
//! raw counts, term frequency, document frequency, and the IDF / TF-IDF
//! weights — either as evaluated numbers or as the unevaluated formula
//! strings students are expected to work out by hand.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Configurable analysis pipeline (tokenizer + filter chain)
//! - Whitespace and Unicode word-boundary tokenization
//! - Symbolic or numeric IDF weighting
//! - Every intermediate table exposed for display
//!
//! ## Example
//!
//! ```
//! use lexis::pipeline::config::PipelineConfig;
//! use lexis::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let report = pipeline
//!     .run([
//!         "the cat sat on the mat",
//!         "the dog sat on the log",
//!         "the cat and the dog played",
//!     ])
//!     .unwrap();
//!
//! assert_eq!(
//!     report.vocabulary,
//!     ["and", "cat", "dog", "log", "mat", "on", "played", "sat", "the"]
//! );
//! assert_eq!(report.document_frequency[report.term_index("the").unwrap()], 3);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pipeline;

/// The number of documents every pipeline run operates on.
pub const DOC_COUNT: usize = 3;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
