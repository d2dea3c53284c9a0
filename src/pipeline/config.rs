//! Pipeline configuration.
//!
//! The original teaching material existed as a handful of near-duplicate
//! variants: whitespace vs word-aware tokenization, alphabetic-only vs
//! punctuation-stripping inclusion, symbolic vs numeric IDF. This module
//! unifies those variants behind one configuration object chosen at
//! construction time.
//!
//! # Examples
//!
//! ```
//! use lexis::pipeline::config::{IdfMode, InclusionFilter, PipelineConfig, TokenizerMode};
//!
//! let config = PipelineConfig {
//!     tokenizer_mode: TokenizerMode::Word,
//!     inclusion_filter: InclusionFilter::Alphabetic,
//!     idf_mode: IdfMode::Symbolic,
//! };
//!
//! let analyzer = config.build_analyzer();
//! let tokens = analyzer.token_texts("Hello, world!").unwrap();
//! assert_eq!(tokens, ["hello", "world"]);
//! ```

use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::{
    AlphabeticFilter, LowercaseFilter, TokenFilter, TrimPunctuationFilter,
};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, WordBoundaryTokenizer};

/// How raw document text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerMode {
    /// Split on whitespace; punctuation stays attached to words.
    Whitespace,
    /// Split on Unicode word boundaries (UAX #29).
    #[default]
    Word,
}

/// Which tokens are included in the vocabulary and the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InclusionFilter {
    /// Keep only tokens made up entirely of alphabetic characters.
    #[default]
    Alphabetic,
    /// Strip leading/trailing punctuation and keep the rest if non-empty.
    StripPunctuation,
}

/// How the inverse document frequency is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdfMode {
    /// Unevaluated formula strings ("3/2", "0.333 × log(3/2)") for
    /// students to work out by hand.
    #[default]
    Symbolic,
    /// Evaluated natural-log weights rounded to 3 decimal places.
    Numeric,
}

/// Configuration for a pipeline run, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Tokenization variant.
    pub tokenizer_mode: TokenizerMode,
    /// Token inclusion variant.
    pub inclusion_filter: InclusionFilter,
    /// IDF presentation variant.
    pub idf_mode: IdfMode,
}

impl PipelineConfig {
    /// Build the analysis chain this configuration describes.
    ///
    /// Lowercasing always runs first, then the inclusion filter. The
    /// inclusion filter is applied exactly once, here, so vocabulary
    /// construction and counting can never disagree about which tokens
    /// were kept.
    pub fn build_analyzer(&self) -> PipelineAnalyzer {
        let tokenizer: Arc<dyn Tokenizer> = match self.tokenizer_mode {
            TokenizerMode::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerMode::Word => Arc::new(WordBoundaryTokenizer::new()),
        };
        let inclusion: Arc<dyn TokenFilter> = match self.inclusion_filter {
            InclusionFilter::Alphabetic => Arc::new(AlphabeticFilter::new()),
            InclusionFilter::StripPunctuation => Arc::new(TrimPunctuationFilter::new()),
        };

        PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(inclusion)
    }
}
