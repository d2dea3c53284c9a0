//! Analyzer that combines a tokenizer with a chain of token filters.
//!
//! This is the building block behind every tokenization variant: one
//! tokenizer plus an ordered list of filters, applied in sequence.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Tokenizer: splits text into tokens
//! 2. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexis::analysis::analyzer::PipelineAnalyzer;
//! use lexis::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexis::analysis::token_filter::trim_punctuation::TrimPunctuationFilter;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(TrimPunctuationFilter::new()));
//!
//! let tokens = analyzer.token_texts("Hello, world!").unwrap();
//! assert_eq!(tokens, ["hello", "world"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this analyzer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }

    /// Analyze the given text, returning the full token stream.
    ///
    /// Stopped tokens remain in the stream so callers can inspect what the
    /// filter chain rejected.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    /// Analyze the given text and collect the surviving tokens.
    ///
    /// Stopped tokens are dropped; this is the token sequence the rest of
    /// the statistics pipeline consumes and the one shown to students.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.analyze(text)?.filter(|t| !t.is_stopped()).collect())
    }

    /// Analyze the given text and collect only the surviving token text.
    pub fn token_texts(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokens(text)?.into_iter().map(|t| t.text).collect())
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::{AlphabeticFilter, LowercaseFilter, TrimPunctuationFilter};
    use crate::analysis::tokenizer::{WhitespaceTokenizer, WordBoundaryTokenizer};

    #[test]
    fn test_pipeline_analyzer_lowercase_trim() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(TrimPunctuationFilter::new()));

        let tokens = analyzer.token_texts("Hello, World!").unwrap();
        assert_eq!(tokens, ["hello", "world"]);
    }

    #[test]
    fn test_pipeline_analyzer_alphabetic() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordBoundaryTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()));

        let tokens = analyzer.token_texts("The 3 cats sat.").unwrap();
        assert_eq!(tokens, ["the", "cats", "sat"]);
    }

    #[test]
    fn test_pipeline_analyzer_preserves_duplicates_and_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        let tokens = analyzer.token_texts("the cat sat on the mat").unwrap();
        assert_eq!(tokens, ["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_pipeline_analyzer_empty_input() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        assert!(analyzer.token_texts("").unwrap().is_empty());
    }

    #[test]
    fn test_pipeline_analyzer_name() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        assert_eq!(analyzer.name(), "pipeline_whitespace");

        let analyzer = analyzer.with_name("custom");
        assert_eq!(analyzer.name(), "custom");
    }

    #[test]
    fn test_analyze_keeps_stopped_tokens() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()));

        let all: Vec<_> = analyzer.analyze("cat 42").unwrap().collect();
        assert_eq!(all.len(), 2);
        assert!(all[1].is_stopped());
    }
}
