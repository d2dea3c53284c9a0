//! Unicode word-boundary tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). Punctuation and whitespace segments are not
//! word-like and are skipped, so `"Hello, world!"` yields exactly the two
//! tokens a word-aware tokenizer should.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenizer::Tokenizer;
//! use lexis::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
//!
//! let tokenizer = WordBoundaryTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, which handles international text (accented Latin, CJK, etc.)
/// correctly. Only word-like segments are emitted.
///
/// # Examples
///
/// ```
/// use lexis::analysis::tokenizer::Tokenizer;
/// use lexis::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
///
/// let tokenizer = WordBoundaryTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("café résumé").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "café");
/// assert_eq!(tokens[1].text, "résumé");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordBoundaryTokenizer;

impl WordBoundaryTokenizer {
    /// Create a new Unicode word-boundary tokenizer.
    pub fn new() -> Self {
        WordBoundaryTokenizer
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (offset, word))| {
                Token::with_offsets(word, position, offset, offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_boundary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_tokenizer() {
        let tokenizer = WordBoundaryTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_word_boundary_tokenizer_offsets() {
        let tokenizer = WordBoundaryTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("cat, mat").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 3);
        assert_eq!(tokens[1].start_offset, 5);
        assert_eq!(tokens[1].end_offset, 8);
    }

    #[test]
    fn test_word_boundary_tokenizer_contractions() {
        let tokenizer = WordBoundaryTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("don't stop").unwrap().collect();

        // UAX #29 keeps contractions together
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "don't");
        assert_eq!(tokens[1].text, "stop");
    }

    #[test]
    fn test_word_boundary_tokenizer_numbers() {
        let tokenizer = WordBoundaryTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("chapter 42 begins").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "42");
    }

    #[test]
    fn test_word_boundary_tokenizer_empty() {
        let tokenizer = WordBoundaryTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert_eq!(tokens.len(), 0);

        let tokens: Vec<Token> = tokenizer.tokenize("... !!!").unwrap().collect();
        assert_eq!(tokens.len(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordBoundaryTokenizer::new().name(), "word_boundary");
    }
}
