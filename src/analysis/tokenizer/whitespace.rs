//! Whitespace tokenizer implementation.
//!
//! This is the simplest tokenizer variant: tokens are maximal runs of
//! non-whitespace characters, exactly what a student gets from splitting a
//! sentence on spaces. Punctuation stays attached to the neighbouring word
//! and is dealt with by the filter chain.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenizer::Tokenizer;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello,");
//! assert_eq!(tokens[1].text, "world!");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(word_start) = start.take() {
                    let word = &text[word_start..offset];
                    tokens.push(Token::with_offsets(word, position, word_start, offset));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        // Trailing word without terminating whitespace
        if let Some(word_start) = start {
            let word = &text[word_start..];
            tokens.push(Token::with_offsets(word, position, word_start, text.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
