//! Alphabetic filter implementation.
//!
//! This module provides the stricter of the two inclusion policies: only
//! tokens made up entirely of alphabetic characters survive. Numerals,
//! punctuation tokens, and mixed tokens like "2nd" or "don't" are stopped.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::token_filter::TokenFilter;
//! use lexis::analysis::token_filter::alphabetic::AlphabeticFilter;
//! use lexis::analysis::token::Token;
//!
//! let filter = AlphabeticFilter::new();
//! let tokens = vec![Token::new("cat", 0), Token::new("42", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(!result[0].is_stopped());
//! assert!(result[1].is_stopped());
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that stops every token containing a non-alphabetic character.
///
/// Tokens are marked as stopped rather than removed, so downstream
/// consumers decide whether to drop or display them.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    fn is_alphabetic(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_alphabetic())
    }
}

impl TokenFilter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || Self::is_alphabetic(&token.text) {
                    token
                } else {
                    token.stop()
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
