//! Punctuation-trimming filter implementation.
//!
//! This module provides the lenient inclusion policy: leading and trailing
//! punctuation is stripped from each token and the remainder is kept if
//! non-empty. "Hello," becomes "hello" instead of being discarded, which is
//! what the whitespace tokenizer variant needs to produce clean words.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::token_filter::TokenFilter;
//! use lexis::analysis::token_filter::trim_punctuation::TrimPunctuationFilter;
//! use lexis::analysis::token::Token;
//!
//! let filter = TrimPunctuationFilter::new();
//! let tokens = vec![Token::new("world!", 0), Token::new("---", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "world");
//! assert!(result[1].is_stopped());
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that trims leading and trailing punctuation from tokens.
///
/// # Behavior
///
/// - Trims every leading/trailing character that is not alphanumeric
/// - Interior punctuation is left alone ("don't" stays "don't")
/// - Tokens that are all punctuation are stopped
/// - Skips tokens already marked as stopped
#[derive(Clone, Debug, Default)]
pub struct TrimPunctuationFilter;

impl TrimPunctuationFilter {
    /// Create a new punctuation-trimming filter.
    pub fn new() -> Self {
        TrimPunctuationFilter
    }
}

impl TokenFilter for TrimPunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let trimmed = token.text.trim_matches(|c: char| !c.is_alphanumeric());
                if trimmed.is_empty() {
                    token.stop()
                } else if trimmed.len() == token.text.len() {
                    token
                } else {
                    let trimmed = trimmed.to_string();
                    token.with_text(trimmed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "trim_punctuation"
    }
}
