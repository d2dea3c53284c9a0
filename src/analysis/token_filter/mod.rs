//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod alphabetic;
pub mod lowercase;
pub mod trim_punctuation;

// Re-export all filters for convenient access
pub use alphabetic::AlphabeticFilter;
pub use lowercase::LowercaseFilter;
pub use trim_punctuation::TrimPunctuationFilter;
