//! Text analysis module for Lexis.
//!
//! This module provides the first stage of the teaching pipeline:
//! tokenization and token filtering, combined into analysis chains.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
