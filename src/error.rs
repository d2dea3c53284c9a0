//! Error types for the Lexis library.
//!
//! This module provides error handling for all Lexis operations. All errors
//! are represented by the [`LexisError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::missing_input("Document 2 is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
///
/// The core pipeline itself is a total function over valid inputs; most of
/// these variants originate at the presentation boundary (argument
/// validation, file reading, output serialization).
#[derive(Error, Debug)]
pub enum LexisError {
    /// One or more of the three input documents is empty or absent.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// I/O errors (reading document files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new missing-input error.
    pub fn missing_input<S: Into<String>>(msg: S) -> Self {
        LexisError::MissingInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidOperation(msg.into())
    }
}
