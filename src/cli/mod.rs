//! Command Line Interface for the Lexis teaching pipeline.
//!
//! This is the presentation shell around the core: it gathers the three
//! documents, validates that none of them is empty, runs the pipeline, and
//! renders each derivation step for the reader.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
