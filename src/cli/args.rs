//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pipeline::config::{IdfMode, InclusionFilter, PipelineConfig, TokenizerMode};

/// Lexis - a step-by-step Bag-of-Words and TF-IDF teaching pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Derive Bag-of-Words and TF-IDF statistics step by step")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexis Contributors")]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full pipeline over three documents
    Analyze(AnalyzeArgs),

    /// Show the analysis chain's output for a single input
    Tokenize(TokenizeArgs),
}

/// Arguments for running the full pipeline
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The three documents, as literal text
    #[arg(value_name = "DOCUMENT", num_args = 0..=3)]
    pub documents: Vec<String>,

    /// Read the three documents from files instead of arguments
    #[arg(long = "file", value_name = "FILE", num_args = 1, action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Tokenization variant
    #[arg(short, long, default_value = "word")]
    pub tokenizer: TokenizerMode,

    /// Token inclusion variant
    #[arg(short = 'i', long = "filter", default_value = "alphabetic")]
    pub inclusion: InclusionFilter,

    /// IDF presentation variant
    #[arg(long = "idf", default_value = "symbolic")]
    pub idf_mode: IdfMode,
}

impl AnalyzeArgs {
    /// The pipeline configuration these arguments select.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            tokenizer_mode: self.tokenizer,
            inclusion_filter: self.inclusion,
            idf_mode: self.idf_mode,
        }
    }
}

/// Arguments for tokenizing a single input
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// The text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Tokenization variant
    #[arg(short, long, default_value = "word")]
    pub tokenizer: TokenizerMode,

    /// Token inclusion variant
    #[arg(short = 'i', long = "filter", default_value = "alphabetic")]
    pub inclusion: InclusionFilter,

    /// Also show the tokens the filter chain rejected
    #[arg(long)]
    pub show_rejected: bool,
}

impl TokenizeArgs {
    /// The pipeline configuration these arguments select.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            tokenizer_mode: self.tokenizer,
            inclusion_filter: self.inclusion,
            idf_mode: IdfMode::default(),
        }
    }
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable step-by-step tables
    Human,
    /// JSON output
    Json,
}
