//! Command implementations for the Lexis CLI.

use std::fs;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexisError, Result};
use crate::pipeline::Pipeline;
use crate::DOC_COUNT;

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &args),
    }
}

/// Run the full pipeline over three documents.
fn analyze(args: AnalyzeArgs, cli_args: &LexisArgs) -> Result<()> {
    let documents = collect_documents(&args)?;
    validate_documents(&documents)?;

    let config = args.pipeline_config();
    info!(
        "running pipeline (tokenizer: {:?}, filter: {:?}, idf: {:?})",
        config.tokenizer_mode, config.inclusion_filter, config.idf_mode
    );

    let pipeline = Pipeline::new(config);
    let report = pipeline.run([
        documents[0].as_str(),
        documents[1].as_str(),
        documents[2].as_str(),
    ])?;

    output_report(&report, cli_args)
}

/// Show the analysis chain's output for a single input.
fn tokenize(args: TokenizeArgs, cli_args: &LexisArgs) -> Result<()> {
    let analyzer = args.pipeline_config().build_analyzer();
    let all_tokens: Vec<_> = analyzer.analyze(&args.text)?.collect();

    let (rejected, tokens): (Vec<_>, Vec<_>) =
        all_tokens.into_iter().partition(|t| t.is_stopped());

    let result = TokenizeResult {
        analyzer: analyzer.name().to_string(),
        tokens,
        rejected: if args.show_rejected { Some(rejected) } else { None },
    };

    output_tokenize_result(&result, cli_args)
}

/// Gather the three documents from arguments or files.
fn collect_documents(args: &AnalyzeArgs) -> Result<Vec<String>> {
    if !args.documents.is_empty() && !args.files.is_empty() {
        return Err(LexisError::invalid_operation(
            "Provide the documents either as arguments or with --file, not both.",
        ));
    }

    if !args.files.is_empty() {
        if args.files.len() != DOC_COUNT {
            return Err(LexisError::missing_input(format!(
                "Expected exactly {DOC_COUNT} --file arguments, got {}.",
                args.files.len()
            )));
        }
        let mut documents = Vec::with_capacity(DOC_COUNT);
        for path in &args.files {
            documents.push(fs::read_to_string(path)?);
        }
        return Ok(documents);
    }

    if args.documents.len() != DOC_COUNT {
        return Err(LexisError::missing_input(format!(
            "Expected exactly {DOC_COUNT} documents, got {}.",
            args.documents.len()
        )));
    }
    Ok(args.documents.clone())
}

/// Reject empty documents before the core runs.
fn validate_documents(documents: &[String]) -> Result<()> {
    for (i, document) in documents.iter().enumerate() {
        if document.trim().is_empty() {
            return Err(LexisError::missing_input(format!(
                "Document {} is empty. Please fill in all three documents.",
                i + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::pipeline::config::{IdfMode, InclusionFilter, TokenizerMode};

    fn analyze_args(documents: &[&str]) -> AnalyzeArgs {
        AnalyzeArgs {
            documents: documents.iter().map(|d| d.to_string()).collect(),
            files: Vec::new(),
            tokenizer: TokenizerMode::Word,
            inclusion: InclusionFilter::Alphabetic,
            idf_mode: IdfMode::Symbolic,
        }
    }

    #[test]
    fn test_collect_documents_from_args() {
        let docs = collect_documents(&analyze_args(&["a", "b", "c"])).unwrap();
        assert_eq!(docs, ["a", "b", "c"]);
    }

    #[test]
    fn test_collect_documents_wrong_count() {
        let err = collect_documents(&analyze_args(&["a", "b"])).unwrap_err();
        assert!(matches!(err, LexisError::MissingInput(_)));
    }

    #[test]
    fn test_collect_documents_args_and_files_conflict() {
        let mut args = analyze_args(&["a", "b", "c"]);
        args.files = vec![PathBuf::from("a.txt")];
        let err = collect_documents(&args).unwrap_err();
        assert!(matches!(err, LexisError::InvalidOperation(_)));
    }

    #[test]
    fn test_validate_documents_rejects_empty() {
        let docs = vec!["cat".to_string(), "   ".to_string(), "dog".to_string()];
        let err = validate_documents(&docs).unwrap_err();
        assert!(err.to_string().contains("Document 2 is empty"));
    }

    #[test]
    fn test_validate_documents_accepts_non_empty() {
        let docs = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(validate_documents(&docs).is_ok());
    }
}
