//! Output formatting for CLI commands.
//!
//! The human format renders the pipeline's tables one derivation step at a
//! time, in the order a course would present them; the JSON format emits
//! the report verbatim for other tools.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::report::PipelineReport;

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    /// Name of the analyzer that produced the tokens.
    pub analyzer: String,
    /// Tokens that survived the filter chain.
    pub tokens: Vec<Token>,
    /// Tokens the filter chain rejected (only with --show-rejected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<Token>>,
}

/// Output a pipeline report in the requested format.
pub fn output_report(report: &PipelineReport, args: &LexisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_report_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output a tokenize result in the requested format.
pub fn output_tokenize_result(result: &TokenizeResult, args: &LexisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_tokenize_human(result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output any serializable result as JSON.
fn output_json<T: Serialize>(result: &T, args: &LexisArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn output_tokenize_human(result: &TokenizeResult, args: &LexisArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("Analyzer: {}", result.analyzer);
        println!();
    }

    print_heading("Tokens");
    println!("{}", join_token_texts(&result.tokens));

    if let Some(rejected) = &result.rejected {
        println!();
        print_heading("Rejected by the filter chain");
        if rejected.is_empty() {
            println!("(none)");
        } else {
            println!("{}", join_token_texts(rejected));
        }
    }

    Ok(())
}

fn output_report_human(report: &PipelineReport, _args: &LexisArgs) -> Result<()> {
    // Step 1: tokens per document
    print_heading("Step 1: Tokens in Each Document");
    for (i, tokens) in report.tokens.iter().enumerate() {
        println!("Document {}: {}", i + 1, tokens.join(", "));
    }
    println!();

    // Step 2: vocabulary
    print_heading("Step 2: Vocabulary of Unique Words");
    println!("{}", report.vocabulary.join(", "));
    println!();

    // Step 3: raw counts
    print_heading("Step 3: Bag of Words (raw counts)");
    print_term_table(report, |doc, term| report.counts[doc][term].to_string());
    println!();

    // Step 4: term frequency
    print_heading("Step 4: Term Frequency (count / document total)");
    print_term_table(report, |doc, term| {
        format!("{}", report.term_frequency[doc][term])
    });
    println!();

    // Step 5: document frequency
    print_heading("Step 5: Document Frequency");
    print_vector_table(report, "DF", |term| {
        report.document_frequency[term].to_string()
    });
    println!();

    // Step 6: inverse document frequency
    print_heading("Step 6: Inverse Document Frequency");
    print_vector_table(report, "IDF", |term| report.idf[term].to_string());
    println!();

    // Step 7: TF-IDF
    print_heading("Step 7: TF-IDF");
    print_term_table(report, |doc, term| report.tf_idf[doc][term].to_string());

    Ok(())
}

fn print_heading(title: &str) {
    println!("{title}");
    println!("{}", "═".repeat(title.chars().count()));
}

fn join_token_texts(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print a terms × documents table, one row per vocabulary term.
fn print_term_table<F>(report: &PipelineReport, cell: F)
where
    F: Fn(usize, usize) -> String,
{
    let mut headers = vec!["Term".to_string()];
    for doc in 0..report.tokens.len() {
        headers.push(format!("Doc {}", doc + 1));
    }

    let rows: Vec<Vec<String>> = report
        .vocabulary
        .iter()
        .enumerate()
        .map(|(term_idx, term)| {
            let mut row = vec![term.clone()];
            for doc in 0..report.tokens.len() {
                row.push(cell(doc, term_idx));
            }
            row
        })
        .collect();

    print_table(&headers, &rows);
}

/// Print a per-term vector table (one value column).
fn print_vector_table<F>(report: &PipelineReport, label: &str, cell: F)
where
    F: Fn(usize) -> String,
{
    let headers = vec!["Term".to_string(), label.to_string()];
    let rows: Vec<Vec<String>> = report
        .vocabulary
        .iter()
        .enumerate()
        .map(|(term_idx, term)| vec![term.clone(), cell(term_idx)])
        .collect();

    print_table(&headers, &rows);
}

/// Column-aligned plain-text table.
fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    println!(
        "{}",
        "─".repeat(widths.iter().sum::<usize>() + 2 * (columns - 1))
    );

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{:<width$}", value, width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
}
