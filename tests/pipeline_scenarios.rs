//! Integration tests for the full Bag-of-Words / TF-IDF pipeline.

use std::fs;
use std::io::Write;

use lexis::error::Result;
use lexis::pipeline::config::{IdfMode, InclusionFilter, PipelineConfig, TokenizerMode};
use lexis::pipeline::{Pipeline, Weight};
use tempfile::TempDir;

const DOCS: [&str; 3] = [
    "the cat sat on the mat",
    "the dog sat on the log",
    "the cat and the dog played",
];

#[test]
fn test_worked_example() -> Result<()> {
    let pipeline = Pipeline::new(PipelineConfig::default());
    let report = pipeline.run(DOCS)?;

    assert_eq!(
        report.vocabulary,
        ["and", "cat", "dog", "log", "mat", "on", "played", "sat", "the"]
    );

    let the = report.term_index("the").unwrap();
    let cat = report.term_index("cat").unwrap();

    // Raw counts
    assert_eq!(report.counts[0][the], 2);
    assert_eq!(report.counts[0][cat], 1);

    // Document frequency
    assert_eq!(report.document_frequency[the], 3);
    assert_eq!(report.document_frequency[cat], 2);

    // Term frequency: round(2/6, 3)
    assert_eq!(report.term_frequency[0][the], 0.333);

    // Symbolic weights
    assert_eq!(report.idf[the], Weight::Expression("3/3".to_string()));
    assert_eq!(
        report.tf_idf[0][the],
        Weight::Expression("0.333 × log(3/3)".to_string())
    );

    Ok(())
}

#[test]
fn test_vocabulary_size_equals_distinct_filtered_tokens() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default()).run(DOCS)?;

    let mut distinct: Vec<&str> = report
        .tokens
        .iter()
        .flatten()
        .map(|t| t.as_str())
        .collect();
    distinct.sort_unstable();
    distinct.dedup();

    assert_eq!(report.vocabulary.len(), distinct.len());
    Ok(())
}

#[test]
fn test_count_rows_sum_to_token_totals() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default()).run(DOCS)?;

    for (doc, tokens) in report.tokens.iter().enumerate() {
        assert_eq!(report.doc_token_total(doc) as usize, tokens.len());
    }
    Ok(())
}

#[test]
fn test_document_frequency_bounds() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default()).run(DOCS)?;

    for &df in &report.document_frequency {
        assert!(df >= 1);
        assert!(df <= 3);
    }
    Ok(())
}

#[test]
fn test_term_frequency_rows_sum_to_one() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default()).run(DOCS)?;

    for row in &report.term_frequency {
        let sum: f64 = row.iter().sum();
        // 3-decimal rounding error can drift a few thousandths
        assert!((sum - 1.0).abs() < 0.01, "row sums to {sum}");
    }
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let pipeline = Pipeline::new(PipelineConfig {
        tokenizer_mode: TokenizerMode::Whitespace,
        inclusion_filter: InclusionFilter::StripPunctuation,
        idf_mode: IdfMode::Numeric,
    });

    let first = pipeline.run(DOCS)?;
    let second = pipeline.run(DOCS)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_case_insensitivity_across_documents() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default())
        .run(["Cat naps", "every cat", "CAT chorus"])?;

    assert!(report.vocabulary.contains(&"cat".to_string()));
    assert!(!report.vocabulary.iter().any(|t| t == "Cat" || t == "CAT"));

    let cat = report.term_index("cat").unwrap();
    assert_eq!(report.document_frequency[cat], 3);
    Ok(())
}

#[test]
fn test_punctuation_stripping_variant() -> Result<()> {
    let config = PipelineConfig {
        tokenizer_mode: TokenizerMode::Whitespace,
        inclusion_filter: InclusionFilter::StripPunctuation,
        idf_mode: IdfMode::Symbolic,
    };
    let report = Pipeline::new(config).run(["Hello, world!", "goodbye world", "hello again"])?;

    assert_eq!(report.tokens[0], ["hello", "world"]);
    assert!(report.vocabulary.contains(&"hello".to_string()));
    assert!(report.vocabulary.contains(&"world".to_string()));
    assert!(!report.vocabulary.iter().any(|t| t.contains(',') || t.contains('!')));
    Ok(())
}

#[test]
fn test_zero_token_document_is_degenerate_not_an_error() -> Result<()> {
    // All tokens of the second document are filtered away
    let report = Pipeline::new(PipelineConfig::default())
        .run(["cat dog", "12 34 !!", "cat"])?;

    assert!(report.tokens[1].is_empty());
    assert!(report.counts[1].iter().all(|&c| c == 0));
    assert!(report.term_frequency[1].iter().all(|&tf| tf == 0.0));

    // Terms from the other documents are unaffected
    let cat = report.term_index("cat").unwrap();
    assert_eq!(report.document_frequency[cat], 2);
    Ok(())
}

#[test]
fn test_numeric_idf_mode() -> Result<()> {
    let config = PipelineConfig {
        idf_mode: IdfMode::Numeric,
        ..PipelineConfig::default()
    };
    let report = Pipeline::new(config).run(DOCS)?;

    let the = report.term_index("the").unwrap();
    let mat = report.term_index("mat").unwrap();

    // "the" appears everywhere: ln(3/3) = 0
    assert_eq!(report.idf[the], Weight::Numeric(0.0));
    // "mat" appears once: ln(3/1) = 1.0986...
    assert_eq!(report.idf[mat], Weight::Numeric(1.099));

    // TF-IDF cells are evaluated numbers in this mode
    for row in &report.tf_idf {
        for cell in row {
            assert!(matches!(cell, Weight::Numeric(_)));
        }
    }
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let report = Pipeline::new(PipelineConfig::default()).run(DOCS)?;
    let json = serde_json::to_string_pretty(&report)?;

    assert!(json.contains("\"vocabulary\""));
    assert!(json.contains("\"tf_idf\""));
    assert!(json.contains("3/2"));
    Ok(())
}

#[test]
fn test_documents_read_from_files() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let mut paths = Vec::new();
    for (i, doc) in DOCS.iter().enumerate() {
        let path = temp_dir.path().join(format!("doc{i}.txt"));
        let mut file = fs::File::create(&path)?;
        writeln!(file, "{doc}")?;
        paths.push(path);
    }

    let contents: Vec<String> = paths
        .iter()
        .map(|p| fs::read_to_string(p))
        .collect::<std::io::Result<_>>()?;
    let report = Pipeline::new(PipelineConfig::default()).run([
        contents[0].as_str(),
        contents[1].as_str(),
        contents[2].as_str(),
    ])?;

    assert_eq!(
        report.vocabulary,
        ["and", "cat", "dog", "log", "mat", "on", "played", "sat", "the"]
    );
    Ok(())
}
