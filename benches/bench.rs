//! Criterion benchmarks for the Lexis pipeline.
//!
//! Covers the two costs that matter at teaching scale:
//! - Text analysis (tokenization + filtering)
//! - The full three-document statistics run

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexis::pipeline::config::{IdfMode, InclusionFilter, PipelineConfig, TokenizerMode};
use lexis::pipeline::Pipeline;

/// Generate a test document of roughly the requested word count.
fn generate_document(word_count: usize) -> String {
    let words = [
        "token", "vocabulary", "frequency", "document", "corpus", "term", "count", "weight",
        "inverse", "feature", "vector", "pipeline", "analysis", "statistics", "teaching",
        "example",
    ];

    let mut doc_words = Vec::with_capacity(word_count);
    for i in 0..word_count {
        doc_words.push(words[i % words.len()]);
    }
    doc_words.join(" ")
}

fn bench_analysis(c: &mut Criterion) {
    let config = PipelineConfig::default();
    let analyzer = config.build_analyzer();
    let text = generate_document(200);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("word_alphabetic_200_words", |b| {
        b.iter(|| analyzer.token_texts(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let docs = [
        generate_document(100),
        generate_document(150),
        generate_document(200),
    ];

    let mut group = c.benchmark_group("pipeline");

    let symbolic = Pipeline::new(PipelineConfig::default());
    group.bench_function("run_symbolic", |b| {
        b.iter(|| {
            symbolic
                .run([
                    black_box(docs[0].as_str()),
                    black_box(docs[1].as_str()),
                    black_box(docs[2].as_str()),
                ])
                .unwrap()
        })
    });

    let numeric = Pipeline::new(PipelineConfig {
        tokenizer_mode: TokenizerMode::Whitespace,
        inclusion_filter: InclusionFilter::StripPunctuation,
        idf_mode: IdfMode::Numeric,
    });
    group.bench_function("run_numeric", |b| {
        b.iter(|| {
            numeric
                .run([
                    black_box(docs[0].as_str()),
                    black_box(docs[1].as_str()),
                    black_box(docs[2].as_str()),
                ])
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_pipeline);
criterion_main!(benches);
