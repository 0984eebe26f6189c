//! Criterion benchmarks for boolex.
//!
//! Covers the three hot paths:
//! - Text analysis (tokenize, normalize, stem)
//! - Index construction, sequential and parallel
//! - Boolean query evaluation

use std::fs;
use std::hint::black_box;

use boolex::analysis::analyzer::{Analyzer, StandardAnalyzer};
use boolex::index::{BooleanIndex, DocId, IndexConfig};
use boolex::query::BooleanSearch;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tempfile::TempDir;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search", "engines", "index", "queries", "documents", "terms", "boolean",
        "retrieval", "stemming", "normalization", "tokenization", "running",
        "reading", "compilers", "processing", "поиск", "документы", "индексами",
        "словами", "запросов", "Cats!", "Dogs,", "(birds)", "fish.",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

fn sample_index(documents: &[String]) -> BooleanIndex {
    let mut index = BooleanIndex::new();
    for (position, text) in documents.iter().enumerate() {
        index
            .add_document(position as DocId + 1, text)
            .expect("positive document id");
    }
    index
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new();
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let terms: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(terms)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let terms: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(terms);
            }
        })
    });

    group.finish();
}

/// Benchmark index construction.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(20);

    let documents = generate_test_documents(500);
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("add_documents", |b| {
        b.iter(|| black_box(sample_index(black_box(&documents))))
    });

    let corpus = TempDir::new().unwrap();
    for (position, text) in documents.iter().enumerate() {
        fs::write(corpus.path().join(format!("doc{position:04}.txt")), text).unwrap();
    }

    for parallel in [false, true] {
        let name = if parallel { "build_parallel" } else { "build_sequential" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let config = IndexConfig::builder()
                    .sort_files(true)
                    .parallel(parallel)
                    .progress_interval(0)
                    .build();
                let mut index = BooleanIndex::with_config(config);
                black_box(index.build(corpus.path()).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark query evaluation.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let index = sample_index(&generate_test_documents(2000));
    let search = BooleanSearch::new(&index);

    for query in [
        "search",
        "search AND boolean",
        "cats OR dogs OR birds",
        "documents NOT fish",
        "поиск AND документы NOT запросов",
    ] {
        group.bench_function(query, |b| b.iter(|| black_box(search.search(black_box(query)))));
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_index_build, bench_search);
criterion_main!(benches);
