//! Integration tests for boolean queries over an index built from files.

use std::fs;

use boolex::prelude::*;
use tempfile::TempDir;

fn write_corpus(dir: &TempDir, docs: &[(&str, &str)]) {
    for (name, content) in docs {
        fs::write(dir.path().join(name), content).unwrap();
    }
}

fn build(dir: &TempDir) -> Result<BooleanIndex> {
    let config = IndexConfig::builder().sort_files(true).build();
    let mut index = BooleanIndex::with_config(config);
    index.build(dir.path())?;
    Ok(index)
}

#[test]
fn test_three_document_corpus() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[("d1.txt", "cat dog"), ("d2.txt", "dog bird"), ("d3.txt", "cat bird")],
    );
    let index = build(&dir)?;

    assert_eq!(index.get_documents("dog"), vec![1, 2]);
    assert_eq!(index.get_documents("cat"), vec![1, 3]);
    assert_eq!(index.get_documents("bird"), vec![2, 3]);
    assert!(index.get_documents("fish").is_empty());

    let search = BooleanSearch::new(&index);
    assert_eq!(search.search("cat AND dog"), vec![1]);
    assert_eq!(search.search("cat OR bird"), vec![1, 2, 3]);
    assert_eq!(search.search("cat NOT bird"), vec![1]);
    assert_eq!(search.search("cat"), vec![1, 3]);

    Ok(())
}

#[test]
fn test_leading_not_returns_the_term() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[("d1.txt", "cat dog"), ("d2.txt", "dog bird"), ("d3.txt", "cat bird")],
    );
    let index = build(&dir)?;
    let search = BooleanSearch::new(&index);

    assert_eq!(search.search("NOT cat"), index.get_documents("cat"));
    assert_eq!(search.search("NOT cat AND dog"), vec![1]);

    Ok(())
}

#[test]
fn test_punctuation_case_and_stemming() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[
            ("a.txt", "The CATS were running, quickly!"),
            ("b.txt", "\"Running\" is a hobby."),
            ("c.txt", "Кошки и собаки."),
        ],
    );
    let index = build(&dir)?;
    let search = BooleanSearch::new(&index);

    assert_eq!(search.search("cat"), vec![1]);
    assert_eq!(search.search("running"), vec![1, 2]);
    assert_eq!(search.search("running NOT cats"), vec![2]);
    assert_eq!(search.search("кошки OR собаки"), vec![3]);

    // Lookup words are stemmed but not case-folded.
    assert!(search.search("CATS").is_empty());

    Ok(())
}

#[test]
fn test_empty_files_consume_ids() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, &[("a.txt", "alpha"), ("b.txt", ""), ("c.txt", "gamma")]);

    let config = IndexConfig::builder().sort_files(true).build();
    let mut index = BooleanIndex::with_config(config);
    let report = index.build(dir.path())?;

    assert_eq!(report.files, 3);
    assert_eq!(report.indexed, 2);
    assert_eq!(report.empty, 1);
    assert_eq!(index.get_documents("gamma"), vec![3]);
    assert_eq!(index.get_stats().total_documents, 2);

    Ok(())
}

#[test]
fn test_empty_corpus() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let index = build(&dir)?;

    assert!(index.is_empty());
    assert!(BooleanSearch::new(&index).search("anything").is_empty());

    Ok(())
}

#[test]
fn test_missing_corpus_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut index = BooleanIndex::new();
    assert!(index.build(dir.path().join("missing")).is_err());
}
